mod api;
mod config;
mod display;
mod error;
mod marker;
mod pipeline;
mod version;

use anyhow::Context;
use api::client::{DataDragonClient, HttpFetcher};
use clap::Parser;
use config::Config;
use display::output::{display_error, display_info, display_new_champions, display_success, display_warning};
use pipeline::Outcome;
use version::VersionMode;

const ENV_HELP: &str = "\
Optional environment overrides (also read from a .env file):
  DDRAGON_BASE_URL             CDN root [default: https://ddragon.leagueoflegends.com]
  DDRAGON_LOCALE               data locale [default: en_US]
  PATCH_OUTPUT_DIR             where patch.json and version.txt go [default: public/data]
  DDRAGON_REQUESTS_PER_SECOND  request quota [default: 20]";

#[derive(Parser, Debug)]
#[command(name = "Champion Patch")]
#[command(about = "Download champion data for a patch and flag newly added champions", long_about = None)]
#[command(after_help = ENV_HELP)]
struct Args {
    /// Version to download, e.g. 14.2.1 (omit both versions to use the latest)
    #[arg(requires = "previous")]
    latest: Option<String>,

    /// Version to compare against when flagging new champions
    previous: Option<String>,

    /// Download the latest version again even if it is already on disk
    #[arg(long, conflicts_with = "latest")]
    force: bool,
}

impl Args {
    fn mode(self) -> VersionMode {
        match (self.latest, self.previous) {
            (Some(latest), Some(previous)) => VersionMode::Explicit { latest, previous },
            _ => VersionMode::Discover { force: self.force },
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    let mode = args.mode();

    if let VersionMode::Explicit { latest, previous } = &mode {
        display_info(&format!("Latest version: {}", latest));
        display_info(&format!("Previous version: {}", previous));
    } else {
        display_info("Checking the versions feed for the latest patch...");
    }

    let client = DataDragonClient::new(config.clone(), HttpFetcher::new(&config));

    match pipeline::run(&client, &mode).context("patch generation aborted")? {
        Outcome::Skipped(version) => {
            display_warning(&format!(
                "Version {} is already downloaded. Use the flag --force to download it again",
                version
            ));
        }
        Outcome::Written { patch, path } => {
            display_success(&format!(
                "Patch {} successfully downloaded ({} champions) to {}",
                patch.version,
                patch.champions.len(),
                path.display()
            ));
            display_new_champions(&patch.champions);
        }
    }

    Ok(())
}
