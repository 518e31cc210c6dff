use crate::api::client::{DataDragonClient, Fetch};
use crate::error::AppError;
use crate::marker::VersionMarker;

/// How the target and baseline versions are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionMode {
    /// Both versions given by the caller, taken as-is.
    Explicit { latest: String, previous: String },
    /// Newest two entries of the versions feed, skipped when already on disk.
    Discover { force: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchVersions {
    pub latest: String,
    pub previous: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    UpToDate(String),
    Fetch(PatchVersions),
}

pub fn resolve<F: Fetch>(
    mode: &VersionMode,
    client: &DataDragonClient<F>,
    marker: &VersionMarker,
) -> Result<Resolution, AppError> {
    match mode {
        VersionMode::Explicit { latest, previous } => Ok(Resolution::Fetch(PatchVersions {
            latest: latest.clone(),
            previous: previous.clone(),
        })),
        VersionMode::Discover { force } => {
            let current = marker.load_or_create()?;
            let versions = client.versions()?;

            let (latest, previous) = match versions.as_slice() {
                [latest, previous, ..] => (latest.clone(), previous.clone()),
                _ => return Err(AppError::NotEnoughVersions(versions.len())),
            };

            if current == latest && !force {
                return Ok(Resolution::UpToDate(latest));
            }

            Ok(Resolution::Fetch(PatchVersions { latest, previous }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::testing::FakeFetcher;
    use crate::config::Config;
    use std::fs;

    const BASE: &str = "http://dragon.test";

    fn client_with_feed(feed: &str) -> DataDragonClient<FakeFetcher> {
        let mut fetcher = FakeFetcher::new();
        fetcher.serve(format!("{BASE}/api/versions.json"), feed);
        let config = Config {
            base_url: BASE.to_string(),
            ..Config::default()
        };
        DataDragonClient::new(config, fetcher)
    }

    #[test]
    fn test_explicit_mode_skips_feed_and_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = VersionMarker::new(dir.path().join("version.txt"));
        let client = client_with_feed("[]");
        let mode = VersionMode::Explicit {
            latest: "14.2.1".into(),
            previous: "14.1.1".into(),
        };

        let resolution = resolve(&mode, &client, &marker).unwrap();
        assert_eq!(
            resolution,
            Resolution::Fetch(PatchVersions {
                latest: "14.2.1".into(),
                previous: "14.1.1".into()
            })
        );
        assert!(client_requests(&client).is_empty());
        assert!(!marker.path().exists());
    }

    #[test]
    fn test_discover_with_absent_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = VersionMarker::new(dir.path().join("data/version.txt"));
        let client = client_with_feed(r#"["14.2","14.1"]"#);

        let resolution = resolve(&VersionMode::Discover { force: false }, &client, &marker).unwrap();
        assert_eq!(
            resolution,
            Resolution::Fetch(PatchVersions {
                latest: "14.2".into(),
                previous: "14.1".into()
            })
        );
        assert_eq!(fs::read_to_string(marker.path()).unwrap(), "");
    }

    #[test]
    fn test_discover_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let marker = VersionMarker::new(dir.path().join("version.txt"));
        marker.store("14.2").unwrap();
        let client = client_with_feed(r#"["14.2","14.1"]"#);

        let resolution = resolve(&VersionMode::Discover { force: false }, &client, &marker).unwrap();
        assert_eq!(resolution, Resolution::UpToDate("14.2".into()));
    }

    #[test]
    fn test_force_overrides_matching_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = VersionMarker::new(dir.path().join("version.txt"));
        marker.store("14.2").unwrap();
        let client = client_with_feed(r#"["14.2","14.1"]"#);

        let resolution = resolve(&VersionMode::Discover { force: true }, &client, &marker).unwrap();
        assert!(matches!(resolution, Resolution::Fetch(ref v) if v.latest == "14.2"));
    }

    #[test]
    fn test_short_feed_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let marker = VersionMarker::new(dir.path().join("version.txt"));
        let client = client_with_feed(r#"["14.2"]"#);

        let err = resolve(&VersionMode::Discover { force: false }, &client, &marker).unwrap_err();
        assert!(matches!(err, AppError::NotEnoughVersions(1)));
    }

    #[test]
    fn test_malformed_feed_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let marker = VersionMarker::new(dir.path().join("version.txt"));
        let client = client_with_feed(r#"{"latest":"14.2"}"#);

        let err = resolve(&VersionMode::Discover { force: false }, &client, &marker).unwrap_err();
        assert!(matches!(err, AppError::JsonError { .. }));
    }

    fn client_requests(client: &DataDragonClient<FakeFetcher>) -> Vec<String> {
        client.fetcher().requests()
    }
}
