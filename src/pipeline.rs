use crate::api::client::{DataDragonClient, Fetch};
use crate::api::endpoints;
use crate::api::models::{Champion, DragonChampion, Patch, Skin};
use crate::error::AppError;
use crate::marker::VersionMarker;
use crate::version::{self, PatchVersions, Resolution, VersionMode};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Outcome {
    /// The marker already names the latest version; nothing was fetched or written.
    Skipped(String),
    Written { patch: Patch, path: PathBuf },
}

/// Resolve versions, then fetch, transform and write one patch.
pub fn run<F: Fetch>(client: &DataDragonClient<F>, mode: &VersionMode) -> Result<Outcome, AppError> {
    let config = client.config();
    let marker = VersionMarker::new(config.marker_path());

    let versions = match version::resolve(mode, client, &marker)? {
        Resolution::UpToDate(version) => return Ok(Outcome::Skipped(version)),
        Resolution::Fetch(versions) => versions,
    };

    let patch = build_patch(client, &versions)?;
    let path = write_patch(&patch, &config.patch_path(), &marker)?;

    Ok(Outcome::Written { patch, path })
}

pub fn build_patch<F: Fetch>(
    client: &DataDragonClient<F>,
    versions: &PatchVersions,
) -> Result<Patch, AppError> {
    let latest = client.champion_index(&versions.latest)?;
    let previous = client.champion_index(&versions.previous)?;
    let base_url = &client.config().base_url;

    let pb = ProgressBar::new(latest.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    // BTreeMap keys come out sorted by id
    let mut champions = Vec::with_capacity(latest.len());
    for id in latest.keys() {
        pb.set_message(id.clone());
        let detail = client.champion_detail(&versions.latest, id)?;
        champions.push(to_champion(id, detail, !previous.contains_key(id), base_url));
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Patch {
        version: versions.latest.clone(),
        champions,
    })
}

/// Output record for the champion requested as `id`. Image URLs and the output id
/// come from `id`, never from the detail record's own `id` field.
pub fn to_champion(id: &str, detail: DragonChampion, is_new: bool, base_url: &str) -> Champion {
    let skins = detail
        .skins
        .iter()
        .map(|skin| Skin {
            name: skin.name.clone(),
            url: endpoints::splash_url(base_url, id, skin.num),
        })
        .collect();

    Champion {
        id: id.to_string(),
        thumbnail: endpoints::thumbnail_url(base_url, id),
        name: detail.name,
        title: detail.title,
        lore: detail.lore,
        skins,
        new: is_new,
    }
}

/// Pretty JSON with a one-space indent and no trailing newline.
pub fn serialize_patch(patch: &Patch) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    patch
        .serialize(&mut ser)
        .map_err(|e| AppError::json("patch output", e))?;
    Ok(buf)
}

/// Writes the patch, then advances the marker.
pub fn write_patch(
    patch: &Patch,
    path: &Path,
    marker: &VersionMarker,
) -> Result<PathBuf, AppError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))?;
    }

    let data = serialize_patch(patch)?;
    fs::write(path, data).map_err(|e| AppError::io(path, e))?;
    marker.store(&patch.version)?;

    Ok(path.to_path_buf())
}
