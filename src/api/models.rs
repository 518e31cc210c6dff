use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// Data Dragon champion summary (champion.json). Only the keys are read.
#[derive(Debug, Deserialize)]
pub struct ChampionIndexResponse {
    pub data: ChampionIndex,
}

pub type ChampionIndex = BTreeMap<String, IgnoredAny>;

// Data Dragon per-champion detail (champion/{id}.json)
#[derive(Debug, Deserialize)]
pub struct ChampionDetailResponse {
    pub data: HashMap<String, DragonChampion>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DragonChampion {
    pub name: String,
    pub title: String,
    pub lore: String,
    pub skins: Vec<DragonSkin>,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct DragonSkin {
    pub id: String,
    pub num: u32,
    pub name: String,
}

// Output artifact (patch.json)
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Patch {
    pub version: String,
    pub champions: Vec<Champion>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Champion {
    pub id: String,
    pub name: String,
    pub title: String,
    pub lore: String,
    pub thumbnail: String,
    pub skins: Vec<Skin>,
    pub new: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Skin {
    pub name: String,
    pub url: String,
}
