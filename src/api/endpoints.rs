// URL templates for the Data Dragon static CDN.
// Image URLs are built locally and never fetched.

pub fn versions_url(base: &str) -> String {
    format!("{}/api/versions.json", base)
}

pub fn champion_index_url(base: &str, version: &str, locale: &str) -> String {
    format!("{}/cdn/{}/data/{}/champion.json", base, version, locale)
}

pub fn champion_detail_url(base: &str, version: &str, locale: &str, id: &str) -> String {
    format!("{}/cdn/{}/data/{}/champion/{}.json", base, version, locale, id)
}

pub fn thumbnail_url(base: &str, id: &str) -> String {
    format!("{}/cdn/img/champion/loading/{}_0.jpg", base, id)
}

pub fn splash_url(base: &str, id: &str, num: u32) -> String {
    format!("{}/cdn/img/champion/splash/{}_{}.jpg", base, id, num)
}
