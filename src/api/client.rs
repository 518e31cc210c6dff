use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::thread;

use super::endpoints;
use super::models::*;

const USER_AGENT: &str = concat!("champion_patch/", env!("CARGO_PKG_VERSION"));

/// Raw text transport. Production goes through [`HttpFetcher`]; tests serve canned bodies.
pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String, AppError>;
}

pub struct HttpFetcher {
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        let per_second = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();

        HttpFetcher {
            agent,
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
            clock: DefaultClock::default(),
        }
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String, AppError> {
        // Wait for quota, never give up on it
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }

        match self.agent.get(url).call() {
            Ok(resp) => resp.into_string().map_err(|e| AppError::HttpError {
                url: url.to_string(),
                message: e.to_string(),
            }),
            Err(ureq::Error::Status(status, _)) => Err(AppError::StatusError {
                url: url.to_string(),
                status,
            }),
            Err(e) => Err(AppError::HttpError {
                url: url.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

pub struct DataDragonClient<F: Fetch> {
    config: Config,
    fetcher: F,
}

impl<F: Fetch> DataDragonClient<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        DataDragonClient { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let body = self.fetcher.get_text(url)?;
        serde_json::from_str(&body).map_err(|e| AppError::json(url, e))
    }

    /// Published versions, newest first.
    pub fn versions(&self) -> Result<Vec<String>, AppError> {
        self.fetch_json(&endpoints::versions_url(&self.config.base_url))
    }

    pub fn champion_index(&self, version: &str) -> Result<ChampionIndex, AppError> {
        let url = endpoints::champion_index_url(&self.config.base_url, version, &self.config.locale);
        let response: ChampionIndexResponse = self.fetch_json(&url)?;
        Ok(response.data)
    }

    /// Full record for one champion. The response is keyed by id and must contain `id`.
    pub fn champion_detail(&self, version: &str, id: &str) -> Result<DragonChampion, AppError> {
        let url = endpoints::champion_detail_url(
            &self.config.base_url,
            version,
            &self.config.locale,
            id,
        );
        let mut response: ChampionDetailResponse = self.fetch_json(&url)?;

        response
            .data
            .remove(id)
            .ok_or_else(|| AppError::MissingChampion {
                id: id.to_string(),
                version: version.to_string(),
            })
    }
}
