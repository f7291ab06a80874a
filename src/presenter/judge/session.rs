extern crate log;
extern crate reqwest;

use super::{search::RegexSet, Fetch, Policy};
use crate::{
    account::Credentials,
    cache::{Key, Store},
    config::judge::FIREFOX_UA,
    error::{network_error, Error, Kind, Result},
};
use log::info;
use reqwest::{blocking::Client, cookie::Jar};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Anonymous,
    Authenticated,
}

/// Cookie session with the judge, reading pages through the cache.
pub struct Session {
    pub(super) client: Client,
    pub(super) jar: Arc<Jar>,
    pub(super) host: String,
    pub(super) regex: RegexSet,
    pub(super) state: State,
    cache: Store,
}

impl Session {
    /// Anonymous session for the site hosting `ranking_url`.
    pub fn new(ranking_url: &str, cache: Store) -> Result<Self> {
        let regex = RegexSet::new();
        let host = regex.find_host(ranking_url)?;
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .user_agent(FIREFOX_UA)
            .cookie_provider(jar.clone())
            .build()
            .map_err(|e| Error::with_source(Kind::Transport, "building client", e))?;
        Ok(Session {
            client,
            jar,
            host,
            regex,
            state: State::Anonymous,
            cache,
        })
    }
    /// Like [`Session::new`], logging in right away when credentials are given.
    pub fn open(ranking_url: &str, cache: Store, credentials: Option<Credentials>) -> Result<Self> {
        let mut ret = Self::new(ranking_url, cache)?;
        if let Some(c) = credentials {
            ret.login(c)?;
        }
        Ok(ret)
    }

    pub fn state(&self) -> State {
        self.state
    }
    pub fn cache(&self) -> &Store {
        &self.cache
    }
    pub(super) fn landing_url(&self) -> String {
        format!("{}/", self.host)
    }

    pub(super) fn get(&self, url: &str) -> Result<String> {
        self.client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| network_error(url, e))
    }

    pub fn fetch(&self, url: &str, policy: Policy) -> Result<String> {
        let key = Key::from_url(url);
        if !policy.fresh {
            if let Some(text) = self.cache.read(&key)? {
                info!("File from cache: {} → {}", url, key);
                return Ok(text);
            }
        }
        if policy.requires_auth && self.state != State::Authenticated {
            return Err(Error::new(
                Kind::Access,
                format!("session must be logged in to download {}", url),
            ));
        }
        info!("Saving to cache: {} → {}", url, key);
        let text = self.get(url)?;
        self.cache.write(&key, &text)?;
        Ok(text)
    }
}

impl Fetch for Session {
    fn fetch(&self, url: &str, policy: Policy) -> Result<String> {
        Session::fetch(self, url, policy)
    }
}
