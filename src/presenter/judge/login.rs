extern crate log;
extern crate reqwest;

use super::{
    search::{csrf_from_cookies, csrf_from_form, displayed_username},
    Policy, Session, State,
};
use crate::{
    account::Credentials,
    config::judge::CSRF_FIELD,
    error::{auth_error, network_error, Error, Kind, Result},
};
use log::info;
use reqwest::{cookie::CookieStore, header::REFERER, Url};

impl Session {
    /// Any contest works: every contest serves the same login form.
    fn find_contest_url(&self) -> Result<String> {
        info!("Searching for any contest: {}", self.host);
        let landing = self.fetch(&self.landing_url(), Policy::default().fresh().public())?;
        self.regex
            .find_contest(&landing)
            .map(|path| format!("{}{}", self.host, path))
            .ok_or_else(|| auth_error(format!("no contest link found on {}", self.host)))
    }

    fn csrf_token(&self, login_url: &str, page: &str) -> Result<String> {
        let url = Url::parse(login_url)
            .map_err(|e| Error::with_source(Kind::Config, login_url, e))?;
        self.jar
            .cookies(&url)
            .and_then(|v| v.to_str().ok().and_then(csrf_from_cookies))
            .or_else(|| csrf_from_form(page))
            .ok_or_else(|| auth_error(format!("no csrf token offered by {}", login_url)))
    }

    pub fn login(&mut self, credentials: Credentials) -> Result<()> {
        let (username, password) = credentials.into_parts();
        let login_url = format!("{}login/", self.find_contest_url()?);
        info!("Forging referer: {}", login_url);
        let page = self.get(&login_url)?;
        let csrf = self.csrf_token(&login_url, &page)?;
        let password =
            password().map_err(|e| Error::with_source(Kind::Config, "reading password", e))?;

        info!("Requesting login: {}", login_url);
        self.client
            .post(&login_url)
            .header(REFERER, login_url.as_str())
            .form(&[
                (CSRF_FIELD, csrf.as_str()),
                ("username", username.as_str()),
                ("password", password.as_str()),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| network_error(&login_url, e))?;
        self.state = State::Authenticated;

        let landing = self.fetch(&self.landing_url(), Policy::default().fresh())?;
        let displayed = displayed_username(&landing)?;
        if displayed != username {
            self.state = State::Anonymous;
            return Err(auth_error(format!(
                "logged in as {:?}, expected {:?}",
                displayed, username
            )));
        }
        info!("Logged in as {}", username);
        Ok(())
    }
}
