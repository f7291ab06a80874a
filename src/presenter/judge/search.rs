extern crate regex;
extern crate scraper;

use crate::{
    config::judge::{CONTEST_PATTERN, CSRF_COOKIE, CSRF_FIELD, HOST_PATTERN, USERNAME_SELECTOR},
    error::{auth_error, config_error, Result},
    extract::select::{selector, single},
};
use regex::Regex;
use scraper::Html;

pub(super) struct RegexSet {
    host: Regex,
    contest: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        Self {
            host: Regex::new(HOST_PATTERN).unwrap(),
            contest: Regex::new(CONTEST_PATTERN).unwrap(),
        }
    }
    pub(super) fn find_host(&self, url: &str) -> Result<String> {
        self.host
            .find(url)
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| config_error(format!("no host found in ranking url {:?}", url)))
    }
    /// First contest link on a page, as a path.
    pub(super) fn find_contest(&self, page: &str) -> Option<String> {
        let document = Html::parse_document(page);
        let anchors = selector("a[href]");
        let found = document
            .select(&anchors)
            .filter_map(|a| a.value().attr("href"))
            .find(|href| self.contest.is_match(href))
            .map(str::to_string);
        found
    }
}

pub(super) fn csrf_from_cookies(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == CSRF_COOKIE {
            Some(value.to_string())
        } else {
            None
        }
    })
}
pub(super) fn csrf_from_form(page: &str) -> Option<String> {
    let document = Html::parse_document(page);
    let input = selector(&format!(r#"input[name="{}"]"#, CSRF_FIELD));
    let found = document
        .select(&input)
        .find_map(|i| i.value().attr("value"))
        .map(str::to_string);
    found
}

pub(super) fn displayed_username(page: &str) -> Result<String> {
    let document = Html::parse_document(page);
    let name = single(&document, USERNAME_SELECTOR)
        .map_err(|e| auth_error(format!("can't find logged in user: {}", e.context())))?
        .text()
        .collect::<String>();
    Ok(name.trim().to_string())
}
