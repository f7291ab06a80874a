extern crate sha2;

use crate::config::cache::SLUG_LEN;
use sha2::{Digest, Sha256};
use std::fmt;

/// File name a page is cached under.
///
/// The readable slug alone collides for URLs differing only in punctuation,
/// so the digest of the exact URL is appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(String);

fn slugify(text: &str) -> String {
    let mut ret = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !ret.is_empty() {
                ret.push('-');
            }
            gap = false;
            ret.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    ret.truncate(SLUG_LEN);
    ret.truncate(ret.trim_end_matches('-').len());
    ret
}

impl Key {
    pub fn from_url(url: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        match slugify(url) {
            slug if slug.is_empty() => Self(digest),
            slug => Self(format!("{}-{}", slug, digest)),
        }
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(
            slugify("https://sio2.mimuw.edu.pl/c/oi30-1/ranking/"),
            "https-sio2-mimuw-edu-pl-c-oi30-1-ranking"
        );
        assert_eq!(slugify("--A__b--"), "a-b");
    }

    #[test]
    fn same_url_same_key() {
        let url = "https://sio2.mimuw.edu.pl/c/oi30-1/s/123/";
        assert_eq!(Key::from_url(url), Key::from_url(url));
    }

    #[test]
    fn site_urls_do_not_collide() {
        let urls = [
            "https://sio2.mimuw.edu.pl/c/oi30-1/s/123/",
            "https://sio2.mimuw.edu.pl/c/oi30-1/s/123",
            "https://sio2.mimuw.edu.pl/c/oi30-1/s/123/source/",
            "https://sio2.mimuw.edu.pl/c/oi30-1/s/123/source",
            "https://sio2.mimuw.edu.pl/c/oi30-1/s/1231/",
            "https://sio2.mimuw.edu.pl/c/oi30-1/ranking/",
            "https://sio2.mimuw.edu.pl/c/oi30_1/ranking/",
            "https://sio2.mimuw.edu.pl",
        ];
        for (i, a) in urls.iter().enumerate() {
            for b in &urls[i + 1..] {
                assert_ne!(Key::from_url(a), Key::from_url(b), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn punctuation_only_url_is_bare_digest() {
        let key = Key::from_url("//?#");
        assert_eq!(key.as_str().len(), 64);
        assert!(!key.as_str().starts_with('-'));
        assert_ne!(key, Key::from_url("/?"));
    }

    #[test]
    fn long_urls_stay_file_name_sized() {
        let url = format!("https://sio2.mimuw.edu.pl/c/{}/", "x".repeat(500));
        let key = Key::from_url(&url);
        assert!(key.as_str().len() <= SLUG_LEN + 1 + 64);
        assert!(key
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }
}
