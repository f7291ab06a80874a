extern crate serde;
extern crate serde_yaml;

use crate::error::{Error, Kind, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

fn default_lang() -> String {
    String::from("pl")
}
fn default_contest_name() -> String {
    String::from("contest_name")
}
fn default_font() -> String {
    String::from("Georgia, sans-serif")
}

/// Contents of the presentation's YAML config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub ranking_url: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_contest_name")]
    pub contest_name: String,
    #[serde(default)]
    pub credits: Option<String>,
    #[serde(default)]
    pub preamble: Option<String>,
    #[serde(default = "default_font")]
    pub font: String,
}

pub fn from_reader<R: Read>(rdr: R) -> Result<Options> {
    serde_yaml::from_reader(rdr)
        .map_err(|e| Error::with_source(Kind::Config, "reading presentation config", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let opt = from_reader("ranking_url: https://sio2.mimuw.edu.pl/c/oi/ranking/\n".as_bytes())
            .unwrap();
        assert_eq!(opt.ranking_url, "https://sio2.mimuw.edu.pl/c/oi/ranking/");
        assert_eq!(opt.lang, "pl");
        assert_eq!(opt.contest_name, "contest_name");
        assert_eq!(opt.font, "Georgia, sans-serif");
        assert_eq!(opt.credits, None);
        assert_eq!(opt.preamble, None);
    }

    #[test]
    fn every_key_is_read() {
        let yaml = r#"
ranking_url: https://sio2.mimuw.edu.pl/c/oi/ranking/
lang: en
contest_name: OI 30, stage I
credits: Jury
preamble: "<p>Hello</p>"
font: Helvetica
"#;
        let opt = from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(opt.lang, "en");
        assert_eq!(opt.contest_name, "OI 30, stage I");
        assert_eq!(opt.credits.as_deref(), Some("Jury"));
        assert_eq!(opt.preamble.as_deref(), Some("<p>Hello</p>"));
        assert_eq!(opt.font, "Helvetica");
    }

    #[test]
    fn ranking_url_is_required() {
        let err = from_reader("lang: en\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), Kind::Config);
    }
}
