extern crate handlebars;
extern crate serde;

use crate::{
    error::{Error, Kind, Result},
    options::Options,
    types::{AssetBundle, Participant},
};
use handlebars::Handlebars;
use serde::Serialize;

const TEMPLATE: &str = include_str!("template.html");

#[derive(Serialize)]
struct Props<'a> {
    lang: &'a str,
    contest_name: &'a str,
    credits: Option<&'a str>,
    preamble: Option<&'a str>,
    copied_css: &'a str,
    syntax_style: Option<&'a str>,
    font: &'a str,
    user_submissions: &'a [Participant],
}

/// Standalone HTML presentation, one slide per submission.
pub fn render(options: &Options, participants: &[Participant], assets: &AssetBundle) -> Result<String> {
    let mut engine = Handlebars::new();
    engine
        .register_template_string("presentation", TEMPLATE)
        .map_err(|e| Error::with_source(Kind::Render, "parsing template", e))?;
    engine
        .render(
            "presentation",
            &Props {
                lang: &options.lang,
                contest_name: &options.contest_name,
                credits: options.credits.as_deref(),
                preamble: options.preamble.as_deref(),
                copied_css: &assets.stylesheet,
                syntax_style: assets.syntax_style.as_deref(),
                font: &options.font,
                user_submissions: participants,
            },
        )
        .map_err(|e| Error::with_source(Kind::Render, "rendering template", e))
}
