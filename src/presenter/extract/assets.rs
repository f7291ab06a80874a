extern crate scraper;

use super::select::single;
use crate::{config::extract::STYLESHEET, error::{structure_error, Result}};
use scraper::Html;

/// `href` of the site stylesheet linked from the ranking page.
pub fn stylesheet_link(page: &str) -> Result<String> {
    let document = Html::parse_document(page);
    let link = single(&document, STYLESHEET)?;
    link.value()
        .attr("href")
        .map(str::to_string)
        .ok_or_else(|| structure_error("stylesheet link has no href"))
}
