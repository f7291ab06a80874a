extern crate scraper;

use crate::error::{structure_error, Result};
use scraper::{ElementRef, Html, Selector};

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {:?}: {:?}", css, e))
}

/// The only element matching `css`; none or several means the page layout
/// is not the one we know.
pub(crate) fn single<'a>(document: &'a Html, css: &str) -> Result<ElementRef<'a>> {
    let wanted = selector(css);
    let mut found = document.select(&wanted);
    match (found.next(), found.next()) {
        (Some(v), None) => Ok(v),
        (None, _) => Err(structure_error(format!("expected one `{}`, found none", css))),
        (Some(_), Some(_)) => Err(structure_error(format!(
            "expected one `{}`, found {}",
            css,
            2 + found.count()
        ))),
    }
}

pub(crate) fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
