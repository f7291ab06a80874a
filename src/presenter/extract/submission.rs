extern crate scraper;

use super::select::{selector, single};
use crate::{
    config::extract::{SOURCE, STRIPPED, STYLE, SUBMISSION_TABLE},
    error::{structure_error, Result},
};
use scraper::{ElementRef, Html};

/// Result table of a submission page, without its interactive widgets.
pub fn submission_table(page: &str) -> Result<String> {
    let mut document = Html::parse_document(page);
    let (table, widgets) = {
        let table = single(&document, SUBMISSION_TABLE)?;
        let strip = selector(STRIPPED);
        let widgets: Vec<_> = table.select(&strip).map(|e| e.id()).collect();
        (table.id(), widgets)
    };
    for id in widgets {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
    let ret = document
        .tree
        .get(table)
        .and_then(ElementRef::wrap)
        .map(|t| t.html())
        .ok_or_else(|| structure_error(format!("lost `{}` while cleaning it", SUBMISSION_TABLE)));
    ret
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub code: String,
    pub style: Option<String>,
}

/// Highlighted code of a source page, and the page's highlighting
/// stylesheet when `with_style` is set.
pub fn source(page: &str, with_style: bool) -> Result<Source> {
    let document = Html::parse_document(page);
    let code = single(&document, SOURCE)?.html();
    let style = if with_style {
        Some(single(&document, STYLE)?.html())
    } else {
        None
    };
    Ok(Source { code, style })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    const SUBMISSION: &str = r##"<html><body>
        <table class="table submission">
          <tr><th>Test</th><th>Result</th></tr>
          <tr><td>1a</td><td>OK <span class="badge">0.01s</span>
              <div class="dropdown"><a href="#">more</a></div></td></tr>
        </table>
        <script>var x = 1;</script>
        <table class="table table-condensed"><tr><td>other</td></tr></table>
        <script>track();</script>
    </body></html>"##;

    #[test]
    fn widgets_are_removed() {
        let page = SUBMISSION.replace(
            "<tr><th>Test",
            "<script>alert(1)</script><tr><th>Test",
        );
        let table = submission_table(&page).unwrap();
        assert!(table.starts_with("<table"));
        assert!(table.contains("1a"));
        assert!(!table.contains("<script"));
        assert!(!table.contains("<div"));
        assert!(!table.contains("<span"));
        assert!(!table.contains("other"));
    }

    #[test]
    fn submission_table_must_be_unique() {
        assert_eq!(
            submission_table("<table class='x'></table>").unwrap_err().kind(),
            Kind::Structure
        );
        let twice = format!("{}{}", SUBMISSION, r#"<table class="submission"></table>"#);
        assert_eq!(submission_table(&twice).unwrap_err().kind(), Kind::Structure);
    }

    const SOURCE_PAGE: &str = r#"<html><head><style>.hll { background: #ffc }</style></head>
        <body><div class="syntax-highlight"><pre><span class="k">int</span> main;</pre></div></body></html>"#;

    #[test]
    fn source_with_and_without_style() {
        let first = source(SOURCE_PAGE, true).unwrap();
        assert!(first.code.starts_with(r#"<div class="syntax-highlight">"#));
        assert!(first.code.contains("main"));
        assert_eq!(
            first.style.as_deref(),
            Some("<style>.hll { background: #ffc }</style>")
        );
        let later = source(SOURCE_PAGE, false).unwrap();
        assert_eq!(later.style, None);
        assert_eq!(later.code, first.code);
    }

    #[test]
    fn source_needs_one_style_block_when_asked() {
        let page = SOURCE_PAGE.replace("</head>", "<style>p {}</style></head>");
        assert_eq!(source(&page, true).unwrap_err().kind(), Kind::Structure);
        assert!(source(&page, false).is_ok());
    }
}
