pub mod cache {
    pub const DEFAULT_DIR: &str = "cache/";
    pub const SLUG_LEN: usize = 96;
}
pub mod judge {
    pub const FIREFOX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
    pub const HOST_PATTERN: &str = r"^https?://[A-Za-z0-9.\-]+(:[0-9]+)?";
    pub const CONTEST_PATTERN: &str = r"^/c/[^/]+/";
    pub const CSRF_COOKIE: &str = "csrftoken";
    pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
    pub const USERNAME_SELECTOR: &str = "#navbar-username";
}
pub mod extract {
    pub const SUBMISSION_TABLE: &str = "table.submission";
    pub const STRIPPED: &str = "script, div, span";
    pub const SOURCE: &str = "div.syntax-highlight";
    pub const STYLE: &str = "style";
    pub const STYLESHEET: &str = r#"link[href$=".css"]"#;
    pub const SOURCE_SUFFIX: &str = "source/";
}
