//! Whole pipeline from a warm cache to the rendered document.

use mockito::Server;
use sio2_prez::{
    aggregate::collect,
    cache::{Key, Store},
    judge::Session,
    options::Options,
    render::render,
};
use tempfile::tempdir;

fn ranking_page() -> String {
    r#"<html><head>
<link rel="icon" href="/static/favicon.png">
<link rel="stylesheet" href="/static/CACHE/css/output.css">
</head><body><table class="table ranking">
<thead><tr><th>#</th><th>Name</th><th>ABC</th><th>XYZ</th><th>Sum</th></tr></thead>
<tbody>
<tr><td>1</td><td>Anna Nowak</td><td><a href="/c/oi30/s/101/">100</a></td><td><a href="/c/oi30/s/102/">40</a></td><td>140</td></tr>
<tr><td>2</td><td>Jan Kowalski</td><td><a href="/c/oi30/s/103/">10</a></td><td></td><td>10</td></tr>
</tbody></table></body></html>"#
        .to_string()
}

fn submission_page(id: u32) -> String {
    format!(
        r#"<html><body><table class="table submission">
<tr><td>Submission {}</td><td><span class="label">OK</span></td></tr>
<tr><td colspan="2"><div class="btn-group"><button>Rejudge</button></div></td></tr>
<script>$(".btn").tooltip();</script>
</table></body></html>"#,
        id
    )
}

fn source_page(id: u32) -> String {
    format!(
        r#"<html><head><style>.syntax-highlight .k {{ color: #008000 }}</style></head>
<body><div class="syntax-highlight"><pre><span class="k">int</span> solve{}();</pre></div></body></html>"#,
        id
    )
}

#[test]
fn presentation_from_cache() {
    let mut server = Server::new();
    let host = server.url();
    let css = server
        .mock("GET", "/static/CACHE/css/output.css")
        .with_body(".navbar { color: navy }")
        .expect(1)
        .create();
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    let ranking_url = format!("{}/c/oi30/ranking/", host);
    store
        .write(&Key::from_url(&ranking_url), &ranking_page())
        .unwrap();
    for id in 101..=103 {
        let url = format!("{}/c/oi30/s/{}/", host, id);
        store
            .write(&Key::from_url(&url), &submission_page(id))
            .unwrap();
        store
            .write(&Key::from_url(&format!("{}source/", url)), &source_page(id))
            .unwrap();
    }

    let session = Session::new(&ranking_url, store).unwrap();
    let (participants, assets) = collect(&ranking_url, &session).unwrap();
    css.assert();

    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0].name, "Jan Kowalski");
    assert_eq!(participants[0].submissions.len(), 1);
    assert_eq!(participants[0].submissions[0].task_id, "ABC");
    assert_eq!(participants[1].name, "Anna Nowak");
    let tasks: Vec<(&str, u32)> = participants[1]
        .submissions
        .iter()
        .map(|s| (s.task_id.as_str(), s.points))
        .collect();
    assert_eq!(tasks, vec![("ABC", 100), ("XYZ", 40)]);
    for s in participants.iter().flat_map(|p| &p.submissions) {
        assert!(s.table_html.contains("Submission"));
        for tag in &["<script", "<div", "<span"] {
            assert!(!s.table_html.contains(tag), "{} left in {}", tag, s.table_html);
        }
        assert!(s.code_html.contains("solve"));
    }
    assert_eq!(assets.stylesheet, ".navbar { color: navy }");
    assert!(assets
        .syntax_style
        .as_deref()
        .unwrap()
        .contains("#008000"));

    let options = Options {
        ranking_url: ranking_url.clone(),
        lang: "pl".to_string(),
        contest_name: "XXX OI".to_string(),
        credits: None,
        preamble: Some("<p>Etap I</p>".to_string()),
        font: "Georgia, sans-serif".to_string(),
    };
    let html = render(&options, &participants, &assets).unwrap();
    assert!(html.contains("<p>Etap I</p>"));
    assert!(html.find("Jan Kowalski").unwrap() < html.find("Anna Nowak").unwrap());
    assert!(html.contains("solve101"));
}
