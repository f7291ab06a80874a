extern crate log;
extern crate reqwest;

use crate::{
    config::extract::SOURCE_SUFFIX,
    error::{structure_error, Error, Kind, Result},
    extract::{self, Cell},
    judge::{Fetch, Policy},
    types::{AssetBundle, Participant, Submission},
};
use log::info;
use reqwest::Url;

/// Highlighting stylesheet, taken from the first source page parsed.
struct SyntaxStyle(Option<String>);
impl SyntaxStyle {
    fn wanted(&self) -> bool {
        self.0.is_none()
    }
    fn capture(&mut self, style: Option<String>) {
        if self.wanted() {
            self.0 = style;
        }
    }
}

fn resolve(base: &Url, href: &str) -> Result<String> {
    base.join(href)
        .map(String::from)
        .map_err(|e| Error::with_source(Kind::Structure, format!("bad link {:?}", href), e))
}
fn source_url(submission_url: &str) -> String {
    format!("{}/{}", submission_url.trim_end_matches('/'), SOURCE_SUFFIX)
}

fn submission<F: Fetch>(
    client: &F,
    base: &Url,
    cell: Cell,
    style: &mut SyntaxStyle,
) -> Result<Submission> {
    let url = resolve(base, &cell.link)?;
    let table_html = extract::submission_table(&client.fetch(&url, Policy::default())?)?;
    let source = extract::source(
        &client.fetch(&source_url(&url), Policy::default())?,
        style.wanted(),
    )?;
    style.capture(source.style);
    Ok(Submission {
        task_id: cell.task,
        points: cell.points,
        table_html,
        code_html: source.code,
    })
}

/// Walks the ranking and every scored cell of it.
///
/// Participants come back ordered by [`Participant::sort_key`]; ties keep
/// the ranking order.
pub fn collect<F: Fetch>(ranking_url: &str, client: &F) -> Result<(Vec<Participant>, AssetBundle)> {
    let base = Url::parse(ranking_url)
        .map_err(|e| Error::with_source(Kind::Config, format!("ranking url {:?}", ranking_url), e))?;
    let page = client.fetch(ranking_url, Policy::default())?;
    let ranking = extract::ranking(&page)?;
    let stylesheet_url = resolve(&base, &extract::stylesheet_link(&page)?)?;
    info!(
        "Ranking has {} participants and tasks {}",
        ranking.rows.len(),
        ranking.tasks.join(", ")
    );

    let mut style = SyntaxStyle(None);
    let mut ret = Vec::with_capacity(ranking.rows.len());
    for row in ranking.rows {
        let mut participant = Participant::new(row.name);
        for cell in row.cells {
            info!("Reading {} of {}", cell.task, participant.name);
            if participant.submissions.iter().any(|s| s.task_id == cell.task) {
                return Err(structure_error(format!(
                    "{} has two cells for task {}",
                    participant.name, cell.task
                )));
            }
            participant
                .submissions
                .push(submission(client, &base, cell, &mut style)?);
        }
        ret.push(participant);
    }
    ret.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

    if style.wanted() {
        return Err(structure_error(format!(
            "no submission found in the ranking at {}",
            ranking_url
        )));
    }
    let stylesheet = client.fetch(&stylesheet_url, Policy::default().public())?;
    Ok((
        ret,
        AssetBundle {
            stylesheet_url,
            stylesheet,
            syntax_style: style.0,
        },
    ))
}
