extern crate scraper;

use super::select::{selector, text};
use crate::error::{structure_error, Result};
use scraper::{ElementRef, Html};

/// A scored cell of the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub task: String,
    pub points: u32,
    pub link: String,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub cells: Vec<Cell>,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub tasks: Vec<String>,
    pub rows: Vec<Row>,
}

fn parse_cell(task: &str, cell: ElementRef<'_>, row: &str) -> Result<Option<Cell>> {
    let score = text(cell);
    if score.is_empty() {
        return Ok(None);
    }
    let points: u32 = score.parse().map_err(|_| {
        structure_error(format!(
            "score {:?} of {} for task {} is not a number",
            score, row, task
        ))
    })?;
    let anchor = selector("a[href]");
    let link = cell
        .select(&anchor)
        .find_map(|a| a.value().attr("href"))
        .ok_or_else(|| {
            structure_error(format!("no submission link for {} in task {}", row, task))
        })?;
    Ok(Some(Cell {
        task: task.to_string(),
        points,
        link: link.to_string(),
    }))
}

/// Reads the ranking table. Columns are rank, name, one per task, total.
pub fn ranking(page: &str) -> Result<Ranking> {
    let document = Html::parse_document(page);
    let (tr, th, td) = (selector("tr"), selector("th"), selector("td"));
    let mut rows = document.select(&tr);

    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| structure_error("ranking page has no table rows"))?
        .select(&th)
        .map(text)
        .collect();
    if header.len() < 3 {
        return Err(structure_error(format!(
            "ranking header has {} columns, expected at least 3",
            header.len()
        )));
    }
    let tasks = header[2..header.len() - 1].to_vec();
    if let Some((i, t)) = tasks
        .iter()
        .enumerate()
        .find(|&(i, t)| tasks[..i].contains(t))
    {
        return Err(structure_error(format!(
            "task {} appears twice in the ranking header (column {})",
            t,
            i + 3
        )));
    }

    let mut ret = Vec::new();
    for row in rows {
        let cells: Vec<ElementRef<'_>> = row.select(&td).collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() < 3 {
            return Err(structure_error(format!(
                "ranking row has {} cells, expected at least 3",
                cells.len()
            )));
        }
        let name = text(cells[1]);
        let mut scored = Vec::new();
        for (task, cell) in tasks.iter().zip(&cells[2..cells.len() - 1]) {
            if let Some(c) = parse_cell(task, *cell, &name)? {
                scored.push(c);
            }
        }
        ret.push(Row {
            name,
            cells: scored,
        });
    }
    Ok(Ranking { tasks, rows: ret })
}
