extern crate serde;

use serde::Serialize;

/// The submission a participant's ranking score comes from, usually the
/// last one rather than the best.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub task_id: String,
    pub points: u32,
    pub table_html: String,
    pub code_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub name: String,
    pub submissions: Vec<Submission>,
}
impl Participant {
    pub fn new(name: String) -> Self {
        Self {
            name,
            submissions: Vec::new(),
        }
    }
    /// Last word of the name. Not correct for every naming convention.
    pub fn sort_key(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or("")
    }
}

/// Styling shared by every slide of the presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetBundle {
    pub stylesheet_url: String,
    pub stylesheet: String,
    pub syntax_style: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_is_last_word() {
        assert_eq!(
            Participant::new("Jan Maria Kowalski".to_string()).sort_key(),
            "Kowalski"
        );
        assert_eq!(Participant::new("  Nowak \n".to_string()).sort_key(), "Nowak");
        assert_eq!(Participant::new(String::new()).sort_key(), "");
    }
}
