//! Readers for the pieces of judge pages the presentation is made of.
//!
//! Each reader fails with [`Kind::Structure`](crate::error::Kind::Structure)
//! when the page does not have the expected shape; that usually means the
//! site layout changed.

mod assets;
pub mod ranking;
pub(crate) mod select;
mod submission;

pub use assets::stylesheet_link;
pub use ranking::{ranking, Cell, Ranking, Row};
pub use submission::{source, submission_table, Source};
