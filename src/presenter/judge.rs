use crate::error::Result;

mod login;
mod search;
pub mod session;

pub use session::{Session, State};

/// How a page may be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Skip the cache lookup and always download.
    pub fresh: bool,
    /// Refuse to download unless logged in.
    pub requires_auth: bool,
}
impl Default for Policy {
    fn default() -> Self {
        Self {
            fresh: false,
            requires_auth: true,
        }
    }
}
impl Policy {
    pub fn fresh(self) -> Self {
        Self {
            fresh: true,
            ..self
        }
    }
    pub fn public(self) -> Self {
        Self {
            requires_auth: false,
            ..self
        }
    }
}

/// Anything pages can be read from.
pub trait Fetch {
    fn fetch(&self, url: &str, policy: Policy) -> Result<String>;
}
