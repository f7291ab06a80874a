use std::{boxed::Box, convert::Into, error::Error as StdError, fmt, result::Result as StdResult};

type Source = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Config,
    Auth,
    Structure,
    Access,
    Transport,
    Storage,
    Render,
}

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: String,
    source: Option<Source>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Config => "configuration error",
            Self::Auth => "authentication failed",
            Self::Structure => "unexpected page structure",
            Self::Access => "access denied",
            Self::Transport => "error sending request",
            Self::Storage => "storage error",
            Self::Render => "error rendering presentation",
        })
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0.kind, self.0.description)?;
        if let Some(s) = &self.0.source {
            write!(f, ": {}", s)?;
        }
        Ok(())
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0
            .source
            .as_ref()
            .map(|s| &**s as &(dyn StdError + 'static))
    }
}

impl Error {
    pub fn new<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self(Box::new(Inner {
            kind,
            description: description.into(),
            source: None,
        }))
    }
    pub fn with_source<T, E>(kind: Kind, description: T, source: E) -> Self
    where
        T: Into<String>,
        E: Into<Source>,
    {
        Self(Box::new(Inner {
            kind,
            description: description.into(),
            source: Some(source.into()),
        }))
    }
    pub fn kind(&self) -> Kind {
        self.0.kind
    }
    pub fn context(&self) -> &str {
        &self.0.description
    }
}

pub fn config_error<T: Into<String>>(description: T) -> Error {
    Error::new(Kind::Config, description)
}
pub fn auth_error<T: Into<String>>(description: T) -> Error {
    Error::new(Kind::Auth, description)
}
pub fn structure_error<T: Into<String>>(description: T) -> Error {
    Error::new(Kind::Structure, description)
}
pub(crate) fn network_error(url: &str, err: reqwest::Error) -> Error {
    Error::with_source(Kind::Transport, url, err)
}
pub(crate) fn storage_error<T: Into<String>>(description: T, err: std::io::Error) -> Error {
    Error::with_source(Kind::Storage, description, err)
}
