use std::{fmt, io};

pub type PasswordSource = Box<dyn FnOnce() -> io::Result<String>>;

/// Login for the judge. The password is produced lazily, right before it
/// is posted, so prompts happen only when a login really takes place.
pub struct Credentials {
    pub username: String,
    password: PasswordSource,
}

impl Credentials {
    pub fn new<F>(username: String, password: F) -> Self
    where
        F: FnOnce() -> io::Result<String> + 'static,
    {
        Self {
            username,
            password: Box::new(password),
        }
    }
    pub(crate) fn into_parts(self) -> (String, PasswordSource) {
        (self.username, self.password)
    }
}
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish()
    }
}
