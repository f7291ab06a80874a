extern crate dialoguer;

use dialoguer::Password;
use sio2_prez::account::PasswordSource;
use std::{
    fs,
    io::{self, ErrorKind},
    path::PathBuf,
};

fn strip_newline(mut password: String) -> String {
    let len = password.trim_end_matches(&['\r', '\n'][..]).len();
    password.truncate(len);
    password
}

pub fn password_file(path: PathBuf) -> PasswordSource {
    Box::new(move || fs::read_to_string(&path).map(strip_newline))
}

pub fn password_prompt(login: String) -> PasswordSource {
    Box::new(move || {
        Password::new()
            .with_prompt(format!("Password for {}", login))
            .interact()
            .map_err(|e| io::Error::new(ErrorKind::Other, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_password_loses_trailing_newline_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, " s3cret \r\n").unwrap();
        let read = password_file(file.path().to_path_buf());
        assert_eq!(read().unwrap(), " s3cret ");
    }

    #[test]
    fn missing_file_is_reported_on_use() {
        let read = password_file(PathBuf::from("/nonexistent/password"));
        assert_eq!(read().unwrap_err().kind(), ErrorKind::NotFound);
    }
}
