extern crate clap;
extern crate termcolor;

use crate::{
    read::{password_file, password_prompt},
    write::{natural_size, write_presentation},
};
use clap::ArgMatches;
use sio2_prez::{
    account::Credentials,
    aggregate::collect,
    cache::Store,
    error::{config_error, Error, Kind, Result},
    judge::Session,
    options,
    render::render,
};
use std::{fs::File, io::Write, path::PathBuf};
use termcolor::{Color, StandardStream};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config: PathBuf,
    pub login: Option<String>,
    pub password: Option<PathBuf>,
    pub fresh: bool,
    pub cache: PathBuf,
    pub output: PathBuf,
}

impl Args {
    pub fn from_matches(app: &ArgMatches) -> Self {
        Self {
            config: PathBuf::from(app.value_of("config").unwrap_or("config.yaml")),
            login: app.value_of("login").map(String::from),
            password: app.value_of("password").map(PathBuf::from),
            fresh: app.is_present("fresh"),
            cache: PathBuf::from(app.value_of("cache").unwrap_or(sio2_prez::DEFAULT_CACHE_DIR)),
            output: PathBuf::from(app.value_of("output").unwrap_or("presentation.html")),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.config.is_file() || self.config.extension().map_or(true, |e| e != "yaml") {
            return Err(config_error(format!(
                "config {} is not a .yaml file",
                self.config.display()
            )));
        }
        if self.login.is_none() {
            if self.password.is_some() {
                return Err(config_error("--password requires --login"));
            }
            if self.fresh {
                return Err(config_error("--fresh always requires --login"));
            }
        }
        Ok(())
    }

    fn credentials(&self, stdout: &mut StandardStream) -> Option<Credentials> {
        let login = match &self.login {
            Some(v) => v.clone(),
            None => {
                write_info!(
                    stdout,
                    "Info",
                    "Won't log in, anything not cached can't be downloaded"
                );
                return None;
            }
        };
        write_info!(stdout, "Info", "Using login: {}", login);
        let password = match &self.password {
            Some(p) => {
                write_info!(stdout, "Info", "Will load password: {}", p.display());
                password_file(p.clone())
            }
            None => {
                write_info!(stdout, "Info", "Will ask for password");
                password_prompt(login.clone())
            }
        };
        Some(Credentials::new(login, password))
    }
}

pub fn present(stdout: &mut StandardStream, args: Args) -> Result<()> {
    args.validate()?;
    write_info!(stdout, "Info", "Using config: {}", args.config.display());
    let options = options::from_reader(File::open(&args.config).map_err(|e| {
        Error::with_source(Kind::Config, format!("opening {}", args.config.display()), e)
    })?)?;
    let credentials = args.credentials(stdout);

    let mut session = Session::new(&options.ranking_url, Store::open(&args.cache)?)?;
    if args.fresh {
        write_info!(stdout, "Info", "Will reset cache");
        session.cache().clear()?;
    }
    if let Some(c) = credentials {
        session.login(c)?;
    }

    write_info!(stdout, "Info", "Generating presentation...");
    let (participants, assets) = collect(&options.ranking_url, &session)?;
    let html = render(&options, &participants, &assets)?;

    let size = write_presentation(&args.output, &html)?;
    write_ok!(
        stdout,
        "Success",
        "Saved presentation to {} ({})",
        args.output.display(),
        natural_size(size)
    );
    Ok(())
}
