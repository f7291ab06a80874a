extern crate clap;
extern crate log;
extern crate pretty_env_logger;
extern crate termcolor;

use clap::{crate_description, crate_name, Arg, Command};
use log::LevelFilter;
use std::{env, io::Write, process::exit};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod present;
}
mod read;
mod write;

use command::present::{present, Args};

fn init_log() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Info);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() {
    init_log();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG-FILE")
                .takes_value(true)
                .default_value("config.yaml")
                .help("Path to YAML configuration file"),
        )
        .arg(
            Arg::new("login")
                .short('l')
                .long("login")
                .takes_value(true)
                .help("(Moderator's) login to SIO2. Without it only cached pages can be used"),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .takes_value(true)
                .help("Path to file with the password. Asked for when --login is given without it"),
        )
        .arg(
            Arg::new("fresh")
                .short('f')
                .long("fresh")
                .help("Clear cache, needed to refresh the data in the presentation"),
        )
        .arg(
            Arg::new("cache")
                .long("cache")
                .value_name("CACHE-DIR")
                .takes_value(true)
                .default_value(sio2_prez::DEFAULT_CACHE_DIR)
                .help("Where the cache files are stored"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .default_value("presentation.html")
                .help("Where the resulting presentation is saved"),
        )
        .get_matches();

    if let Err(e) = present(&mut stdout, Args::from_matches(&app)) {
        write_error!(&mut stdout, "Error", "{}", e);
        let _ = stdout.reset();
        exit(1);
    }
    let _ = stdout.reset();
}
