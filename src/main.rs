//! Application entry point: argument parsing and configuration load.

mod app;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod store;
mod ui;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{crate_version, App as ClapApp, Arg};
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = ClapApp::new("todui")
        .version(crate_version!())
        .about("A terminal user interface for managing a to-do list")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("data")
                .short("d")
                .long("data")
                .value_name("FILE")
                .help("Use a custom task data file")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(data) = matches.value_of("data") {
        config.data_file = Some(PathBuf::from(data));
    }

    App::start(config)
}
