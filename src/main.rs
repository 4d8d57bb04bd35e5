use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{crate_version, App, Arg, ArgMatches};
use log::{error, info, LevelFilter};
use nulldev::build::build_site;
use nulldev::config::Config;
use nulldev::post::DATE_FORMAT;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

fn main() {
    let matches = App::new("nulldev")
        .version(crate_version!())
        .about("Publishes bracket-markup text files as HTML blog posts and rebuilds the archive page")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("YAML file overriding the default site settings"),
        )
        .arg(
            Arg::with_name("date")
                .short("d")
                .long("date")
                .value_name("YYYY-MM-DD")
                .takes_value(true)
                .help("Publish date for the posts (defaults to today)"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every file considered"),
        )
        .arg(
            Arg::with_name("files")
                .value_name("FILES")
                .multiple(true)
                .help("Markup files to publish"),
        )
        .get_matches();

    let level = match matches.is_present("verbose") {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };
    if let Err(e) = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Initializing logger: {}", e);
    }

    match run(&matches) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

/// Runs the publisher. Returns `Ok(false)` when some inputs were skipped.
fn run(matches: &ArgMatches) -> Result<bool> {
    let config = match matches.value_of("config") {
        Some(path) => Config::from_project_file(Path::new(path))?,
        None => Config::default(),
    };
    let date = match matches.value_of("date") {
        Some(date) => NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| anyhow!("Parsing --date `{}`: {}", date, e))?,
        None => Local::now().naive_local().date(),
    };
    let sources: Vec<PathBuf> = matches
        .values_of("files")
        .map(|files| files.map(PathBuf::from).collect())
        .unwrap_or_default();

    let report = build_site(&config, &sources, date)?;
    info!(
        "Published {} of {} posts; archive lists {}",
        report.published.len(),
        sources.len(),
        report.archived
    );
    Ok(report.skipped.is_empty())
}
