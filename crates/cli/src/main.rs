// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use marquee_config::{Config, ConfigManager, CONFIG_FILE_NAME};
use marquee_library::{Catalog, CatalogStore};
use std::io;
use std::path::PathBuf;

mod commands;
mod display;
mod menu;

use display::Renderer;

fn build_cli() -> Command {
    Command::new("marquee")
        .version(clap::crate_version!())
        .author("Marquee Contributors")
        .about("Browse, filter and get recommendations from a movie catalog")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to a TOML configuration file")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("PATH")
                .help("Path to the movie catalog (overrides the configured file)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log output (repeat for more)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(Command::new("menu").about("Start the interactive menu (default)"))
        .subcommand(Command::new("genres").about("List all genres with movie counts"))
        .subcommand(
            Command::new("genre").about("List movies in a genre").arg(
                Arg::new("name")
                    .required(true)
                    .value_name("NAME")
                    .help("Genre name (case-insensitive)"),
            ),
        )
        .subcommand(
            Command::new("years")
                .about("List movies released within a year range")
                .arg(
                    Arg::new("start")
                        .required(true)
                        .value_name("START")
                        .help("First year (inclusive)")
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("end")
                        .required(true)
                        .value_name("END")
                        .help("Last year (inclusive)")
                        .value_parser(value_parser!(i32)),
                ),
        )
        .subcommand(
            Command::new("rating")
                .about("List movies rated at or above a minimum")
                .arg(
                    Arg::new("min")
                        .required(true)
                        .value_name("MIN")
                        .help("Minimum rating (0-10)")
                        .value_parser(value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("top")
                .about("Show the highest rated movies")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("Number of movies to show")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("genre")
                        .short('g')
                        .long("genre")
                        .value_name("GENRE")
                        .help("Restrict to one genre"),
                ),
        )
        .subcommand(
            Command::new("recommend")
                .about("Get personalized recommendations")
                .arg(
                    Arg::new("genre")
                        .short('g')
                        .long("genre")
                        .value_name("GENRE")
                        .help("Preferred genre"),
                )
                .arg(
                    Arg::new("min-rating")
                        .short('r')
                        .long("min-rating")
                        .value_name("RATING")
                        .help("Minimum rating")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("year-from")
                        .long("year-from")
                        .value_name("YEAR")
                        .help("Earliest release year")
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("year-to")
                        .long("year-to")
                        .value_name("YEAR")
                        .help("Latest release year")
                        .value_parser(value_parser!(i32)),
                ),
        )
        .subcommand(
            Command::new("stats").about("Show catalog statistics").arg(
                Arg::new("json")
                    .long("json")
                    .help("Print statistics as JSON")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(
            Command::new("init-config")
                .about("Write a default configuration file")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .help("Where to write the file")
                        .default_value(CONFIG_FILE_NAME)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

/// Resolves settings: defaults, then the config file, then command-line flags
fn load_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ConfigManager::with_path(path.clone())
            .load()
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(data_file) = matches.get_one::<PathBuf>("data") {
        config.catalog.data_file = data_file.clone();
    }

    Ok(config)
}

fn init_logging(config: &Config, verbosity: u8) {
    let requested = match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let level = LevelFilter::from(config.app.log_level).max(requested);

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn open_catalog(config: &Config) -> Result<Catalog> {
    let data_file = &config.catalog.data_file;
    let store =
        CatalogStore::new(data_file.clone()).with_bootstrap(config.catalog.bootstrap_if_missing);

    store
        .load()
        .map_err(|e| {
            if e.is_critical() {
                log::error!(
                    "{} error loading catalog: {} ({})",
                    e.severity(),
                    e,
                    e.recovery_action()
                );
            } else {
                log::warn!("Catalog not loaded: {} ({})", e, e.recovery_action());
            }
            e
        })
        .with_context(|| format!("Failed to load movie catalog from {}", data_file.display()))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = load_config(&matches)?;
    init_logging(&config, matches.get_count("verbose"));

    let renderer = Renderer::new(config.display.separator_width, config.app.color);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(("init-config", sub_matches)) = matches.subcommand() {
        return commands::init_config(&renderer, sub_matches, &mut out);
    }

    let catalog = open_catalog(&config)?;
    let top_n = config.display.top_n;

    match matches.subcommand() {
        Some(("genres", _)) => commands::list_genres(&catalog, &renderer, &mut out),
        Some(("genre", sub)) => commands::movies_in_genre(&catalog, &renderer, sub, &mut out),
        Some(("years", sub)) => commands::movies_in_years(&catalog, &renderer, sub, &mut out),
        Some(("rating", sub)) => {
            commands::movies_above_rating(&catalog, &renderer, sub, &mut out)
        }
        Some(("top", sub)) => commands::top_movies(&catalog, &renderer, sub, top_n, &mut out),
        Some(("recommend", sub)) => commands::recommend(&catalog, &renderer, sub, &mut out),
        Some(("stats", sub)) => commands::show_stats(&catalog, &renderer, sub, &mut out),
        _ => {
            let loaded = format!("Loaded {} movies successfully!", catalog.len());
            renderer.success(&mut out, &loaded)?;
            let stdin = io::stdin();
            menu::run_menu(&catalog, &renderer, top_n, stdin.lock(), &mut out)
                .context("Menu terminated unexpectedly")
        }
    }
}
