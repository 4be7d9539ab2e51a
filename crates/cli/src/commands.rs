// FILE: crates/cli/src/commands.rs

//! One-shot commands, each the non-interactive twin of a menu entry

use crate::display::{format_rating, Renderer};
use anyhow::{Context, Result};
use clap::ArgMatches;
use marquee_config::ConfigManager;
use marquee_core::Preferences;
use marquee_library::Catalog;
use std::io::Write;
use std::path::PathBuf;

/// List every genre with its movie count
pub fn list_genres<W: Write>(catalog: &Catalog, renderer: &Renderer, out: &mut W) -> Result<()> {
    renderer.genres(out, &catalog.genre_counts())?;
    Ok(())
}

/// Movies in one genre, in catalog order
pub fn movies_in_genre<W: Write>(
    catalog: &Catalog,
    renderer: &Renderer,
    matches: &ArgMatches,
    out: &mut W,
) -> Result<()> {
    let genre = matches
        .get_one::<String>("name")
        .ok_or_else(|| anyhow::anyhow!("Genre name is required"))?;

    let movies = catalog.filter_by_genre(genre);
    renderer.movies(out, &movies, &format!("Movies in {} genre", genre))?;
    Ok(())
}

/// Movies released within an inclusive year window
pub fn movies_in_years<W: Write>(
    catalog: &Catalog,
    renderer: &Renderer,
    matches: &ArgMatches,
    out: &mut W,
) -> Result<()> {
    let start = *matches
        .get_one::<i32>("start")
        .ok_or_else(|| anyhow::anyhow!("Start year is required"))?;
    let end = *matches
        .get_one::<i32>("end")
        .ok_or_else(|| anyhow::anyhow!("End year is required"))?;

    let movies = catalog.filter_by_year_range(start, end);
    renderer.movies(out, &movies, &format!("Movies from {} to {}", start, end))?;
    Ok(())
}

/// Movies rated at or above a threshold
pub fn movies_above_rating<W: Write>(
    catalog: &Catalog,
    renderer: &Renderer,
    matches: &ArgMatches,
    out: &mut W,
) -> Result<()> {
    let min_rating = *matches
        .get_one::<f64>("min")
        .ok_or_else(|| anyhow::anyhow!("Minimum rating is required"))?;

    let movies = catalog.filter_by_min_rating(min_rating);
    renderer.movies(
        out,
        &movies,
        &format!("Movies with rating >= {}", format_rating(min_rating)),
    )?;
    Ok(())
}

/// Highest rated movies, optionally within one genre
pub fn top_movies<W: Write>(
    catalog: &Catalog,
    renderer: &Renderer,
    matches: &ArgMatches,
    default_count: usize,
    out: &mut W,
) -> Result<()> {
    let count = matches
        .get_one::<usize>("count")
        .copied()
        .unwrap_or(default_count);
    let genre = matches.get_one::<String>("genre").map(|s| s.as_str());

    let movies = catalog.top_movies(count, genre);
    let heading = match genre {
        Some(genre) => format!("🏆 Top {} {} Movies", count, genre),
        None => format!("🏆 Top {} Movies Overall", count),
    };
    renderer.movies(out, &movies, &heading)?;
    Ok(())
}

/// Builds a preference set from the recommend flags
pub fn preferences_from(matches: &ArgMatches) -> Preferences {
    let mut preferences = Preferences::new();
    if let Some(genre) = matches.get_one::<String>("genre") {
        preferences = preferences.with_genre(genre.clone());
    }
    if let Some(min_rating) = matches.get_one::<f64>("min-rating") {
        preferences = preferences.with_min_rating(*min_rating);
    }
    if let Some(year_from) = matches.get_one::<i32>("year-from") {
        preferences = preferences.with_year_from(*year_from);
    }
    if let Some(year_to) = matches.get_one::<i32>("year-to") {
        preferences = preferences.with_year_to(*year_to);
    }
    preferences
}

/// Personalised recommendations from command-line preferences
pub fn recommend<W: Write>(
    catalog: &Catalog,
    renderer: &Renderer,
    matches: &ArgMatches,
    out: &mut W,
) -> Result<()> {
    let preferences = preferences_from(matches);
    let movies = catalog.recommend(&preferences);
    renderer.movies(out, &movies, "🌟 Recommended Movies for You")?;
    Ok(())
}

/// Catalog statistics, as text or JSON
pub fn show_stats<W: Write>(
    catalog: &Catalog,
    renderer: &Renderer,
    matches: &ArgMatches,
    out: &mut W,
) -> Result<()> {
    let stats = match catalog.statistics() {
        Ok(stats) => stats,
        Err(e) if e.is_skippable() => {
            log::debug!("Skipping statistics: {}", e);
            renderer.failure(out, &e.user_message())?;
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to compute statistics"),
    };

    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        writeln!(out, "{}", json)?;
    } else {
        renderer.statistics(out, &stats)?;
    }

    Ok(())
}

/// Write a default configuration file
pub fn init_config<W: Write>(renderer: &Renderer, matches: &ArgMatches, out: &mut W) -> Result<()> {
    let path = matches
        .get_one::<PathBuf>("path")
        .ok_or_else(|| anyhow::anyhow!("Config path is required"))?;

    let manager = ConfigManager::with_path(path.clone());
    let created = manager
        .initialize()
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    if created {
        renderer.success(out, &format!("Config file created at {}", path.display()))?;
    } else {
        writeln!(out, "Config file already exists at {}", path.display())?;
    }

    Ok(())
}
