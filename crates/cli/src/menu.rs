// FILE: crates/cli/src/menu.rs

//! Interactive numbered menu
//!
//! Reads answers line by line from any `BufRead` and writes to any `Write`.
//! End of input leaves the loop as if "Exit" had been chosen.

use crate::display::{format_rating, Renderer};
use marquee_core::{AppError, Preferences, Result};
use marquee_library::Catalog;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Parses a prompt answer, naming the expected kind of value on failure
fn parse_answer<T: FromStr>(answer: &str, argument: &str, hint: &str) -> Result<T> {
    answer
        .parse()
        .map_err(|_| AppError::invalid_argument(argument, hint))
}

/// Runs the menu until the user exits or input runs out
pub fn run_menu<R: BufRead, W: Write>(
    catalog: &Catalog,
    renderer: &Renderer,
    top_n: usize,
    input: R,
    output: W,
) -> io::Result<()> {
    Menu {
        catalog,
        renderer,
        top_n,
        input,
        output,
    }
    .run()
}

struct Menu<'a, R, W> {
    catalog: &'a Catalog,
    renderer: &'a Renderer,
    top_n: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> io::Result<()> {
        self.renderer
            .banner(&mut self.output, "🎬 WELCOME TO MOVIE RECOMMENDATION SYSTEM 🎬")?;

        loop {
            self.print_options()?;

            let Some(choice) = self.prompt("\n👉 Enter your choice (1-8): ")? else {
                log::debug!("Input closed, leaving menu");
                break;
            };

            match choice.as_str() {
                "1" => self.search_by_genre()?,
                "2" => self.search_by_years()?,
                "3" => self.search_by_rating()?,
                "4" => self.recommendations()?,
                "5" => self.top_movies()?,
                "6" => self.statistics()?,
                "7" => self.genres()?,
                "8" => {
                    writeln!(
                        self.output,
                        "\n👋 Thank you for using Movie Recommendation System!"
                    )?;
                    writeln!(self.output, "🎬 Happy watching!")?;
                    break;
                }
                _ => self
                    .renderer
                    .failure(&mut self.output, "Invalid choice. Please try again.")?,
            }
        }

        self.output.flush()
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n📋 MAIN MENU:")?;
        writeln!(self.output, "1. Search movies by genre")?;
        writeln!(self.output, "2. Search movies by year range")?;
        writeln!(self.output, "3. Search movies by minimum rating")?;
        writeln!(self.output, "4. Get personalized recommendations")?;
        writeln!(
            self.output,
            "5. View top {} movies (overall or by genre)",
            self.top_n
        )?;
        writeln!(self.output, "6. View statistics")?;
        writeln!(self.output, "7. View all genres")?;
        writeln!(self.output, "8. Exit")
    }

    /// Prints `text` and reads one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_available_genres(&mut self) -> io::Result<()> {
        let genres = self.catalog.unique_genres();
        writeln!(self.output, "\nAvailable genres: {}", genres.join(", "))
    }

    fn search_by_genre(&mut self) -> io::Result<()> {
        self.print_available_genres()?;
        let Some(genre) = self.prompt("Enter genre: ")? else {
            return Ok(());
        };

        let movies = self.catalog.filter_by_genre(&genre);
        self.renderer
            .movies(&mut self.output, &movies, &format!("Movies in {} genre", genre))
    }

    fn search_by_years(&mut self) -> io::Result<()> {
        let Some(start) = self.prompt("Enter start year: ")? else {
            return Ok(());
        };
        let start: i32 = match parse_answer(&start, "year", "Please enter numbers only.") {
            Ok(year) => year,
            Err(e) => return self.report(e),
        };
        let Some(end) = self.prompt("Enter end year: ")? else {
            return Ok(());
        };
        let end: i32 = match parse_answer(&end, "year", "Please enter numbers only.") {
            Ok(year) => year,
            Err(e) => return self.report(e),
        };

        let movies = self.catalog.filter_by_year_range(start, end);
        self.renderer.movies(
            &mut self.output,
            &movies,
            &format!("Movies from {} to {}", start, end),
        )
    }

    /// Tells the user why a request produced no result
    fn report(&mut self, err: AppError) -> io::Result<()> {
        if err.is_skippable() {
            log::debug!("Skipping request: {}", err);
        } else {
            log::warn!("Request failed: {}", err);
        }
        self.renderer.failure(&mut self.output, &err.user_message())
    }

    fn search_by_rating(&mut self) -> io::Result<()> {
        let Some(input) = self.prompt("Enter minimum rating (0-10): ")? else {
            return Ok(());
        };
        let min_rating: f64 = match parse_answer(&input, "rating", "Please enter a number.") {
            Ok(rating) => rating,
            Err(e) => return self.report(e),
        };

        let movies = self.catalog.filter_by_min_rating(min_rating);
        self.renderer.movies(
            &mut self.output,
            &movies,
            &format!("Movies with rating >= {}", format_rating(min_rating)),
        )
    }

    fn recommendations(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n🎯 PERSONALIZED RECOMMENDATIONS")?;
        writeln!(self.output, "(Press Enter to skip any criterion)")?;

        let mut preferences = Preferences::new();

        self.print_available_genres()?;
        let Some(genre) = self.prompt("Preferred genre: ")? else {
            return Ok(());
        };
        if !genre.is_empty() {
            preferences = preferences.with_genre(genre);
        }

        let Some(rating) = self.prompt("Minimum rating (0-10): ")? else {
            return Ok(());
        };
        if !rating.is_empty() {
            match rating.parse::<f64>() {
                Ok(value) => preferences = preferences.with_min_rating(value),
                Err(_) => writeln!(self.output, "Invalid rating, skipping...")?,
            }
        }

        let Some(year_from) = self.prompt("From year: ")? else {
            return Ok(());
        };
        if !year_from.is_empty() {
            match year_from.parse::<i32>() {
                Ok(value) => preferences = preferences.with_year_from(value),
                Err(_) => writeln!(self.output, "Invalid year, skipping...")?,
            }
        }

        let Some(year_to) = self.prompt("To year: ")? else {
            return Ok(());
        };
        if !year_to.is_empty() {
            match year_to.parse::<i32>() {
                Ok(value) => preferences = preferences.with_year_to(value),
                Err(_) => writeln!(self.output, "Invalid year, skipping...")?,
            }
        }

        let movies = self.catalog.recommend(&preferences);
        self.renderer
            .movies(&mut self.output, &movies, "🌟 Recommended Movies for You")
    }

    fn top_movies(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n1. Top {} overall", self.top_n)?;
        writeln!(self.output, "2. Top {} by genre", self.top_n)?;
        let Some(choice) = self.prompt("Choose (1 or 2): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let movies = self.catalog.top_movies(self.top_n, None);
                self.renderer.movies(
                    &mut self.output,
                    &movies,
                    &format!("🏆 Top {} Movies Overall", self.top_n),
                )
            }
            "2" => {
                self.print_available_genres()?;
                let Some(genre) = self.prompt("Enter genre: ")? else {
                    return Ok(());
                };
                let movies = self.catalog.top_movies(self.top_n, Some(genre.as_str()));
                self.renderer.movies(
                    &mut self.output,
                    &movies,
                    &format!("🏆 Top {} {} Movies", self.top_n, genre),
                )
            }
            _ => self.renderer.failure(&mut self.output, "Invalid choice."),
        }
    }

    fn statistics(&mut self) -> io::Result<()> {
        match self.catalog.statistics() {
            Ok(stats) => self.renderer.statistics(&mut self.output, &stats),
            Err(e) => self.report(e),
        }
    }

    fn genres(&mut self) -> io::Result<()> {
        self.renderer
            .genres(&mut self.output, &self.catalog.genre_counts())
    }
}
