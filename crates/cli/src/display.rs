// FILE: crates/cli/src/display.rs

//! Terminal rendering of movie listings, statistics and status lines

use console::{style, StyledObject};
use marquee_core::{CatalogStats, MovieRecord};
use std::io::{self, Write};

/// Formats a rating the way it appears in the catalog file
///
/// Whole numbers keep one decimal place, so `9.0` stays `9.0`.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        format!("{}", rating)
    }
}

/// Writes styled output for the menu and the one-shot commands
#[derive(Debug, Clone)]
pub struct Renderer {
    separator_width: usize,
    color: bool,
}

impl Renderer {
    pub fn new(separator_width: usize, color: bool) -> Self {
        Self {
            separator_width,
            color,
        }
    }

    fn styled<D>(&self, object: StyledObject<D>) -> StyledObject<D> {
        if self.color {
            object
        } else {
            object.force_styling(false)
        }
    }

    fn rule(&self, ch: char) -> String {
        ch.to_string().repeat(self.separator_width)
    }

    /// Prints a numbered listing under `heading`
    pub fn movies<W: Write>(
        &self,
        out: &mut W,
        movies: &[&MovieRecord],
        heading: &str,
    ) -> io::Result<()> {
        if movies.is_empty() {
            writeln!(out, "\n{}: No movies found matching criteria.", heading)?;
            return Ok(());
        }

        writeln!(
            out,
            "\n{} ({} found):",
            self.styled(style(heading).bold()),
            movies.len()
        )?;
        writeln!(out, "{}", self.rule('-'))?;

        for (i, movie) in movies.iter().enumerate() {
            writeln!(out, "{}. {} ({})", i + 1, movie.title, movie.year)?;
            writeln!(
                out,
                "   Genre: {} | Rating: {}/10",
                movie.genre,
                format_rating(movie.rating)
            )?;
            writeln!(out, "   Director: {}", movie.director)?;
            if i + 1 < movies.len() {
                writeln!(out)?;
            }
        }

        Ok(())
    }

    /// Prints the overall and per-genre statistics screen
    pub fn statistics<W: Write>(&self, out: &mut W, stats: &CatalogStats) -> io::Result<()> {
        writeln!(out, "\n{}", self.rule('='))?;
        writeln!(out, "{}", self.styled(style("MOVIE DATABASE STATISTICS").bold().cyan()))?;
        writeln!(out, "{}", self.rule('='))?;

        writeln!(out, "\n📊 Overall Statistics:")?;
        writeln!(out, "  • Total Movies: {}", stats.total_movies)?;
        writeln!(
            out,
            "  • Average Rating: {}/10",
            format_rating(stats.average_rating)
        )?;
        writeln!(
            out,
            "  • Highest Rated: {} ({}/10)",
            stats.highest_rated.title,
            format_rating(stats.highest_rated.rating)
        )?;
        writeln!(
            out,
            "  • Lowest Rated: {} ({}/10)",
            stats.lowest_rated.title,
            format_rating(stats.lowest_rated.rating)
        )?;
        writeln!(
            out,
            "  • Oldest Movie: {} ({})",
            stats.oldest_movie.title, stats.oldest_movie.year
        )?;
        writeln!(
            out,
            "  • Newest Movie: {} ({})",
            stats.newest_movie.title, stats.newest_movie.year
        )?;

        writeln!(out, "\n📈 Genre Analysis:")?;
        for (genre, info) in &stats.genre_statistics {
            writeln!(
                out,
                "  • {}: {} movies, avg rating: {}/10",
                genre,
                info.count,
                format_rating(info.avg_rating)
            )?;
        }

        Ok(())
    }

    /// Prints every genre with the number of movies in it
    pub fn genres<W: Write>(&self, out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
        writeln!(out, "\n📚 {}", self.styled(style("Available Genres:").bold()))?;
        for (i, (genre, count)) in counts.iter().enumerate() {
            writeln!(out, "  {}. {} ({} movies)", i + 1, genre, count)?;
        }
        Ok(())
    }

    pub fn success<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{} {}", self.styled(style("✓").green().bold()), message)
    }

    pub fn failure<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{} {}", self.styled(style("✗").red().bold()), message)
    }

    /// Prints a heading framed by rules
    pub fn banner<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        writeln!(out, "\n{}", self.rule('='))?;
        writeln!(out, "{}", self.styled(style(title).bold().cyan()))?;
        writeln!(out, "{}", self.rule('='))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&Renderer, &mut Vec<u8>) -> io::Result<()>,
    {
        let renderer = Renderer::new(20, false);
        let mut out = Vec::new();
        f(&renderer, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(9.0), "9.0");
        assert_eq!(format_rating(8.8), "8.8");
        assert_eq!(format_rating(8.64), "8.64");
        assert_eq!(format_rating(10.0), "10.0");
    }

    #[test]
    fn test_movies_listing() {
        let a = MovieRecord::new("Inception", "Sci-Fi", 8.8, 2010, "Christopher Nolan");
        let b = MovieRecord::new("The Dark Knight", "Action", 9.0, 2008, "Christopher Nolan");
        let text = render(|r, out| r.movies(out, &[&a, &b], "Nolan"));

        assert!(text.contains("Nolan (2 found):"));
        assert!(text.contains(&"-".repeat(20)));
        assert!(text.contains(concat!(
            "1. Inception (2010)\n",
            "   Genre: Sci-Fi | Rating: 8.8/10\n",
            "   Director: Christopher Nolan\n",
            "\n",
            "2. The Dark Knight (2008)",
        )));
        assert!(text.contains("   Genre: Action | Rating: 9.0/10"));
        assert!(text.ends_with("   Director: Christopher Nolan\n"));
    }

    #[test]
    fn test_empty_listing() {
        let text = render(|r, out| r.movies(out, &[], "Movies in Western genre"));
        assert_eq!(
            text,
            "\nMovies in Western genre: No movies found matching criteria.\n"
        );
    }

    #[test]
    fn test_genres_listing() {
        let counts = vec![("Action".to_string(), 3), ("Crime".to_string(), 6)];
        let text = render(|r, out| r.genres(out, &counts));
        assert!(text.contains("  1. Action (3 movies)"));
        assert!(text.contains("  2. Crime (6 movies)"));
    }

    #[test]
    fn test_status_lines_without_color() {
        let text = render(|r, out| {
            r.success(out, "done")?;
            r.failure(out, "failed")
        });
        assert_eq!(text, "✓ done\n✗ failed\n");
    }
}
