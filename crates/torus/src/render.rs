//! # ASCII Renderer
//!
//! ```text
//! ╔═════╗
//! ║ X  X║
//! ║XX   ║
//! ╚═════╝
//!
//! Time Step: 3 | Alive Cells: 4 | Population: 40.00%
//! ```

use std::io::{self, Write};

use torus_core::Snapshot;

/// Clears the terminal and moves the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Glyph for a living cell.
pub const ALIVE_GLYPH: char = 'X';

/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// Writes the framed grid followed by the statistics line.
///
/// # Errors
///
/// Propagates write failures.
pub fn draw<W: Write>(out: &mut W, snap: &Snapshot<'_>, clear: bool) -> io::Result<()> {
    if clear {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
    }

    let border = "═".repeat(snap.width());
    writeln!(out, "╔{border}╗")?;

    let mut line = String::with_capacity(snap.width() * 4 + 8);
    for row in snap.rows() {
        line.clear();
        line.push('║');
        line.extend(
            row.iter()
                .map(|c| if c.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH }),
        );
        line.push('║');
        writeln!(out, "{line}")?;
    }

    writeln!(out, "╚{border}╝")?;
    writeln!(out)?;
    writeln!(out, "{}", stats_line(snap))
}

/// `Time Step: g | Alive Cells: a | Population: p%`
#[must_use]
pub fn stats_line(snap: &Snapshot<'_>) -> String {
    format!(
        "Time Step: {} | Alive Cells: {} | Population: {:.2}%",
        snap.generation(),
        snap.alive_count(),
        snap.population_percent()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use torus_core::Grid;

    #[test]
    fn test_draw_frame() {
        let grid = Grid::from_rows(&["X.", ".X", ".."]).unwrap();
        let mut out = Vec::new();
        draw(&mut out, &grid.snapshot(), false).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "╔══╗");
        assert_eq!(lines[1], "║X ║");
        assert_eq!(lines[2], "║ X║");
        assert_eq!(lines[3], "║  ║");
        assert_eq!(lines[4], "╚══╝");
        assert_eq!(lines[5], "");
        assert_eq!(
            lines[6],
            "Time Step: 0 | Alive Cells: 2 | Population: 33.33%"
        );
    }

    #[test]
    fn test_clear_prefix() {
        let grid = Grid::create(1, 1).unwrap();
        let mut out = Vec::new();
        draw(&mut out, &grid.snapshot(), true).unwrap();
        assert!(out.starts_with(CLEAR_SCREEN.as_bytes()));
    }
}
