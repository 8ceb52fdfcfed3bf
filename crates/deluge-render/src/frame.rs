//! Single-frame rendering of a terrain and its flood state.

use std::error::Error;
use std::fmt::{self, Write};
use std::str::FromStr;

use deluge_engine::FloodState;
use deluge_terrain::Terrain;

/// How dry and flooded cells are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderStyle {
    /// Flooded cells as `░░`, dry cells as their elevation rounded to an integer.
    #[default]
    Basic,
    /// Flooded cells as `XXX`, dry cells with one decimal place.
    Values,
    /// Boxed map; flooded cells blank, dry cells shaded by elevation quartile.
    /// Needs a UTF-8 terminal.
    Shade,
}

impl RenderStyle {
    /// All styles, in CLI listing order.
    pub const ALL: [RenderStyle; 3] = [RenderStyle::Basic, RenderStyle::Values, RenderStyle::Shade];

    /// Lower-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Values => "values",
            Self::Shade => "shade",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognised style name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStyleError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid render style '{}': expected basic, values or shade",
            self.name
        )
    }
}

impl Error for ParseStyleError {}

impl FromStr for RenderStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStyleError {
                name: s.to_string(),
            })
    }
}

/// Shade glyph for a dry cell: lowest quarter of the elevation range
/// `░░`, then `▒▒`, `▓▓`, and `██` for the top quarter.
pub fn shade_for(elevation: f64, low: f64, quarter: f64) -> &'static str {
    if elevation < low + quarter {
        "░░"
    } else if elevation < low + 2.0 * quarter {
        "▒▒"
    } else if elevation < low + 3.0 * quarter {
        "▓▓"
    } else {
        "██"
    }
}

/// Draw `terrain` with `state` overlaid. Every line ends in `\n`.
///
/// # Panics
///
/// If `state` does not have the terrain's dimensions.
///
/// # Examples
///
/// ```
/// use deluge_core::GridPoint;
/// use deluge_engine::{Algorithm, FloodEngine};
/// use deluge_render::{render_frame, RenderStyle};
/// use deluge_terrain::Terrain;
///
/// let t = Terrain::new(vec![vec![3.0, 1.0, 3.0]], vec![GridPoint::new(0, 1)], 2.0).unwrap();
/// let mut engine = FloodEngine::new(&t);
/// engine.run(Algorithm::BreadthFirst).unwrap();
/// assert_eq!(render_frame(&t, engine.state(), RenderStyle::Basic), " 3 ░░  3 \n");
/// ```
pub fn render_frame(terrain: &Terrain, state: &FloodState, style: RenderStyle) -> String {
    assert_eq!(
        (terrain.rows(), terrain.cols()),
        (state.rows(), state.cols()),
        "flood state does not match terrain"
    );
    let rows = terrain.rows();
    let cols = terrain.cols();
    let mut out = String::with_capacity(rows * (cols * 6 + 4));

    let (low, quarter) = match style {
        RenderStyle::Shade => {
            let low = terrain.min_elevation();
            (low, (terrain.max_elevation() - low) / 4.0)
        }
        _ => (0.0, 0.0),
    };

    if style == RenderStyle::Shade {
        out.push('╔');
        out.push_str(&"══".repeat(cols));
        out.push_str("╗\n");
    }

    // fmt::Write into a String cannot fail.
    for r in 0..rows {
        if style == RenderStyle::Shade {
            out.push('║');
        }
        for c in 0..cols {
            let i = r * cols + c;
            let flooded = state.is_flooded_index(i);
            let e = terrain.elevation_at_index(i);
            match (style, flooded) {
                (RenderStyle::Basic, true) => out.push_str("░░ "),
                (RenderStyle::Basic, false) => {
                    let _ = write!(out, "{e:2.0} ");
                }
                (RenderStyle::Values, true) => out.push_str(" XXX "),
                (RenderStyle::Values, false) => {
                    let _ = write!(out, " {e:3.1} ");
                }
                (RenderStyle::Shade, true) => out.push_str("  "),
                (RenderStyle::Shade, false) => out.push_str(shade_for(e, low, quarter)),
            }
        }
        if style == RenderStyle::Shade {
            out.push('║');
        }
        out.push('\n');
    }

    if style == RenderStyle::Shade {
        out.push('╚');
        out.push_str(&"══".repeat(cols));
        out.push_str("╝\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use deluge_core::GridPoint;
    use deluge_engine::{Algorithm, FloodEngine};
    use deluge_test_utils::fixtures;

    fn flooded(terrain: &Terrain) -> FloodState {
        let mut e = FloodEngine::new(terrain);
        e.run(Algorithm::BreadthFirst).unwrap();
        e.into_state()
    }

    #[test]
    fn basic_pit() {
        let t = fixtures::pit();
        let s = flooded(&t);
        assert_eq!(
            render_frame(&t, &s, RenderStyle::Basic),
            " 5  5  5 \n 5 ░░  5 \n 5  5  5 \n"
        );
    }

    #[test]
    fn values_valley() {
        let t = fixtures::valley();
        let s = flooded(&t);
        assert_eq!(
            render_frame(&t, &s, RenderStyle::Values),
            " 3.0  XXX  XXX  XXX  3.0 \n"
        );
    }

    #[test]
    fn dry_state_shows_every_elevation() {
        let t = fixtures::valley();
        let s = FloodState::for_terrain(&t);
        assert_eq!(render_frame(&t, &s, RenderStyle::Basic), " 3  2  1  2  3 \n");
    }

    #[test]
    fn shade_draws_border_and_quartiles() {
        let t = Terrain::new(vec![vec![0.0, 3.0, 5.0, 8.0]], vec![GridPoint::new(0, 0)], -1.0).unwrap();
        let s = FloodState::for_terrain(&t);
        assert_eq!(
            render_frame(&t, &s, RenderStyle::Shade),
            "╔════════╗\n║░░▒▒▓▓██║\n╚════════╝\n"
        );
    }

    #[test]
    fn shade_leaves_flooded_cells_blank() {
        let t = fixtures::pit();
        let s = flooded(&t);
        let frame = render_frame(&t, &s, RenderStyle::Shade);
        let middle = frame.lines().nth(2).unwrap();
        assert_eq!(middle, "║██  ██║");
    }

    #[test]
    #[should_panic(expected = "flood state does not match terrain")]
    fn mismatched_state_is_rejected() {
        let t = fixtures::pit();
        let s = FloodState::new(2, 3);
        render_frame(&t, &s, RenderStyle::Basic);
    }

    #[test]
    fn shade_for_quartile_edges() {
        assert_eq!(shade_for(0.0, 0.0, 1.0), "░░");
        assert_eq!(shade_for(1.0, 0.0, 1.0), "▒▒");
        assert_eq!(shade_for(2.5, 0.0, 1.0), "▓▓");
        assert_eq!(shade_for(4.0, 0.0, 1.0), "██");
    }

    #[test]
    fn style_parses_case_insensitively() {
        assert_eq!("Shade".parse::<RenderStyle>(), Ok(RenderStyle::Shade));
        assert_eq!(RenderStyle::default(), RenderStyle::Basic);
        assert!("ascii".parse::<RenderStyle>().is_err());
    }
}
