//! Console rendering of density frames.

use crate::frame::DensityFrame;
use std::fmt::Write;
use surge_core::Cell;

/// Render a frame as ASCII art, one line per depth row.
///
/// The stage row is drawn as `=` when empty. Floor cells show their
/// density as a digit (`.` for empty, `1`–`9`, `#` for ten or more), so
/// a run's drift toward the far wall is visible directly in a terminal.
pub fn render_ascii(frame: &DensityFrame) -> String {
    let mut out = String::with_capacity(frame.cells().len() + frame.width() as usize);

    for x in 0..frame.width() {
        for y in 0..frame.height() {
            let density = frame.density(Cell::new(x, y));
            out.push(glyph(x, density));
        }
        out.push('\n');
    }

    let _ = write!(out, "step {}  total {:.0}", frame.step_id(), frame.total());
    out
}

fn glyph(x: u32, density: f64) -> char {
    if density <= 0.0 {
        return if x == 0 { '=' } else { '.' };
    }
    match density as u64 {
        0..=9 => char::from_digit(density as u32, 10).unwrap_or('#'),
        _ => '#',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surge_core::StepId;
    use surge_grid::{FloorPlan, OccupancyGrid};

    fn frame_with(cells: &[(Cell, f64)]) -> DensityFrame {
        let mut grid = OccupancyGrid::zeros(FloorPlan::new(3, 4).unwrap());
        for &(cell, c) in cells {
            grid.deposit(cell, c);
        }
        DensityFrame::extract(&grid, StepId(5))
    }

    #[test]
    fn one_line_per_depth_row_plus_caption() {
        let rendered = render_ascii(&frame_with(&[]));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn stage_row_is_marked() {
        let rendered = render_ascii(&frame_with(&[]));
        assert_eq!(rendered.lines().next().unwrap(), "====");
    }

    #[test]
    fn densities_render_as_digits() {
        let rendered = render_ascii(&frame_with(&[
            (Cell::new(1, 0), 3.0),
            (Cell::new(1, 2), 12.0),
        ]));
        let row = rendered.lines().nth(1).unwrap();
        assert_eq!(row, "3.#.");
    }

    #[test]
    fn caption_names_step_and_total() {
        let rendered = render_ascii(&frame_with(&[(Cell::new(2, 1), 2.0)]));
        assert!(rendered.ends_with("step 5  total 2"));
    }
}
