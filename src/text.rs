use crate::error::ParseError;
use crate::terrain::{Cell, Terrain};
use grid_2d::{Coord, Grid};
use std::fmt;
use std::str::FromStr;

/// Drawn in place of any cell on a path.
pub const PATH_GLYPH: char = '█';

impl Terrain {
    /// Reads one row per line, `.` for open and `w` for wall. Leading and
    /// trailing whitespace around the whole block is ignored.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let rows = s
            .trim()
            .split('\n')
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, ch)| {
                        Cell::from_glyph(ch).ok_or(ParseError::InvalidCell { ch, row, column })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Terrain::from_rows(rows)
    }
}

impl FromStr for Terrain {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Terrain::parse(s)
    }
}

fn write_rows<F>(f: &mut fmt::Formatter, terrain: &Terrain, glyph: F) -> fmt::Result
where
    F: Fn(Coord, Cell) -> char,
{
    for y in 0..terrain.height() as i32 {
        if y > 0 {
            writeln!(f)?;
        }
        for x in 0..terrain.width() as i32 {
            let coord = Coord::new(x, y);
            if let Some(cell) = terrain.get(coord) {
                write!(f, "{}", glyph(coord, cell))?;
            }
        }
    }
    Ok(())
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_rows(f, self, |_, cell| cell.glyph())
    }
}

/// A terrain with a path drawn over it.
#[derive(Debug, Clone, Copy)]
pub struct Route<'a> {
    pub terrain: &'a Terrain,
    pub path: &'a [Coord],
}

impl<'a> fmt::Display for Route<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut on_path = Grid::new_clone(self.terrain.size(), false);
        for &coord in self.path {
            if let Some(flag) = on_path.get_mut(coord) {
                *flag = true;
            }
        }
        write_rows(f, self.terrain, |coord, cell| {
            if on_path.get(coord).cloned().unwrap_or(false) {
                PATH_GLYPH
            } else {
                cell.glyph()
            }
        })
    }
}

pub fn render_path(terrain: &Terrain, path: &[Coord]) -> String {
    Route { terrain, path }.to_string()
}
