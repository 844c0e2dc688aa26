use crate::error::ParseError;
use crate::grid::SolidGrid;
use grid_2d::{Coord, Grid, Size};
use std::convert::TryFrom;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Open),
            'w' => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Wall => 'w',
        }
    }

    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

impl SolidGrid for Grid<Cell> {
    fn size(&self) -> Size {
        Grid::size(self)
    }
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.get(coord).map(|cell| !cell.is_open())
    }
}

/// Rectangular, non-empty grid of cells. Never changes once built.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(try_from = "Grid<Cell>", into = "Grid<Cell>")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    grid: Grid<Cell>,
}

impl Terrain {
    pub fn from_grid(grid: Grid<Cell>) -> Result<Self, ParseError> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(ParseError::Empty);
        }
        Ok(Self { grid })
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ParseError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(ParseError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(ParseError::RaggedRow {
                row,
                expected,
                found,
            });
        }
        let size = Size::new(expected as u32, rows.len() as u32);
        let grid = Grid::new_fn(size, |coord| rows[coord.y as usize][coord.x as usize]);
        Ok(Self { grid })
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.grid.get(coord).cloned()
    }

    pub fn is_open(&self, coord: Coord) -> bool {
        self.get(coord).map_or(false, Cell::is_open)
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width() as i32;
        let height = self.height() as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }
}

impl TryFrom<Grid<Cell>> for Terrain {
    type Error = ParseError;
    fn try_from(grid: Grid<Cell>) -> Result<Self, Self::Error> {
        Terrain::from_grid(grid)
    }
}

impl From<Terrain> for Grid<Cell> {
    fn from(terrain: Terrain) -> Self {
        terrain.grid
    }
}

impl SolidGrid for Terrain {
    fn size(&self) -> Size {
        self.grid.size()
    }
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.grid.is_solid(coord)
    }
}
