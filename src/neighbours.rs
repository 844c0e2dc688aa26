use crate::grid::SolidGrid;
use direction::Direction;
use grid_2d::Coord;
use std::cmp;

/// Open cells in the 3x3 block around a coordinate, clamped to the grid
/// and visited in row-major order.
pub struct Neighbours<'a, G: 'a> {
    grid: &'a G,
    centre: Coord,
    min_x: i32,
    max: Coord,
    next: Coord,
}

pub fn neighbours<G: SolidGrid>(grid: &G, coord: Coord) -> Neighbours<'_, G> {
    let size = grid.size();
    let min = Coord::new(cmp::max(0, coord.x - 1), cmp::max(0, coord.y - 1));
    let max = Coord::new(
        cmp::min(size.width() as i32 - 1, coord.x + 1),
        cmp::min(size.height() as i32 - 1, coord.y + 1),
    );
    Neighbours {
        grid,
        centre: coord,
        min_x: min.x,
        max,
        next: min,
    }
}

impl<'a, G: SolidGrid> Iterator for Neighbours<'a, G> {
    type Item = Coord;
    fn next(&mut self) -> Option<Self::Item> {
        while self.next.y <= self.max.y && self.next.x <= self.max.x {
            let coord = self.next;
            self.next = if coord.x < self.max.x {
                Coord::new(coord.x + 1, coord.y)
            } else {
                Coord::new(self.min_x, coord.y + 1)
            };
            if coord != self.centre && !self.grid.is_solid_or_outside(coord) {
                return Some(coord);
            }
        }
        None
    }
}

/// The direction of a single step from `from` to `to`, if they are
/// adjacent.
pub fn direction_between(from: Coord, to: Coord) -> Option<Direction> {
    let delta = to - from;
    let direction = match (delta.x, delta.y) {
        (0, -1) => Direction::North,
        (1, -1) => Direction::NorthEast,
        (1, 0) => Direction::East,
        (1, 1) => Direction::SouthEast,
        (0, 1) => Direction::South,
        (-1, 1) => Direction::SouthWest,
        (-1, 0) => Direction::West,
        (-1, -1) => Direction::NorthWest,
        _ => return None,
    };
    Some(direction)
}
