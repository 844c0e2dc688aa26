use direction::Direction;
use grid_2d::Coord;
use std::slice;

/// Replays a sequence of steps from a starting coordinate, yielding each
/// coordinate entered along with the step that entered it.
pub struct PathWalk<'a> {
    current_coord: Coord,
    directions: slice::Iter<'a, Direction>,
}

impl<'a> PathWalk<'a> {
    pub fn new(start: Coord, path: &'a [Direction]) -> Self {
        Self {
            current_coord: start,
            directions: path.iter(),
        }
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = (Coord, Direction);
    fn next(&mut self) -> Option<Self::Item> {
        let &direction = self.directions.next()?;
        self.current_coord = self.current_coord + direction.coord();
        Some((self.current_coord, direction))
    }
}
