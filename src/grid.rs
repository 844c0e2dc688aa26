use grid_2d::{Coord, Size};
use num_traits::NumCast;

pub trait SolidGrid {
    fn size(&self) -> Size;
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
}

/// Cost of stepping between two coordinates: the squared euclidean
/// distance. `None` if it does not fit in `Cost`.
pub fn squared_distance<Cost: NumCast>(from: Coord, to: Coord) -> Option<Cost> {
    let dx = <i64 as From<i32>>::from(to.x) - <i64 as From<i32>>::from(from.x);
    let dy = <i64 as From<i32>>::from(to.y) - <i64 as From<i32>>::from(from.y);
    let steps = dx.checked_mul(dx)?.checked_add(dy.checked_mul(dy)?)?;
    NumCast::from(steps)
}
