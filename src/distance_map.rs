use crate::error::Error;
use direction::Direction;
use grid_2d::{Coord, Grid, Size};
use log::trace;
use num_traits::Zero;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct DistanceMapCell<Cost> {
    pub(crate) seen: u64,
    pub(crate) cost: Cost,
    pub(crate) to_predecessor: Option<Direction>,
    pub(crate) coord: Coord,
}

impl<Cost: Zero> DistanceMapCell<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            cost: Zero::zero(),
            to_predecessor: None,
            coord,
        }
    }
}

impl<Cost> DistanceMapCell<Cost>
where
    Cost: Copy,
{
    pub fn cost(&self) -> Cost {
        self.cost
    }
    /// Direction of the step back towards the source.
    pub fn to_predecessor(&self) -> Option<Direction> {
        self.to_predecessor
    }
    pub fn predecessor(&self) -> Option<Coord> {
        self.to_predecessor
            .map(|direction| self.coord + direction.coord())
    }
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

#[derive(Debug, Clone)]
pub enum DistanceMapEntry<'a, Cost: 'a> {
    Origin,
    Unreached,
    Outside,
    Cell(&'a DistanceMapCell<Cost>),
}

impl<'a, Cost> DistanceMapEntry<'a, Cost> {
    pub fn cell(self) -> Option<&'a DistanceMapCell<Cost>> {
        match self {
            DistanceMapEntry::Cell(c) => Some(c),
            _ => None,
        }
    }
    pub fn is_outside(&self) -> bool {
        match self {
            DistanceMapEntry::Outside => true,
            _ => false,
        }
    }
}

/// Distances and predecessors from a single source. A cell counts as
/// reached only if it was written during the most recent solve, so the
/// map can be reused without clearing it.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct DistanceMap<Cost> {
    pub(crate) seq: u64,
    pub(crate) grid: Grid<DistanceMapCell<Cost>>,
    pub(crate) origin: Coord,
}

impl<Cost> DistanceMap<Cost>
where
    Cost: Zero + Copy,
{
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            grid: Grid::new_fn(size, DistanceMapCell::new),
            origin: Coord::new(0, 0),
        }
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

    /// The source of the most recent solve.
    pub fn origin(&self) -> Option<Coord> {
        if self.seq == 0 {
            None
        } else {
            Some(self.origin)
        }
    }

    pub fn get(&self, coord: Coord) -> DistanceMapEntry<'_, Cost> {
        if let Some(cell) = self.grid.get(coord) {
            if self.seq != 0 && cell.seen == self.seq {
                if coord == self.origin {
                    DistanceMapEntry::Origin
                } else {
                    DistanceMapEntry::Cell(cell)
                }
            } else {
                DistanceMapEntry::Unreached
            }
        } else {
            DistanceMapEntry::Outside
        }
    }

    /// `None` stands for an infinite distance.
    pub fn cost(&self, coord: Coord) -> Option<Cost> {
        match self.get(coord) {
            DistanceMapEntry::Cell(cell) => Some(cell.cost),
            DistanceMapEntry::Origin => Some(Zero::zero()),
            DistanceMapEntry::Unreached => None,
            DistanceMapEntry::Outside => None,
        }
    }

    pub fn is_reached(&self, coord: Coord) -> bool {
        match self.get(coord) {
            DistanceMapEntry::Cell(_) | DistanceMapEntry::Origin => true,
            DistanceMapEntry::Unreached | DistanceMapEntry::Outside => false,
        }
    }

    pub fn predecessor(&self, coord: Coord) -> Option<Coord> {
        self.get(coord).cell().and_then(DistanceMapCell::predecessor)
    }

    /// Fills `path` with the coordinates from the start of the predecessor
    /// chain ending at `target` through to `target` itself. An unreached
    /// target yields a path containing only the target.
    pub fn path_to(&self, target: Coord, path: &mut Vec<Coord>) -> Result<(), Error> {
        path.clear();
        if self.get(target).is_outside() {
            return Err(Error::TargetOutsideGrid);
        }
        let mut coord = target;
        path.push(coord);
        while let Some(predecessor) = self.predecessor(coord) {
            path.push(predecessor);
            coord = predecessor;
        }
        path.reverse();
        trace!(
            "path_to: target=({},{}) length={}",
            target.x,
            target.y,
            path.len()
        );
        Ok(())
    }

    /// Like `path_to`, but records the step taken to reach each
    /// coordinate after the first.
    pub fn directions_to(&self, target: Coord, path: &mut Vec<Direction>) -> Result<(), Error> {
        path.clear();
        if self.get(target).is_outside() {
            return Err(Error::TargetOutsideGrid);
        }
        let mut coord = target;
        while let Some(cell) = self.get(coord).cell() {
            let direction = match cell.to_predecessor {
                Some(direction) => direction,
                None => break,
            };
            path.push(direction.opposite());
            coord = coord + direction.coord();
        }
        path.reverse();
        Ok(())
    }
}
