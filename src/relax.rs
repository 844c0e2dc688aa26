use crate::config::SolveConfig;
use crate::distance_map::DistanceMap;
use crate::error::Error;
use crate::grid::{squared_distance, SolidGrid};
use crate::metadata::RelaxMetadata;
use crate::neighbours::{direction_between, neighbours};
use grid_2d::Coord;
use log::{debug, trace};
use num_traits::{NumCast, Zero};
use std::ops::Add;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<Cost> {
    pub path: Vec<Coord>,
    /// `None` if the target was never reached, in which case `path` holds
    /// only the target.
    pub cost: Option<Cost>,
}

impl<Cost> DistanceMap<Cost>
where
    Cost: Copy + Zero + NumCast + Add<Output = Cost> + PartialOrd,
{
    /// Bellman-Ford over every cell of `grid`. Each pass visits cells in
    /// row-major order and their neighbours in `neighbours` order, and an
    /// edge only wins if it is strictly cheaper, so ties always go to the
    /// first edge found.
    pub fn populate<G>(
        &mut self,
        grid: &G,
        source: Coord,
        config: SolveConfig,
    ) -> Result<RelaxMetadata, Error>
    where
        G: SolidGrid,
    {
        let size = grid.size();
        trace!(
            "populate: source=({},{}) grid={}x{}",
            source.x,
            source.y,
            size.width(),
            size.height()
        );

        if size != self.size() {
            debug!(
                "populate: map is {}x{} but grid is {}x{}",
                self.width(),
                self.height(),
                size.width(),
                size.height()
            );
            return Err(Error::SizeMismatch);
        }

        match grid.is_solid(source) {
            None => {
                debug!("populate: source ({},{}) outside grid", source.x, source.y);
                return Err(Error::SourceOutsideGrid);
            }
            Some(true) if !config.allow_wall_source => {
                debug!("populate: source ({},{}) is a wall", source.x, source.y);
                return Err(Error::SourceWall);
            }
            Some(_) => (),
        }

        self.seq += 1;
        self.origin = source;
        let seq = self.seq;
        let cell = self
            .grid
            .get_mut(source)
            .ok_or(Error::SourceOutsideGrid)?;
        cell.seen = seq;
        cell.cost = Zero::zero();
        cell.to_predecessor = None;

        let num_cells = size.width() as usize * size.height() as usize;
        let mut metadata = RelaxMetadata::default();

        for _ in 0..config.num_rounds(num_cells) {
            metadata.num_rounds += 1;
            let num_relaxations = self.relax_all(grid);
            metadata.num_relaxations += num_relaxations;
            if num_relaxations == 0 && config.stop_when_stable {
                break;
            }
        }

        debug!(
            "populate: source=({},{}) rounds={} relaxations={}",
            source.x, source.y, metadata.num_rounds, metadata.num_relaxations
        );

        Ok(metadata)
    }

    fn relax_all<G: SolidGrid>(&mut self, grid: &G) -> usize {
        let size = grid.size();
        let seq = self.seq;
        let mut num_relaxations = 0;

        for y in 0..size.height() as i32 {
            for x in 0..size.width() as i32 {
                let current_coord = Coord::new(x, y);
                let current_cost = match self.grid.get(current_coord) {
                    Some(cell) if cell.seen == seq => cell.cost,
                    _ => continue,
                };

                for neighbour_coord in neighbours(grid, current_coord) {
                    let cost = match squared_distance::<Cost>(current_coord, neighbour_coord) {
                        Some(step) => current_cost + step,
                        None => continue,
                    };

                    let to_predecessor = match direction_between(neighbour_coord, current_coord) {
                        Some(direction) => direction,
                        None => continue,
                    };

                    if let Some(cell) = self.grid.get_mut(neighbour_coord) {
                        if cell.seen != seq || cost < cell.cost {
                            cell.seen = seq;
                            cell.cost = cost;
                            cell.to_predecessor = Some(to_predecessor);
                            num_relaxations += 1;
                        }
                    }
                }
            }
        }

        num_relaxations
    }
}

/// Solves from `source` on a fresh map and reconstructs the path to
/// `target`.
pub fn shortest_path<G, Cost>(
    grid: &G,
    source: Coord,
    target: Coord,
    config: SolveConfig,
) -> Result<ShortestPath<Cost>, Error>
where
    G: SolidGrid,
    Cost: Copy + Zero + NumCast + Add<Output = Cost> + PartialOrd,
{
    let mut distance_map = DistanceMap::new(grid.size());
    distance_map.populate(grid, source, config)?;
    let mut path = Vec::new();
    distance_map.path_to(target, &mut path)?;
    Ok(ShortestPath {
        path,
        cost: distance_map.cost(target),
    })
}
