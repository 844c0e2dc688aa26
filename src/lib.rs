mod config;
mod distance_map;
mod error;
mod grid;
mod metadata;
mod neighbours;
mod path;
mod relax;
mod terrain;
mod text;

pub use crate::config::*;
pub use crate::distance_map::*;
pub use crate::error::*;
pub use crate::grid::*;
pub use crate::metadata::*;
pub use crate::neighbours::*;
pub use crate::path::*;
pub use crate::relax::*;
pub use crate::terrain::*;
pub use crate::text::*;

pub use direction::Direction;
pub use grid_2d::{Coord, Grid, Size};
