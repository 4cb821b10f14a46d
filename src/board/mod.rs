pub mod distance;
pub mod topology;

pub use distance::{DISTANCE_INFINITY, DistanceMap, Path, VertexId};
pub use topology::{Island, MAX_PLAYERS, Route, Tile, Vertex};
