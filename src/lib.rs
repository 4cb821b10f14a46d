#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod board;
pub mod cards;
pub mod decision;
pub mod dice;
pub mod ruleset;
pub mod types;

pub use board::{DISTANCE_INFINITY, DistanceMap, Island, Path, Route, Tile, Vertex, VertexId};
pub use cards::{Card, CardError, CardTypeInfo, Trade, dereference};
pub use decision::{DecisionNode, NodeValue};
pub use dice::Dice;
pub use ruleset::Ruleset;
pub use types::{
    CardFamily, CardStatus, Commodity, DevelopmentArea, DevelopmentCard, DiceEvent, DiceFlavor,
    Resource, RouteKind, TerrainKind, VertexKind,
};
