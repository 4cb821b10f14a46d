use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{RouteKind, TerrainKind, VertexKind};

/// Highest player id an island discovery mask can record.
pub const MAX_PLAYERS: u8 = 8;

/// What a board edge currently is. Owned routes carry the owner's player
/// id; open edges have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub kind: RouteKind,
    pub owner: Option<u8>,
}

impl Route {
    pub fn open() -> Self {
        Self {
            kind: RouteKind::Open,
            owner: None,
        }
    }

    pub fn owned(kind: RouteKind, owner: u8) -> Self {
        Self {
            kind,
            owner: Some(owner),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            Some(player) => write!(f, "{} P{}", self.kind, player),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// What a board vertex currently is, plus the placement facts the bot
/// scores on: whether a structure may be placed here and what kind of
/// terrain the corner touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub kind: VertexKind,
    pub owner: Option<u8>,
    pub buildable: bool,
    pub touches_land: bool,
    pub touches_water: bool,
}

impl Vertex {
    pub fn open(buildable: bool, touches_land: bool, touches_water: bool) -> Self {
        Self {
            kind: VertexKind::Open,
            owner: None,
            buildable,
            touches_land,
            touches_water,
        }
    }

    pub fn occupied(kind: VertexKind, owner: u8) -> Self {
        Self {
            kind,
            owner: Some(owner),
            buildable: false,
            touches_land: true,
            touches_water: false,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            Some(player) => write!(f, "{} P{}", self.kind, player),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// A board tile: terrain plus the production number, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: TerrainKind,
    pub number: Option<u8>,
}

impl Tile {
    pub fn new(terrain: TerrainKind, number: Option<u8>) -> Self {
        Self { terrain, number }
    }

    pub fn sea() -> Self {
        Self {
            terrain: TerrainKind::Sea,
            number: None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", self.terrain, number),
            None => write!(f, "{}", self.terrain),
        }
    }
}

/// A numbered region of tiles with its shoreline, and which players have
/// discovered it. The discovery mask is one bit per player id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Island {
    pub number: u8,
    pub tiles: Vec<u16>,
    pub shoreline: Vec<u16>,
    discovered: u8,
}

impl Island {
    pub fn new(number: u8, tiles: Vec<u16>, shoreline: Vec<u16>) -> Self {
        Self {
            number,
            tiles,
            shoreline,
            discovered: 0,
        }
    }

    pub fn contains_tile(&self, tile: u16) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn mark_discovered(&mut self, player: u8) {
        debug_assert!(player < MAX_PLAYERS);
        self.discovered |= 1 << player;
    }

    pub fn is_discovered_by(&self, player: u8) -> bool {
        debug_assert!(player < MAX_PLAYERS);
        self.discovered & (1 << player) != 0
    }

    pub fn discovered_count(&self) -> u32 {
        self.discovered.count_ones()
    }
}
