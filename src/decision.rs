use serde::{Deserialize, Serialize};

use crate::board::topology::{Route, Tile, Vertex};
use crate::cards::{Card, Trade};

/// One candidate choice for the search algorithm: exactly one payload
/// per node, fixed at construction. The bot enumerates the legal moves
/// of a turn, wraps each in the matching variant, and scores or presents
/// them uniformly through `value` and `description`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionNode {
    /// Play or discard a card from a hand.
    Card(Card),
    /// A concrete dice outcome.
    Dice(u8, u8),
    /// One entry of a fixed named-option set.
    Choice { value: u32, name: String },
    /// Target another player.
    Player { id: u8, name: String },
    /// Place on a board edge.
    Route { index: u16, route: Route },
    /// Act on a board tile.
    Tile { index: u16, tile: Tile },
    /// Accept or propose an exchange.
    Trade(Trade),
    /// Place on a board corner.
    Vertex { index: u16, vertex: Vertex },
}

/// Canonical payload of a node, for programmatic comparison and scoring.
/// Mirrors the node variants; the player variant collapses to its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeValue {
    Card(Card),
    Dice(u8, u8),
    Choice(u32),
    Player(u8),
    Route(Route),
    Tile(Tile),
    Trade(Trade),
    Vertex(Vertex),
}

impl DecisionNode {
    /// `name` must be non-empty; it is the node's whole description.
    pub fn choice(value: u32, name: impl Into<String>) -> Self {
        DecisionNode::Choice {
            value,
            name: name.into(),
        }
    }

    pub fn player(id: u8, name: impl Into<String>) -> Self {
        DecisionNode::Player {
            id,
            name: name.into(),
        }
    }

    pub fn route(index: u16, route: Route) -> Self {
        DecisionNode::Route { index, route }
    }

    pub fn tile(index: u16, tile: Tile) -> Self {
        DecisionNode::Tile { index, tile }
    }

    pub fn vertex(index: u16, vertex: Vertex) -> Self {
        DecisionNode::Vertex { index, vertex }
    }

    pub fn value(&self) -> NodeValue {
        match self {
            DecisionNode::Card(card) => NodeValue::Card(*card),
            DecisionNode::Dice(d0, d1) => NodeValue::Dice(*d0, *d1),
            DecisionNode::Choice { value, .. } => NodeValue::Choice(*value),
            DecisionNode::Player { id, .. } => NodeValue::Player(*id),
            DecisionNode::Route { route, .. } => NodeValue::Route(*route),
            DecisionNode::Tile { tile, .. } => NodeValue::Tile(*tile),
            DecisionNode::Trade(trade) => NodeValue::Trade(*trade),
            DecisionNode::Vertex { vertex, .. } => NodeValue::Vertex(*vertex),
        }
    }

    /// Human-readable label for logs and move lists.
    pub fn description(&self) -> String {
        match self {
            DecisionNode::Card(card) => card.to_string(),
            DecisionNode::Dice(d0, d1) => format!("Dice [{d0} {d1}]"),
            DecisionNode::Choice { name, .. } => name.clone(),
            DecisionNode::Player { name, .. } => name.clone(),
            DecisionNode::Route { index, route } => format!("{index}  {route}"),
            DecisionNode::Tile { index, tile } => format!("T({index}) {tile}"),
            DecisionNode::Trade(trade) => trade.to_string(),
            DecisionNode::Vertex { index, vertex } => {
                let mut label = format!("V({index}) {}", vertex.kind);
                if vertex.buildable {
                    label.push_str(" STRUC");
                }
                if vertex.touches_land {
                    label.push_str(" LAND");
                }
                if vertex.touches_water {
                    label.push_str(" WATER");
                }
                label
            }
        }
    }
}
