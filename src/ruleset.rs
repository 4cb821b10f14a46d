use serde::{Deserialize, Serialize};

use crate::types::DiceFlavor;

/// Which rule variants are active for a session. Built once by the
/// orchestration layer and read everywhere else; card help text and the
/// dice setup are parameterized by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub commodities: bool,
    pub progress_cards: bool,
    pub barbarians: bool,
    pub seafaring: bool,
    pub num_players: u8,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            commodities: false,
            progress_cards: false,
            barbarians: false,
            seafaring: false,
            num_players: 4,
        }
    }
}

impl Ruleset {
    /// Base game plus the city/knight variant content.
    pub fn cities_and_knights() -> Self {
        Self {
            commodities: true,
            progress_cards: true,
            barbarians: true,
            ..Self::default()
        }
    }

    /// The event die only exists when barbarians are in play.
    pub fn event_die(&self) -> DiceFlavor {
        if self.barbarians {
            DiceFlavor::Event
        } else {
            DiceFlavor::None
        }
    }
}
