use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::taxonomy::{CardError, CardTypeInfo, dereference};
use crate::types::{CardFamily, CardStatus, Commodity, DevelopmentCard, Resource};

/// A single card: its type, addressed as `(family, ordinal)`, and where
/// it is in its lifecycle. Copied by value into hands, trade offers and
/// decision nodes; the taxonomy owns everything else about the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    family: CardFamily,
    ordinal: u8,
    status: CardStatus,
}

impl Card {
    /// Issue a card in its type's default status. Unknown ordinals fall
    /// back to `Usable` so construction stays total; they surface later
    /// through `type_info`.
    pub fn new(family: CardFamily, ordinal: u8) -> Self {
        let status = dereference(family, ordinal)
            .map(|info| info.default_status)
            .unwrap_or(CardStatus::Usable);
        Self {
            family,
            ordinal,
            status,
        }
    }

    pub fn with_status(family: CardFamily, ordinal: u8, status: CardStatus) -> Self {
        Self {
            family,
            ordinal,
            status,
        }
    }

    pub fn resource(resource: Resource) -> Self {
        Self::new(CardFamily::Resource, resource.ordinal())
    }

    pub fn commodity(commodity: Commodity) -> Self {
        Self::new(CardFamily::Commodity, commodity.ordinal())
    }

    pub fn development(card: DevelopmentCard) -> Self {
        Self::new(CardFamily::Development, card.ordinal())
    }

    pub fn family(&self) -> CardFamily {
        self.family
    }

    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    pub fn status(&self) -> CardStatus {
        self.status
    }

    /// No transition validation here: the rules engine is the sole caller
    /// and owns lifecycle legality.
    pub fn set_status(&mut self, status: CardStatus) {
        self.status = status;
    }

    /// Maturation at the start of the holder's turn: cards drawn mid-turn
    /// become playable. Used and usable cards are untouched.
    pub fn refresh_for_turn(&mut self) {
        if self.status == CardStatus::Unusable {
            self.status = CardStatus::Usable;
        }
    }

    pub fn type_info(&self) -> Result<&'static CardTypeInfo, CardError> {
        dereference(self.family, self.ordinal)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Status first, so sorting a hand lists usable cards before unusable and
// used ones; ordinal then family only to keep the order total.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.status
            .cmp(&other.status)
            .then(self.ordinal.cmp(&other.ordinal))
            .then(self.family.cmp(&other.family))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_info() {
            Ok(info) => write!(f, "{} ({})", info.name, self.status),
            Err(_) => write!(f, "{}#{} ({})", self.family, self.ordinal, self.status),
        }
    }
}
