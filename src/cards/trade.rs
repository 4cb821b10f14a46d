use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::card::Card;
use crate::cards::taxonomy::{CardError, CardTypeInfo, dereference};
use crate::types::CardFamily;

/// "N units of card type T". Used both for exchange offers and to
/// describe a single card's type and count. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trade {
    family: CardFamily,
    ordinal: u8,
    amount: u8,
}

impl Trade {
    pub fn new(family: CardFamily, ordinal: u8, amount: u8) -> Self {
        Self {
            family,
            ordinal,
            amount,
        }
    }

    /// Build from an existing card, keeping its type and dropping status.
    pub fn from_card(card: &Card, amount: u8) -> Self {
        Self {
            family: card.family(),
            ordinal: card.ordinal(),
            amount,
        }
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    pub fn family(&self) -> CardFamily {
        self.family
    }

    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// Re-dereferences through the taxonomy on every call; the descriptor
    /// is never stored, so serialized trades survive table reloads.
    pub fn card_type(&self) -> Result<&'static CardTypeInfo, CardError> {
        dereference(self.family, self.ordinal)
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.card_type() {
            Ok(info) => write!(f, "{}x {}", self.amount, info.name),
            Err(_) => write!(f, "{}x {}#{}", self.amount, self.family, self.ordinal),
        }
    }
}
