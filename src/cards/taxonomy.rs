use once_cell::sync::Lazy;

use crate::ruleset::Ruleset;
use crate::types::{CardFamily, CardStatus, Commodity, DevelopmentArea, DevelopmentCard, Resource};

/// One concrete card type inside a family. Rows live in the per-family
/// constant tables below; ordinals are contiguous from 0 and stable for
/// the lifetime of the process, so a `(family, ordinal)` pair is the
/// compact storage and wire form of a card type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTypeInfo {
    pub family: CardFamily,
    pub ordinal: u8,
    pub name: String,
    pub default_status: CardStatus,
    pub area: Option<DevelopmentArea>,
}

impl CardTypeInfo {
    /// Help text for hand tooltips, phrased for the active ruleset.
    pub fn about(&self, ruleset: &Ruleset) -> String {
        match self.family {
            CardFamily::Resource => format!("{}: base resource produced by terrain", self.name),
            CardFamily::Commodity => {
                let area = self.area.expect("commodities carry an area");
                if ruleset.commodities {
                    format!("{}: commodity spent on {} improvements", self.name, area)
                } else {
                    format!("{}: not in play under the current rules", self.name)
                }
            }
            CardFamily::Development => {
                format!("{}: development card, one play per turn", self.name)
            }
            CardFamily::Progress => {
                let area = self.area.expect("progress cards carry an area");
                if ruleset.progress_cards {
                    format!("{}: {} progress card, playable next turn", self.name, area)
                } else {
                    format!("{}: not in play under the current rules", self.name)
                }
            }
            CardFamily::SpecialVictory => {
                format!("{}: special victory banner, held while earned", self.name)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("unknown card type {ordinal} in family {family}")]
    UnknownType { family: CardFamily, ordinal: u8 },
}

/// Resolve `(family, ordinal)` to its descriptor. The fallible boundary
/// for untrusted ordinals (loaded saves, wire data); in-process callers
/// that constructed the ordinal from a typed enum can unwrap freely.
pub fn dereference(family: CardFamily, ordinal: u8) -> Result<&'static CardTypeInfo, CardError> {
    family
        .types()
        .get(ordinal as usize)
        .ok_or(CardError::UnknownType { family, ordinal })
}

impl CardFamily {
    /// The family's fixed type table.
    pub fn types(self) -> &'static [CardTypeInfo] {
        match self {
            CardFamily::Resource => &RESOURCE_TYPES,
            CardFamily::Commodity => &COMMODITY_TYPES,
            CardFamily::Development => &DEVELOPMENT_TYPES,
            CardFamily::Progress => &PROGRESS_TYPES,
            CardFamily::SpecialVictory => &SPECIAL_VICTORY_TYPES,
        }
    }

    pub fn type_count(self) -> u8 {
        self.types().len() as u8
    }

    /// Cards of this family are issued in this status.
    pub const fn default_status(self) -> CardStatus {
        match self {
            // Progress cards drawn mid-turn wait for the holder's next turn.
            CardFamily::Progress => CardStatus::Unusable,
            // Victory banners are never "played".
            CardFamily::SpecialVictory => CardStatus::Used,
            _ => CardStatus::Usable,
        }
    }
}

fn build_table(
    family: CardFamily,
    rows: Vec<(String, Option<DevelopmentArea>)>,
) -> Vec<CardTypeInfo> {
    let table: Vec<CardTypeInfo> = rows
        .into_iter()
        .enumerate()
        .map(|(ordinal, (name, area))| CardTypeInfo {
            family,
            ordinal: ordinal as u8,
            name,
            default_status: family.default_status(),
            area,
        })
        .collect();
    tracing::debug!(family = %family, types = table.len(), "card type table initialized");
    table
}

static RESOURCE_TYPES: Lazy<Vec<CardTypeInfo>> = Lazy::new(|| {
    build_table(
        CardFamily::Resource,
        Resource::ALL
            .into_iter()
            .map(|r| (r.to_string(), None))
            .collect(),
    )
});

static COMMODITY_TYPES: Lazy<Vec<CardTypeInfo>> = Lazy::new(|| {
    build_table(
        CardFamily::Commodity,
        Commodity::ALL
            .into_iter()
            .map(|c| (c.to_string(), Some(c.area())))
            .collect(),
    )
});

static DEVELOPMENT_TYPES: Lazy<Vec<CardTypeInfo>> = Lazy::new(|| {
    build_table(
        CardFamily::Development,
        DevelopmentCard::ALL
            .into_iter()
            .map(|d| (d.to_string(), None))
            .collect(),
    )
});

static PROGRESS_TYPES: Lazy<Vec<CardTypeInfo>> = Lazy::new(|| {
    use DevelopmentArea::*;
    let roster: &[(&str, DevelopmentArea)] = &[
        ("MERCHANT", Trade),
        ("MERCHANT_FLEET", Trade),
        ("COMMERCIAL_HARBOR", Trade),
        ("MASTER_MERCHANT", Trade),
        ("RESOURCE_MONOPOLY", Trade),
        ("TRADE_MONOPOLY", Trade),
        ("BISHOP", Politics),
        ("CONSTITUTION", Politics),
        ("DESERTER", Politics),
        ("DIPLOMAT", Politics),
        ("INTRIGUE", Politics),
        ("SABOTEUR", Politics),
        ("SPY", Politics),
        ("WARLORD", Politics),
        ("WEDDING", Politics),
        ("ALCHEMIST", Science),
        ("CRANE", Science),
        ("ENGINEER", Science),
        ("INVENTOR", Science),
        ("IRRIGATION", Science),
        ("MEDICINE", Science),
        ("MINING", Science),
        ("PRINTER", Science),
        ("ROAD_BUILDING", Science),
        ("SMITH", Science),
    ];
    build_table(
        CardFamily::Progress,
        roster
            .iter()
            .map(|(name, area)| (name.to_string(), Some(*area)))
            .collect(),
    )
});

static SPECIAL_VICTORY_TYPES: Lazy<Vec<CardTypeInfo>> = Lazy::new(|| {
    let roster = ["LONGEST_ROAD", "LARGEST_ARMY", "MERCHANT", "HARBOR_MASTER"];
    build_table(
        CardFamily::SpecialVictory,
        roster.iter().map(|name| (name.to_string(), None)).collect(),
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dereference_within_bounds() {
        for family in CardFamily::ALL {
            for ordinal in 0..family.type_count() {
                let info = dereference(family, ordinal).unwrap();
                assert_eq!(info.family, family);
                assert_eq!(info.ordinal, ordinal);
                assert!(!info.name.is_empty());
            }
        }
    }

    #[test]
    fn dereference_out_of_range_is_an_error() {
        for family in CardFamily::ALL {
            let bad = family.type_count();
            assert_eq!(
                dereference(family, bad),
                Err(CardError::UnknownType {
                    family,
                    ordinal: bad
                })
            );
        }
    }

    #[test]
    fn repeated_dereference_is_referentially_stable() {
        let first = dereference(CardFamily::Progress, 3).unwrap();
        let second = dereference(CardFamily::Progress, 3).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn family_rosters_match_type_enums() {
        assert_eq!(
            CardFamily::Resource.type_count() as usize,
            Resource::ALL.len()
        );
        assert_eq!(
            CardFamily::Commodity.type_count() as usize,
            Commodity::ALL.len()
        );
        assert_eq!(
            CardFamily::Development.type_count() as usize,
            DevelopmentCard::ALL.len()
        );
        assert_eq!(
            dereference(CardFamily::Resource, Resource::Ore.ordinal())
                .unwrap()
                .name,
            "ORE"
        );
        assert_eq!(
            dereference(CardFamily::Development, DevelopmentCard::YearOfPlenty.ordinal())
                .unwrap()
                .name,
            "YEAR_OF_PLENTY"
        );
    }

    #[test]
    fn default_status_per_family() {
        assert_eq!(
            dereference(CardFamily::Progress, 0).unwrap().default_status,
            CardStatus::Unusable
        );
        assert_eq!(
            dereference(CardFamily::SpecialVictory, 0)
                .unwrap()
                .default_status,
            CardStatus::Used
        );
        assert_eq!(
            dereference(CardFamily::Resource, 0).unwrap().default_status,
            CardStatus::Usable
        );
    }

    #[test]
    fn commodities_link_their_development_area() {
        let cloth = dereference(CardFamily::Commodity, Commodity::Cloth.ordinal()).unwrap();
        assert_eq!(cloth.area, Some(DevelopmentArea::Trade));
        let paper = dereference(CardFamily::Commodity, Commodity::Paper.ordinal()).unwrap();
        assert_eq!(paper.area, Some(DevelopmentArea::Science));
    }

    #[test]
    fn about_reflects_ruleset() {
        let cloth = dereference(CardFamily::Commodity, 0).unwrap();
        let base = cloth.about(&Ruleset::default());
        let ck = cloth.about(&Ruleset::cities_and_knights());
        assert!(base.contains("not in play"));
        assert!(ck.contains("TRADE"));
    }
}
