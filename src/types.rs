use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Resource {
    Wood,
    Brick,
    Sheep,
    Wheat,
    Ore,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Brick,
        Resource::Sheep,
        Resource::Wheat,
        Resource::Ore,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Commodity {
    Cloth,
    Coin,
    Paper,
}

impl Commodity {
    pub const ALL: [Commodity; 3] = [Commodity::Cloth, Commodity::Coin, Commodity::Paper];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The development area a commodity is spent in.
    pub const fn area(self) -> DevelopmentArea {
        match self {
            Commodity::Cloth => DevelopmentArea::Trade,
            Commodity::Coin => DevelopmentArea::Politics,
            Commodity::Paper => DevelopmentArea::Science,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DevelopmentCard {
    Knight,
    YearOfPlenty,
    Monopoly,
    RoadBuilding,
    VictoryPoint,
}

impl DevelopmentCard {
    pub const ALL: [DevelopmentCard; 5] = [
        DevelopmentCard::Knight,
        DevelopmentCard::YearOfPlenty,
        DevelopmentCard::Monopoly,
        DevelopmentCard::RoadBuilding,
        DevelopmentCard::VictoryPoint,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DevelopmentArea {
    Trade,
    Politics,
    Science,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CardFamily {
    Resource,
    Commodity,
    Development,
    Progress,
    SpecialVictory,
}

impl CardFamily {
    pub const ALL: [CardFamily; 5] = [
        CardFamily::Resource,
        CardFamily::Commodity,
        CardFamily::Development,
        CardFamily::Progress,
        CardFamily::SpecialVictory,
    ];
}

// Declaration order is the sort order: hands list usable cards first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Usable,
    Unusable,
    Used,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiceFlavor {
    None,
    BlackWhite,
    YellowRed,
    RedYellow,
    Event,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiceEvent {
    AdvanceBarbarianShip,
    PoliticsCard,
    ScienceCard,
    TradeCard,
}

impl DiceEvent {
    /// Event triggered by a face of the event die. Faces outside [1,6] map
    /// to no event so callers can probe a reroll range before it settles.
    pub const fn from_face(face: u8) -> Option<DiceEvent> {
        match face {
            1..=3 => Some(DiceEvent::AdvanceBarbarianShip),
            4 => Some(DiceEvent::PoliticsCard),
            5 => Some(DiceEvent::ScienceCard),
            6 => Some(DiceEvent::TradeCard),
            _ => None,
        }
    }

    pub const fn area(self) -> Option<DevelopmentArea> {
        match self {
            DiceEvent::AdvanceBarbarianShip => None,
            DiceEvent::PoliticsCard => Some(DevelopmentArea::Politics),
            DiceEvent::ScienceCard => Some(DevelopmentArea::Science),
            DiceEvent::TradeCard => Some(DevelopmentArea::Trade),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteKind {
    Open,
    Road,
    DamagedRoad,
    Ship,
    Warship,
}

impl RouteKind {
    pub const ALL: [RouteKind; 5] = [
        RouteKind::Open,
        RouteKind::Road,
        RouteKind::DamagedRoad,
        RouteKind::Ship,
        RouteKind::Warship,
    ];

    /// Whether the piece links its endpoints for connectivity purposes.
    /// Damaged roads and warships do not: the former is cut, the latter
    /// has been converted for combat.
    pub const fn counts_as_route(self) -> bool {
        matches!(self, RouteKind::Road | RouteKind::Ship)
    }

    pub const fn is_vessel(self) -> bool {
        matches!(self, RouteKind::Ship | RouteKind::Warship)
    }

    pub const fn is_road(self) -> bool {
        matches!(self, RouteKind::Road | RouteKind::DamagedRoad)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VertexKind {
    Open,
    Settlement,
    City,
    WalledCity,
    MetropolisTrade,
    MetropolisPolitics,
    MetropolisScience,
    BasicKnight,
    BasicKnightActive,
    StrongKnight,
    StrongKnightActive,
    MightyKnight,
    MightyKnightActive,
}

impl VertexKind {
    /// Knight strength, 0 for anything that is not a knight.
    pub const fn knight_strength(self) -> u8 {
        match self {
            VertexKind::BasicKnight | VertexKind::BasicKnightActive => 1,
            VertexKind::StrongKnight | VertexKind::StrongKnightActive => 2,
            VertexKind::MightyKnight | VertexKind::MightyKnightActive => 3,
            _ => 0,
        }
    }

    pub const fn is_knight(self) -> bool {
        self.knight_strength() > 0
    }

    pub const fn is_active_knight(self) -> bool {
        matches!(
            self,
            VertexKind::BasicKnightActive
                | VertexKind::StrongKnightActive
                | VertexKind::MightyKnightActive
        )
    }

    /// Settlements, cities and metropolises; knights occupy a vertex but
    /// are not structures.
    pub const fn is_structure(self) -> bool {
        matches!(
            self,
            VertexKind::Settlement
                | VertexKind::City
                | VertexKind::WalledCity
                | VertexKind::MetropolisTrade
                | VertexKind::MetropolisPolitics
                | VertexKind::MetropolisScience
        )
    }

    pub const fn is_metropolis(self) -> bool {
        matches!(
            self,
            VertexKind::MetropolisTrade
                | VertexKind::MetropolisPolitics
                | VertexKind::MetropolisScience
        )
    }

    pub const fn metropolis_area(self) -> Option<DevelopmentArea> {
        match self {
            VertexKind::MetropolisTrade => Some(DevelopmentArea::Trade),
            VertexKind::MetropolisPolitics => Some(DevelopmentArea::Politics),
            VertexKind::MetropolisScience => Some(DevelopmentArea::Science),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TerrainKind {
    Desert,
    Forest,
    Hills,
    Pasture,
    Fields,
    Mountains,
    Sea,
    GoldField,
}

impl TerrainKind {
    pub const fn resource(self) -> Option<Resource> {
        match self {
            TerrainKind::Forest => Some(Resource::Wood),
            TerrainKind::Hills => Some(Resource::Brick),
            TerrainKind::Pasture => Some(Resource::Sheep),
            TerrainKind::Fields => Some(Resource::Wheat),
            TerrainKind::Mountains => Some(Resource::Ore),
            TerrainKind::Desert | TerrainKind::Sea | TerrainKind::GoldField => None,
        }
    }

    pub const fn is_land(self) -> bool {
        !matches!(self, TerrainKind::Sea)
    }
}
