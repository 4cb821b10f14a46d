pub mod card;
pub mod taxonomy;
pub mod trade;

pub use card::Card;
pub use taxonomy::{CardError, CardTypeInfo, dereference};
pub use trade::Trade;
