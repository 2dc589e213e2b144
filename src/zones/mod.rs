//! Card zones: the stock and the tableau/foundation piles.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered cards, last element on top (tableau and foundation)
//! - `Stock`: Undealt cards plus the browse cursor
//!
//! Mutators are crate-private. Outside the crate, zones are only reachable
//! through read-only `GameState` snapshots.

pub mod pile;
pub mod stock;

pub use pile::Pile;
pub use stock::Stock;
