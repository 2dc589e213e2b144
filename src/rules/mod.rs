//! Game rules.
//!
//! - `placement`: Pure predicates and target finders for foundation and
//!   tableau placement
//! - `victory`: Win detection
//! - `engine`: The `RulesEngine` trait the transition engine implements

pub mod engine;
pub mod placement;
pub mod victory;

pub use engine::{GameResult, RulesEngine};
pub use placement::{
    find_foundation_target, find_tableau_target, find_tableau_target_except, fits_foundation, fits_tableau,
    suits_stackable,
};
pub use victory::is_won;
