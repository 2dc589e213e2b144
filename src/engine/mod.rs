//! Transition engine and session.
//!
//! - `transition`: `KlondikeRules`, the `RulesEngine` that validates and
//!   applies moves
//! - `session`: `Session`, which owns the live game and exposes the
//!   presentation-facing commands

pub mod session;
pub mod transition;

pub use session::Session;
pub use transition::KlondikeRules;
