//! Game rules: move legality and effect resolution.
//!
//! Both halves are pure. The controller in [`crate::game`] owns all
//! mutation; these functions only judge proposals and compute
//! consequences.

pub mod effects;
pub mod validator;

pub use effects::StackEffect;
pub use validator::{card_is_playable, validate_move};
