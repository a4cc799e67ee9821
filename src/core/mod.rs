//! Core building blocks: player identity and deterministic RNG.

pub mod player;
pub mod rng;

pub use player::PlayerId;
pub use rng::GameRng;
