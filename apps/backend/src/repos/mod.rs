//! Repository functions and the store seam used by services.

pub mod player_store;
pub mod players;

pub use player_store::{DetachedPlayerStore, PlayerStore, SeaPlayerStore};
pub use players::{LeaderboardEntry, PlayerRecord};
