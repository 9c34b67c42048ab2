pub mod game;
pub mod players;
pub mod score_recorder;
