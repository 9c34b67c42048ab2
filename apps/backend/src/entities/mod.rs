pub mod players;

pub use players::Entity as Players;
pub use players::Model as Player;
