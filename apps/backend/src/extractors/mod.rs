pub mod admin;
pub mod bearer;
pub mod player_name;
pub mod validated_json;

pub use admin::AdminUser;
pub use player_name::{parse_player_name, PlayerPath};
pub use validated_json::ValidatedJson;
