//! Player UI: state, layout and the actions connecting them

mod actions;
mod layout;
mod state;

pub use actions::{handle_player_action, PlayerAction};
pub use layout::draw_player;
pub use state::PlayerState;
