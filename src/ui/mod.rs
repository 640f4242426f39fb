//! In-game overlays
//!
//! - `digits`: Score numbers as glyph sprites
//! - `get_ready`: Banner shown while hovering before the first flap
//! - `game_over`: Final/best score panel

pub mod digits;
pub mod game_over;
pub mod get_ready;

pub use digits::{Align, draw_number, layout_number};
pub use game_over::GameOverPanel;
pub use get_ready::GetReady;
