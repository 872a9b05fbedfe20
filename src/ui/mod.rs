//! Terminal front ends: a full-screen ratatui game view and a plain
//! line-prompt shell.

mod app;
pub mod board_widget;
mod game_view;
pub mod prompt;

pub use app::App;
pub use prompt::run_plain;
