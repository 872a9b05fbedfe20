//! # Connect N
//!
//! A two-player "connect N in a row" game on a rectangular grid with
//! gravity drops, played in the terminal.
//!
//! ## Modules
//!
//! - [`game`] — Board engine: board, player, turn/draw state machine
//! - [`ui`] — Terminal UI and a plain line-prompt shell
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
