//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end. Players take
//! turns dropping pieces into columns until one connects four in a row or the
//! board fills up.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, placement state machine
//! - [`ui`] — Terminal UI: keyboard input and board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
