//! Terminal UI: the presentation layer that turns key presses into engine
//! calls and draws the board, the current player and end-of-game results.

mod app;
mod game_view;

pub use app::App;
