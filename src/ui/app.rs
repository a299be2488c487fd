use std::io;
use std::str::FromStr;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, style::Color, Terminal};
use tracing::warn;

use crate::game::{GameEngine, Placement, PlacementError, Seat};

/// Terminal front end for one game session. Translates key presses into
/// engine calls and renders whatever state the engine reports back.
pub struct App {
    engine: GameEngine,
    colors: [Color; 2],
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(engine: GameEngine) -> Self {
        let colors = [
            piece_color(&engine, Seat::First, Color::Red),
            piece_color(&engine, Seat::Second, Color::Yellow),
        ];
        let selected_column = engine.dimensions().width / 2; // Start in middle
        App {
            engine,
            colors,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let width = self.engine.dimensions().width;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < width {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.engine.restart();
                self.selected_column = width / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.engine.is_game_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.engine.attempt_placement(self.selected_column) {
            Ok(Placement::Win(seat)) => {
                let winner = self.engine.player(seat);
                self.message = Some(format!("{} ({}) won!", winner.name(), winner.color()));
            }
            Ok(Placement::Tie) => {
                self.message = Some("Tie!".to_string());
            }
            Ok(Placement::Continue) => {}
            Ok(Placement::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(PlacementError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(PlacementError::GameAlreadyOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            &self.colors,
            self.selected_column,
            &self.message,
        );
    }
}

/// Resolve a player's configured color, falling back when ratatui cannot
/// parse it.
fn piece_color(engine: &GameEngine, seat: Seat, fallback: Color) -> Color {
    let name = engine.player(seat).color();
    Color::from_str(name).unwrap_or_else(|_| {
        warn!(color = name, ?seat, "unrecognized color, using default");
        fallback
    })
}
