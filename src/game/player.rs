/// Which of the two registered players a turn or a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Position of this seat in a two-element player table
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Get seat label for display
    pub fn name(self) -> &'static str {
        match self {
            Seat::First => "Player 1",
            Seat::Second => "Player 2",
        }
    }
}

/// A participant's display data. The engine never inspects it; front ends use
/// it to paint pieces and announce results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: String,
}

impl Player {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
