//! Next/previous navigation through the sequence of artworks
//!
//! The artwork at index `n` is the one generated from seed `n`, so navigating
//! is plain integer stepping and every position can be revisited exactly.

use std::fmt;

/// Direction of a navigation step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices ("next")
    #[default]
    Forward,
    /// Towards lower indices ("previous")
    Backward,
}

impl Direction {
    const fn delta(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Current position in the artwork sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    index: i64,
}

impl Cursor {
    /// Cursor positioned at an index
    pub const fn new(index: i64) -> Self {
        Self { index }
    }

    /// Index, which is also the seed of the artwork shown
    pub const fn index(&self) -> i64 {
        self.index
    }

    /// Move one step and return the new index
    ///
    /// Stepping past either end of the `i64` range wraps around.
    pub const fn step(&mut self, direction: Direction) -> i64 {
        self.index = self.index.wrapping_add(direction.delta());
        self.index
    }

    /// Move to the next artwork
    pub const fn forward(&mut self) -> i64 {
        self.step(Direction::Forward)
    }

    /// Move to the previous artwork
    pub const fn back(&mut self) -> i64 {
        self.step(Direction::Backward)
    }

    /// Text shown to the user for the current position
    pub fn label(&self) -> String {
        self.index.to_string()
    }

    /// Indices visited by showing the current artwork and then stepping
    /// `count - 1` times in one direction
    pub fn walk(self, count: usize, direction: Direction) -> impl Iterator<Item = i64> {
        let mut cursor = self;
        (0..count).map(move |step| {
            if step > 0 {
                cursor.step(direction);
            }
            cursor.index
        })
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}
