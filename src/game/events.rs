use bevy::prelude::*;

use super::types::{Facing, Offset};

/// Walker input, written by keyboard and on-screen controls.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum WalkCommand {
    Press(Facing),
    Release,
    PlayAgain,
}

/// Written on the tick the actor arrives at the letter.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct LetterReached {
    pub position: Offset,
}
