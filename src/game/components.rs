use bevy::prelude::*;

// ── Marker components ───────────────────────────────────────────────

/// The walking figure; carries the [`Walker`](super::walker::Walker).
#[derive(Component)]
pub struct Actor;

#[derive(Component)]
pub struct Background;

#[derive(Component)]
pub struct Letter;

// ── Game phase state ────────────────────────────────────────────────

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Walking,
    /// The letter was reached; the completion overlay is shown.
    Reached,
}
