use serde::{Deserialize, Serialize};

// ── Newtypes ────────────────────────────────────────────────────────

/// Horizontal world position in pixels. Always clamped to the scene bounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Offset(pub f32);

impl Offset {
    pub fn clamped(v: f32, min: f32, max: f32) -> Self {
        debug_assert!(v.is_finite(), "Offset must be finite");
        debug_assert!(min <= max);
        Self(v.clamp(min, max))
    }

    /// Move by `delta`, staying within [min, max].
    pub fn shift_clamped(self, delta: f32, min: f32, max: f32) -> Self {
        Self::clamped(self.0 + delta, min, max)
    }
}

/// Duration in seconds. Always >= 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Seconds(pub f32);

impl Seconds {
    pub const ZERO: Self = Self(0.0);

    pub fn new(v: f32) -> Self {
        Self(v.max(0.0))
    }

    pub fn inc(self, dt: f32) -> Self {
        Self::new(self.0 + dt)
    }
}

/// Index into the run cycle. Always < the sprite count it was advanced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct SpriteFrame(pub u8);

impl SpriteFrame {
    pub const FIRST: Self = Self(0);

    pub fn next(self, count: u8) -> Self {
        debug_assert!(count > 0, "sprite count must be non-zero");
        Self((self.0 + 1) % count.max(1))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ── Enums ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Sign of motion along x.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn flipped_sprite(self) -> bool {
        self == Self::Left
    }
}
