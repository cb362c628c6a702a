use bevy::prelude::*;

use super::types::{Facing, Offset, Seconds, SpriteFrame};

/// Static bounds and speeds the walker moves within.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct Scene {
    pub world_width: f32,
    /// Leftmost position; also where every run starts.
    pub start: f32,
    /// Rightmost position; reaching it completes the run.
    pub target: f32,
    /// Pixels per tick.
    pub step_speed: f32,
    pub sprite_count: u8,
    /// Seconds between run frames.
    pub frame_interval: f32,
}

/// Result of a single [`Walker::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not moving; nothing changed.
    Idle,
    Moved,
    /// The target was reached on this tick. Returned once per run.
    Reached,
}

/// Animation controller for the actor.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Walker {
    pub position: Offset,
    pub moving: bool,
    pub facing: Facing,
    pub frame: SpriteFrame,
    frame_clock: Seconds,
    pub completed: bool,
}

impl Walker {
    pub fn new(scene: &Scene) -> Self {
        Self {
            position: Offset(scene.start),
            moving: false,
            facing: Facing::default(),
            frame: SpriteFrame::FIRST,
            frame_clock: Seconds::ZERO,
            completed: false,
        }
    }

    /// Start walking toward `facing`. Ignored once the run is complete.
    pub fn press(&mut self, facing: Facing) {
        if self.completed {
            return;
        }
        self.facing = facing;
        self.moving = true;
    }

    /// Stop walking and fall back to the first frame.
    pub fn release(&mut self) {
        self.moving = false;
        self.frame = SpriteFrame::FIRST;
        self.frame_clock = Seconds::ZERO;
    }

    pub fn is_standing(&self) -> bool {
        !self.moving
    }

    /// Advance one tick of `dt` seconds.
    pub fn step(&mut self, dt: f32, scene: &Scene) -> StepOutcome {
        if !self.moving {
            return StepOutcome::Idle;
        }

        self.frame_clock = self.frame_clock.inc(dt);
        if self.frame_clock.0 >= scene.frame_interval {
            self.frame = self.frame.next(scene.sprite_count);
            self.frame_clock = Seconds::ZERO;
        }

        self.position = self.position.shift_clamped(
            self.facing.sign() * scene.step_speed,
            scene.start,
            scene.target,
        );

        if self.position.0 >= scene.target && !self.completed {
            self.release();
            self.completed = true;
            return StepOutcome::Reached;
        }
        StepOutcome::Moved
    }

    /// Start a new run from the beginning.
    pub fn play_again(&mut self, scene: &Scene) {
        self.release();
        self.completed = false;
        self.position = Offset(scene.start);
    }
}
