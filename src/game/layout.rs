use std::f32::consts::TAU;

use super::types::Offset;
use super::walker::Scene;

/// Screen placement derived from the walker position.
///
/// All x values are measured from the left edge of the view. The actor is
/// pinned at `scene.start`, so the world scrolls underneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub actor_x: f32,
    /// Left edge of the background strip.
    pub background_x: f32,
    /// Left edge of the letter icon.
    pub letter_x: f32,
}

impl SceneLayout {
    pub fn at(position: Offset, scene: &Scene) -> Self {
        Self {
            actor_x: scene.start,
            background_x: scene.start - position.0,
            letter_x: scene.target - position.0 + scene.start,
        }
    }
}

/// Vertical bounce of the letter icon, in [0, amplitude].
pub fn letter_bob(elapsed: f32, amplitude: f32, period: f32) -> f32 {
    if period.is_nan() || period <= 0.0 || !amplitude.is_finite() {
        return 0.0;
    }
    let phase = (elapsed / period).rem_euclid(1.0);
    amplitude * (phase * TAU).sin().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene {
            world_width: 1380.0,
            start: 100.0,
            target: 1230.0,
            step_speed: 3.0,
            sprite_count: 6,
            frame_interval: 0.1,
        }
    }

    #[test]
    fn at_start_background_is_unscrolled() {
        let layout = SceneLayout::at(Offset(100.0), &scene());
        assert_eq!(layout.background_x, 0.0);
        assert_eq!(layout.letter_x, 1230.0);
        assert_eq!(layout.actor_x, 100.0);
    }

    #[test]
    fn letter_meets_actor_at_target() {
        let layout = SceneLayout::at(Offset(1230.0), &scene());
        assert_eq!(layout.letter_x, layout.actor_x);
        assert_eq!(layout.background_x, -1130.0);
    }

    #[test]
    fn world_scrolls_opposite_to_walk() {
        let s = scene();
        let a = SceneLayout::at(Offset(400.0), &s);
        let b = SceneLayout::at(Offset(403.0), &s);
        assert_eq!(b.background_x - a.background_x, -3.0);
        assert_eq!(b.letter_x - a.letter_x, -3.0);
        assert_eq!(a.actor_x, b.actor_x);
    }

    #[test]
    fn bob_is_bounded_and_periodic() {
        for i in 0..40 {
            let t = i as f32 * 0.05;
            let y = letter_bob(t, 12.0, 1.0);
            assert!((0.0..=12.0).contains(&y), "t={t} y={y}");
        }
        assert!((letter_bob(0.25, 12.0, 1.0) - 12.0).abs() < 1e-4);
        assert!((letter_bob(0.3, 12.0, 1.0) - letter_bob(1.3, 12.0, 1.0)).abs() < 1e-4);
        assert_eq!(letter_bob(0.4, 12.0, 0.0), 0.0);
        assert_eq!(letter_bob(0.4, 12.0, f32::NAN), 0.0);
    }
}
