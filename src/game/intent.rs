use bevy::prelude::*;

use super::components::{Actor, GamePhase};
use super::events::WalkCommand;
use super::types::Facing;
use super::walker::{Scene, Walker};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];
const PLAY_AGAIN_KEYS: [KeyCode; 2] = [KeyCode::Enter, KeyCode::Space];

/// Translate this frame's direction key edges into a walker command.
///
/// A fresh press wins; releasing one key while the other is still held
/// turns around instead of stopping.
pub fn keyboard_command(keyboard: &ButtonInput<KeyCode>) -> Option<WalkCommand> {
    if keyboard.any_just_pressed(RIGHT_KEYS) {
        return Some(WalkCommand::Press(Facing::Right));
    }
    if keyboard.any_just_pressed(LEFT_KEYS) {
        return Some(WalkCommand::Press(Facing::Left));
    }
    if keyboard.any_just_released(LEFT_KEYS.into_iter().chain(RIGHT_KEYS)) {
        if keyboard.any_pressed(RIGHT_KEYS) {
            return Some(WalkCommand::Press(Facing::Right));
        }
        if keyboard.any_pressed(LEFT_KEYS) {
            return Some(WalkCommand::Press(Facing::Left));
        }
        return Some(WalkCommand::Release);
    }
    None
}

pub fn read_walk_keys(keyboard: Res<ButtonInput<KeyCode>>, mut commands: MessageWriter<WalkCommand>) {
    if let Some(command) = keyboard_command(&keyboard) {
        commands.write(command);
    }
}

pub fn read_play_again_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: MessageWriter<WalkCommand>,
) {
    if keyboard.any_just_pressed(PLAY_AGAIN_KEYS) {
        commands.write(WalkCommand::PlayAgain);
    }
}

/// Single entry point for walker input, whatever its source.
pub fn apply_walk_commands(
    mut commands: MessageReader<WalkCommand>,
    scene: Res<Scene>,
    mut query: Query<&mut Walker, With<Actor>>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    for command in commands.read() {
        for mut walker in &mut query {
            match *command {
                WalkCommand::Press(facing) => walker.press(facing),
                WalkCommand::Release => walker.release(),
                WalkCommand::PlayAgain => {
                    walker.play_again(&scene);
                    info!("Play again: back to offset {}", scene.start);
                }
            }
        }
        if *command == WalkCommand::PlayAgain {
            next_state.set(GamePhase::Walking);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{test_app, walker};
    use crate::game::types::Offset;

    fn pressed(keys: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut input = ButtonInput::default();
        for key in keys {
            input.press(*key);
        }
        input
    }

    #[test]
    fn arrow_press_starts_walking() {
        let input = pressed(&[KeyCode::ArrowRight]);
        assert_eq!(keyboard_command(&input), Some(WalkCommand::Press(Facing::Right)));
        let input = pressed(&[KeyCode::KeyA]);
        assert_eq!(keyboard_command(&input), Some(WalkCommand::Press(Facing::Left)));
    }

    #[test]
    fn held_key_emits_nothing_new() {
        let mut input = pressed(&[KeyCode::ArrowLeft]);
        input.clear();
        assert_eq!(keyboard_command(&input), None);
    }

    #[test]
    fn releasing_last_key_stops() {
        let mut input = pressed(&[KeyCode::ArrowRight]);
        input.clear();
        input.release(KeyCode::ArrowRight);
        assert_eq!(keyboard_command(&input), Some(WalkCommand::Release));
    }

    #[test]
    fn releasing_one_of_two_keys_turns_around() {
        let mut input = pressed(&[KeyCode::ArrowRight, KeyCode::ArrowLeft]);
        input.clear();
        input.release(KeyCode::ArrowRight);
        assert_eq!(keyboard_command(&input), Some(WalkCommand::Press(Facing::Left)));
    }

    #[test]
    fn commands_drive_the_walker() {
        let mut app = test_app();
        app.add_systems(Update, apply_walk_commands);

        app.world_mut().write_message(WalkCommand::Press(Facing::Left));
        app.update();
        let w = walker(&mut app);
        assert!(w.moving);
        assert_eq!(w.facing, Facing::Left);

        app.world_mut().write_message(WalkCommand::Release);
        app.update();
        let w = walker(&mut app);
        assert!(!w.moving);
        assert_eq!(w.position, Offset(100.0));
    }

    #[test]
    fn play_again_returns_to_walking_phase() {
        let mut app = test_app();
        app.add_systems(Update, apply_walk_commands);
        app.update();
        app.world_mut()
            .resource_mut::<NextState<GamePhase>>()
            .set(GamePhase::Reached);
        app.update();
        assert_eq!(*app.world().resource::<State<GamePhase>>().get(), GamePhase::Reached);

        app.world_mut().write_message(WalkCommand::PlayAgain);
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<GamePhase>>().get(), GamePhase::Walking);
        let w = walker(&mut app);
        assert!(!w.completed);
        assert_eq!(w.position, Offset(100.0));
    }
}
