use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::game::components::GamePhase;
use crate::game::events::WalkCommand;
use crate::game::types::Facing;
use crate::plugins::game_plugin::WalkSet;

// ── Colors ───────────────────────────────────────────────────────────

pub const COLOR_BTN: Color = Color::srgba(0.23, 0.51, 0.96, 1.0);
pub const COLOR_BTN_HOVER: Color = Color::srgba(0.15, 0.39, 0.92, 1.0);
pub const COLOR_BTN_PRESS: Color = Color::srgba(0.11, 0.31, 0.85, 1.0);
pub const COLOR_TEXT: Color = Color::WHITE;

/// On-screen direction button. `held` tracks whether this button started the current walk.
#[derive(Component)]
pub struct ControlButton {
    pub facing: Facing,
    pub held: bool,
}

#[derive(Component)]
struct ControlsRoot;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_controls);
        app.add_systems(
            Update,
            (control_button_system, release_on_pointer_leave)
                .chain()
                .run_if(in_state(GamePhase::Walking))
                .in_set(WalkSet::Input),
        );
        app.add_systems(OnEnter(GamePhase::Reached), release_all_buttons);
    }
}

/// Press/hold/release semantics for one button.
///
/// Returns the new held flag and the command to emit. Dragging off a held
/// button keeps it `Pressed` in bevy_ui, so that case is handled by
/// [`release_on_pointer_leave`] instead.
pub fn button_transition(held: bool, interaction: Interaction, facing: Facing) -> (bool, Option<WalkCommand>) {
    match (held, interaction) {
        (false, Interaction::Pressed) => (true, Some(WalkCommand::Press(facing))),
        (true, Interaction::Hovered | Interaction::None) => (false, Some(WalkCommand::Release)),
        (held, _) => (held, None),
    }
}

fn spawn_controls(mut commands: Commands) {
    commands
        .spawn((
            ControlsRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                bottom: Val::Px(16.0),
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(32.0),
                ..default()
            },
            GlobalZIndex(5),
        ))
        .with_children(|parent| {
            spawn_control_btn(parent, "<", Facing::Left);
            spawn_control_btn(parent, ">", Facing::Right);
        });
}

fn spawn_control_btn(parent: &mut ChildSpawnerCommands, label: &str, facing: Facing) {
    parent
        .spawn((
            ControlButton { facing, held: false },
            Button,
            RelativeCursorPosition::default(),
            Node {
                width: Val::Px(64.0),
                height: Val::Px(64.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_radius: BorderRadius::all(Val::Px(32.0)),
                ..default()
            },
            BackgroundColor(COLOR_BTN),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont { font_size: 32.0, ..default() },
                TextColor(COLOR_TEXT),
            ));
        });
}

fn control_button_system(
    mut q: Query<(&Interaction, &mut ControlButton, &mut BackgroundColor), Changed<Interaction>>,
    mut commands: MessageWriter<WalkCommand>,
) {
    for (interaction, mut button, mut bg) in &mut q {
        let (held, command) = button_transition(button.held, *interaction, button.facing);
        button.held = held;
        if let Some(command) = command {
            commands.write(command);
        }
        *bg = BackgroundColor(match *interaction {
            Interaction::Pressed => COLOR_BTN_PRESS,
            Interaction::Hovered => COLOR_BTN_HOVER,
            Interaction::None => COLOR_BTN,
        });
    }
}

/// Stop walking once the pointer leaves a held button, without waiting for mouse-up.
fn release_on_pointer_leave(
    mut q: Query<(&RelativeCursorPosition, &mut ControlButton, &mut BackgroundColor)>,
    mut commands: MessageWriter<WalkCommand>,
) {
    for (cursor, mut button, mut bg) in &mut q {
        if button.held && !cursor.cursor_over() {
            button.held = false;
            commands.write(WalkCommand::Release);
            *bg = BackgroundColor(COLOR_BTN);
        }
    }
}

/// The overlay swallows the pointer-up, so drop any hold on arrival.
fn release_all_buttons(mut q: Query<(&mut ControlButton, &mut BackgroundColor)>) {
    for (mut button, mut bg) in &mut q {
        button.held = false;
        *bg = BackgroundColor(COLOR_BTN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::intent::apply_walk_commands;
    use crate::game::test_support::{test_app, walker};

    #[test]
    fn press_then_release_on_button() {
        let (held, cmd) = button_transition(false, Interaction::Pressed, Facing::Left);
        assert!(held);
        assert_eq!(cmd, Some(WalkCommand::Press(Facing::Left)));

        let (held, cmd) = button_transition(held, Interaction::Hovered, Facing::Left);
        assert!(!held);
        assert_eq!(cmd, Some(WalkCommand::Release));
    }

    #[test]
    fn mouse_up_outside_while_held_releases() {
        let (held, cmd) = button_transition(true, Interaction::None, Facing::Right);
        assert!(!held);
        assert_eq!(cmd, Some(WalkCommand::Release));
    }

    #[test]
    fn hover_without_press_is_silent() {
        assert_eq!(button_transition(false, Interaction::Hovered, Facing::Right), (false, None));
        assert_eq!(button_transition(false, Interaction::None, Facing::Right), (false, None));
        assert_eq!(button_transition(true, Interaction::Pressed, Facing::Right), (true, None));
    }

    fn spawn_held_button(app: &mut App, facing: Facing) -> Entity {
        app.world_mut()
            .spawn((
                ControlButton { facing, held: true },
                // Bevy leaves a dragged-off button in `Pressed`.
                Interaction::Pressed,
                RelativeCursorPosition::default(),
                BackgroundColor(COLOR_BTN_PRESS),
            ))
            .id()
    }

    #[test]
    fn dragging_off_a_held_button_stops_the_walk() {
        let mut app = test_app();
        app.add_systems(Update, (release_on_pointer_leave, apply_walk_commands).chain());
        app.update();

        app.world_mut().write_message(WalkCommand::Press(Facing::Left));
        app.update();
        assert!(walker(&mut app).moving);

        let button = spawn_held_button(&mut app, Facing::Left);
        app.update();

        assert!(!walker(&mut app).moving);
        let entity = app.world().entity(button);
        assert!(!entity.get::<ControlButton>().unwrap().held);
        assert_eq!(entity.get::<BackgroundColor>().unwrap().0, COLOR_BTN);
    }

    #[test]
    fn pointer_outside_an_idle_button_sends_nothing() {
        let mut app = test_app();
        app.add_systems(Update, (release_on_pointer_leave, apply_walk_commands).chain());
        app.update();

        app.world_mut().write_message(WalkCommand::Press(Facing::Right));
        app.world_mut().spawn((
            ControlButton { facing: Facing::Left, held: false },
            Interaction::None,
            RelativeCursorPosition::default(),
            BackgroundColor(COLOR_BTN),
        ));
        app.update();
        app.update();

        // The keyboard-started walk is not cancelled by an untouched button.
        assert!(walker(&mut app).moving);
    }
}
