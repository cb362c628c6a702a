use bevy::prelude::*;

use crate::game::components::GamePhase;
use crate::game::events::WalkCommand;
use crate::plugins::controls_plugin::{COLOR_BTN, COLOR_BTN_HOVER, COLOR_BTN_PRESS, COLOR_TEXT};
use crate::plugins::game_plugin::WalkSet;

const HINT: &str = "Hold < or > (or the arrow keys) to walk to the letter. Enter or Space plays again.";

const COLOR_CARD: Color = Color::WHITE;
const COLOR_CARD_TEXT: Color = Color::srgb(0.1, 0.1, 0.12);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hint);
        app.add_systems(OnEnter(GamePhase::Reached), spawn_reached_overlay);
        app.add_systems(OnExit(GamePhase::Reached), despawn::<ReachedOverlay>);
        app.add_systems(
            Update,
            play_again_button_system
                .run_if(in_state(GamePhase::Reached))
                .in_set(WalkSet::Input),
        );
    }
}

#[derive(Component)]
struct HintText;

#[derive(Component)]
struct ReachedOverlay;

#[derive(Component)]
struct PlayAgainButton;

fn despawn<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

fn setup_hint(mut commands: Commands) {
    commands.spawn((
        HintText,
        Text::new(HINT),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

fn spawn_reached_overlay(mut commands: Commands) {
    commands
        .spawn((
            ReachedOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(16.0),
                        padding: UiRect::all(Val::Px(32.0)),
                        border_radius: BorderRadius::all(Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(COLOR_CARD),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("You found the letter!"),
                        TextFont { font_size: 32.0, ..default() },
                        TextColor(COLOR_CARD_TEXT),
                    ));
                    card.spawn((
                        Text::new("Congratulations on completing the level!"),
                        TextFont { font_size: 20.0, ..default() },
                        TextColor(COLOR_CARD_TEXT),
                    ));
                    card.spawn((
                        PlayAgainButton,
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border_radius: BorderRadius::all(Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(COLOR_BTN),
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("Play again"),
                            TextFont { font_size: 20.0, ..default() },
                            TextColor(COLOR_TEXT),
                        ));
                    });
                });
        });
}

fn play_again_button_system(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<PlayAgainButton>)>,
    mut commands: MessageWriter<WalkCommand>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(COLOR_BTN_PRESS);
                commands.write(WalkCommand::PlayAgain);
            }
            Interaction::Hovered => *bg = BackgroundColor(COLOR_BTN_HOVER),
            Interaction::None => *bg = BackgroundColor(COLOR_BTN),
        }
    }
}
