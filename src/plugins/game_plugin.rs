use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::assets_map::{AssetsMap, SpriteSlot};
use crate::config::tuning::Tuning;
use crate::game::{
    components::*,
    events::{LetterReached, WalkCommand},
    intent,
    layout::{SceneLayout, letter_bob},
    physics,
    walker::{Scene, Walker},
};

const Z_BACKGROUND: f32 = 0.0;
const Z_LETTER: f32 = 1.0;
const Z_ACTOR: f32 = 2.0;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WalkSet {
    /// Turn raw input into [`WalkCommand`]s.
    Input,
    /// Apply commands to the walker.
    Apply,
    /// Move sprites to match the walker.
    Render,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<WalkCommand>();
        app.add_message::<LetterReached>();
        app.init_state::<GamePhase>();

        app.configure_sets(Update, (WalkSet::Input, WalkSet::Apply, WalkSet::Render).chain());

        // ── Startup ─────────────────────────────────────────────────────
        app.add_systems(Startup, setup_scene);

        // ── Fixed step (walking only) ───────────────────────────────────
        app.add_systems(
            FixedUpdate,
            physics::advance_walker.run_if(in_state(GamePhase::Walking)),
        );

        // ── Input ───────────────────────────────────────────────────────
        app.add_systems(
            Update,
            intent::read_walk_keys
                .run_if(in_state(GamePhase::Walking))
                .in_set(WalkSet::Input),
        );
        app.add_systems(
            Update,
            intent::read_play_again_keys
                .run_if(in_state(GamePhase::Reached))
                .in_set(WalkSet::Input),
        );
        app.add_systems(
            Update,
            (intent::apply_walk_commands, physics::enter_reached_phase)
                .chain()
                .in_set(WalkSet::Apply),
        );

        // ── Visuals ─────────────────────────────────────────────────────
        app.add_systems(
            Update,
            (sync_scroll, sync_actor_sprite, bob_letter).in_set(WalkSet::Render),
        );

        // ── Always-on ───────────────────────────────────────────────────
        app.add_systems(Update, (tuning_reload_input, apply_tuning_change).chain());
    }
}

// ── Startup ─────────────────────────────────────────────────────────

fn setup_scene(
    mut commands: Commands,
    tuning: Res<Tuning>,
    scene: Res<Scene>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn(Camera2d);

    let assets = AssetsMap::preload(&asset_server, scene.sprite_count);

    commands.spawn((
        Background,
        assets.sprite(SpriteSlot::Background, Vec2::new(scene.world_width, 1.0)),
        Transform::from_translation(Vec3::new(0.0, 0.0, Z_BACKGROUND)),
    ));

    commands.spawn((
        Letter,
        assets.sprite(SpriteSlot::Letter, Vec2::splat(tuning.letter_size)),
        Transform::from_translation(Vec3::new(0.0, 0.0, Z_LETTER)),
    ));

    commands.spawn((
        Actor,
        Walker::new(&scene),
        assets.sprite(SpriteSlot::Stand, Vec2::splat(tuning.actor_size)),
        Transform::from_translation(Vec3::new(0.0, 0.0, Z_ACTOR)),
    ));

    commands.insert_resource(assets);
    info!(
        "Scene ready: start {} target {} width {}",
        scene.start, scene.target, scene.world_width
    );
}

// ── Visual sync ─────────────────────────────────────────────────────

/// Centre x in world space for a sprite whose left edge sits `left` px from the view's left edge.
fn view_to_world_x(left: f32, width: f32, view_width: f32) -> f32 {
    -view_width * 0.5 + left + width * 0.5
}

/// Centre y in world space for a sprite standing on the ground line.
fn ground_y(height: f32, view_height: f32, ground_ratio: f32) -> f32 {
    -view_height * 0.5 + view_height * ground_ratio + height * 0.5
}

/// Scroll the background and letter under the pinned actor.
fn sync_scroll(
    tuning: Res<Tuning>,
    scene: Res<Scene>,
    windows: Query<&Window, With<PrimaryWindow>>,
    walkers: Query<&Walker, With<Actor>>,
    mut actors: Query<&mut Transform, (With<Actor>, Without<Background>, Without<Letter>)>,
    mut backgrounds: Query<(&mut Transform, &mut Sprite), (With<Background>, Without<Letter>)>,
    mut letters: Query<&mut Transform, (With<Letter>, Without<Background>)>,
) {
    let Ok(window) = windows.single() else { return; };
    let Some(walker) = walkers.iter().next() else { return; };
    let (w, h) = (window.width(), window.height());
    let layout = SceneLayout::at(walker.position, &scene);

    for mut tf in &mut actors {
        tf.translation.x = view_to_world_x(layout.actor_x, tuning.actor_size, w);
        tf.translation.y = ground_y(tuning.actor_size, h, tuning.ground_ratio);
    }
    for (mut tf, mut sprite) in &mut backgrounds {
        sprite.custom_size = Some(Vec2::new(scene.world_width, h));
        tf.translation.x = view_to_world_x(layout.background_x, scene.world_width, w);
        tf.translation.y = 0.0;
    }
    for mut tf in &mut letters {
        tf.translation.x = view_to_world_x(layout.letter_x, tuning.letter_size, w);
    }
}

/// Show the run frame while walking, the standing pose otherwise, mirrored when facing left.
fn sync_actor_sprite(
    assets: Option<Res<AssetsMap>>,
    mut query: Query<(&Walker, &mut Sprite), (With<Actor>, Changed<Walker>)>,
) {
    let Some(assets) = assets else { return; };
    for (walker, mut sprite) in &mut query {
        let slot = if walker.is_standing() {
            SpriteSlot::Stand
        } else {
            SpriteSlot::Run(walker.frame)
        };
        assets.apply(&mut sprite, slot);
        sprite.flip_x = walker.facing.flipped_sprite();
    }
}

fn bob_letter(
    time: Res<Time>,
    tuning: Res<Tuning>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut letters: Query<&mut Transform, With<Letter>>,
) {
    let Ok(window) = windows.single() else { return; };
    let base = ground_y(tuning.letter_size, window.height(), tuning.ground_ratio);
    let lift = letter_bob(time.elapsed_secs(), tuning.letter_bob_px, tuning.letter_bob_period);
    for mut tf in &mut letters {
        tf.translation.y = base + lift;
    }
}

// ── Always-on ───────────────────────────────────────────────────────

/// Reload tuning with F5.
fn tuning_reload_input(keyboard: Res<ButtonInput<KeyCode>>, mut tuning: ResMut<Tuning>) {
    if keyboard.just_pressed(KeyCode::F5) {
        tuning.reload();
    }
}

/// Restart the run on the scene described by a changed tuning.
fn apply_tuning_change(
    tuning: Res<Tuning>,
    mut scene: ResMut<Scene>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut walkers: Query<&mut Walker, With<Actor>>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    if !tuning.is_changed() || tuning.is_added() {
        return;
    }
    *scene = tuning.scene();
    fixed_time.set_timestep_seconds(tuning.dt as f64);
    for mut walker in &mut walkers {
        *walker = Walker::new(&scene);
    }
    next_state.set(GamePhase::Walking);
}
