use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::components::{Actor, GamePhase};
use super::events::{LetterReached, WalkCommand};
use super::walker::{Scene, Walker};

pub fn scene() -> Scene {
    Scene {
        world_width: 1380.0,
        start: 100.0,
        target: 1230.0,
        step_speed: 3.0,
        sprite_count: 6,
        frame_interval: 0.1,
    }
}

/// Headless app with the walker entity and its messages, but no systems.
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GamePhase>();
    app.add_message::<WalkCommand>();
    app.add_message::<LetterReached>();
    let scene = scene();
    app.insert_resource(scene);
    app.world_mut().spawn((Actor, Walker::new(&scene)));
    app
}

pub fn walker(app: &mut App) -> Walker {
    let mut q = app.world_mut().query_filtered::<&Walker, With<Actor>>();
    q.iter(app.world())
        .next()
        .cloned()
        .expect("test app has no actor")
}
