mod assets_map;
mod config;
mod game;
mod plugins;

use bevy::prelude::*;

use config::tuning::Tuning;
use plugins::{controls_plugin::ControlsPlugin, game_plugin::GamePlugin, ui_plugin::UiPlugin};

fn main() {
    let tuning = Tuning::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Letter Walk".into(),
                resolution: (960u32, 540u32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.07, 0.09, 0.15)))
        .insert_resource(Time::<Fixed>::from_seconds(tuning.dt as f64))
        .insert_resource(tuning.scene())
        .insert_resource(tuning)
        .add_plugins(GamePlugin)
        .add_plugins(ControlsPlugin)
        .add_plugins(UiPlugin)
        .run();
}
