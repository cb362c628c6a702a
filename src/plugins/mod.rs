pub mod controls_plugin;
pub mod game_plugin;
pub mod ui_plugin;
