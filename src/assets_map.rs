use bevy::prelude::*;
use std::path::Path;

use crate::game::types::SpriteFrame;

const ASSET_ROOT: &str = "assets";

/// Which picture a sprite should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSlot {
    Run(SpriteFrame),
    Stand,
    Background,
    Letter,
}

/// Image handles for every sprite, or `None` where the file is missing and a
/// flat placeholder colour is drawn instead.
#[derive(Resource, Default)]
pub struct AssetsMap {
    pub run: Vec<Option<Handle<Image>>>,
    pub stand: Option<Handle<Image>>,
    pub background: Option<Handle<Image>>,
    pub letter: Option<Handle<Image>>,
}

impl AssetsMap {
    pub fn run_path(frame: usize) -> String {
        format!("sprites/run{}.png", frame + 1)
    }

    /// Start loading every sprite up front so frame switches never wait on IO.
    pub fn preload(asset_server: &AssetServer, sprite_count: u8) -> Self {
        let run = (0..sprite_count as usize)
            .map(|i| load_if_present(asset_server, &Self::run_path(i)))
            .collect();
        Self {
            run,
            stand: load_if_present(asset_server, "sprites/stand.png"),
            background: load_if_present(asset_server, "sprites/background.png"),
            letter: load_if_present(asset_server, "sprites/letter.png"),
        }
    }

    pub fn handle(&self, slot: SpriteSlot) -> Option<&Handle<Image>> {
        match slot {
            SpriteSlot::Run(frame) => self.run.get(frame.index()).and_then(Option::as_ref),
            SpriteSlot::Stand => self.stand.as_ref(),
            SpriteSlot::Background => self.background.as_ref(),
            SpriteSlot::Letter => self.letter.as_ref(),
        }
    }

    /// Point `sprite` at the image for `slot`, or tint it with the placeholder colour.
    pub fn apply(&self, sprite: &mut Sprite, slot: SpriteSlot) {
        match self.handle(slot) {
            Some(handle) => {
                sprite.image = handle.clone();
                sprite.color = Color::WHITE;
            }
            None => {
                sprite.image = Handle::default();
                sprite.color = placeholder_color(slot);
            }
        }
    }

    pub fn sprite(&self, slot: SpriteSlot, size: Vec2) -> Sprite {
        let mut sprite = Sprite {
            custom_size: Some(size),
            ..default()
        };
        self.apply(&mut sprite, slot);
        sprite
    }
}

fn load_if_present(asset_server: &AssetServer, path: &str) -> Option<Handle<Image>> {
    if Path::new(ASSET_ROOT).join(path).exists() {
        Some(asset_server.load(path.to_string()))
    } else {
        warn!("Missing sprite {path}, drawing placeholder");
        None
    }
}

pub fn placeholder_color(slot: SpriteSlot) -> Color {
    match slot {
        // Alternate shades so the run cycle stays visible without art.
        SpriteSlot::Run(frame) => {
            let shade = if frame.0 % 2 == 0 { 0.85 } else { 0.65 };
            Color::srgb(shade, 0.45, 0.2)
        }
        SpriteSlot::Stand => Color::srgb(0.9, 0.6, 0.3),
        SpriteSlot::Background => Color::srgb(0.18, 0.32, 0.22),
        SpriteSlot::Letter => Color::srgb(1.0, 0.95, 0.75),
    }
}
