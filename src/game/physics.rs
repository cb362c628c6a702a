use bevy::prelude::*;

use super::components::{Actor, GamePhase};
use super::events::LetterReached;
use super::walker::{Scene, StepOutcome, Walker};

/// Fixed-step integration: move the walker and detect arrival at the letter.
pub fn advance_walker(
    time: Res<Time>,
    scene: Res<Scene>,
    mut query: Query<&mut Walker, With<Actor>>,
    mut reached: MessageWriter<LetterReached>,
) {
    let dt = time.delta_secs();
    for mut walker in &mut query {
        if walker.is_standing() {
            continue;
        }
        if walker.step(dt, &scene) == StepOutcome::Reached {
            reached.write(LetterReached {
                position: walker.position,
            });
        }
    }
}

/// Switch to the completion phase once the letter is reached.
pub fn enter_reached_phase(
    mut reached: MessageReader<LetterReached>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    if let Some(event) = reached.read().last() {
        info!("Letter reached at offset {}", event.position.0);
        next_state.set(GamePhase::Reached);
    }
}
