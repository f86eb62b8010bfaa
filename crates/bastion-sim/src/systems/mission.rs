//! Mission director system: pays wave rewards and launches new waves.

use log::{debug, info};
use rand_chacha::ChaCha8Rng;

use bastion_core::events::GameEvent;

use crate::session::Session;
use crate::world_setup::spawn_enemy_group;

/// Advance mission progression by one tick.
///
/// Order matters: the idle timer moves first, then a due reward is paid,
/// then a due wave launches.
pub fn run(session: &mut Session, rng: &mut ChaCha8Rng) {
    let field_empty = session.enemies.is_empty();
    session.director.observe(field_empty);

    if !field_empty {
        return;
    }

    if let Some(cleared) = session.director.take_reward() {
        let phase = session.director.phase;
        session.score += cleared.reward;
        session.narrate(format!("> Mission accomplished! +{} pts", cleared.reward));
        session.emit(GameEvent::WaveCleared {
            phase,
            reward: cleared.reward,
        });
        info!("mission {phase} '{}' cleared, +{}", cleared.name, cleared.reward);
    }

    if session.director.wave_due() {
        launch_wave(session, rng);
    }
}

/// Spawn the next mission's wave around the player.
pub fn launch_wave(session: &mut Session, rng: &mut ChaCha8Rng) {
    let mission = session.director.launch();
    let phase = session.director.phase;
    let anchor = session.player.position;

    session.narrate(format!("> MISSION: {}", mission.name));
    session.narrate(format!("> {}", mission.description));

    for &(archetype, count) in mission.groups {
        spawn_enemy_group(&mut session.enemies, rng, archetype, count, anchor);
        debug!("spawned {count} x {archetype:?} for mission {phase}");
    }

    session.emit(GameEvent::WaveLaunched {
        phase,
        enemies: mission.enemy_count(),
    });
    info!("mission {phase} '{}' launched", mission.name);
}
