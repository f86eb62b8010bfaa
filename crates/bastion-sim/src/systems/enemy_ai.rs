//! Enemy AI system: evaluates pursuit for every live enemy and applies
//! the result, queuing hostile bolts for the shots it takes.

use bastion_core::constants::{ENEMY_BOLT_DAMAGE, ENEMY_BOLT_LIFE, ENEMY_BOLT_SPEED};
use bastion_core::entities::Projectile;
use bastion_core::enums::{Faction, ProjectileKind};
use bastion_core::types::wrap_angle;

use bastion_ai::pursuit::{evaluate, PursuitContext};

use crate::session::Session;

/// Run the pursuit evaluation for each enemy, in store order.
pub fn run(session: &mut Session) {
    let target = session.player.position;

    for enemy in &mut session.enemies {
        let update = evaluate(&PursuitContext {
            archetype: enemy.archetype,
            position: enemy.position,
            angle: enemy.angle,
            fire_cooldown: enemy.fire_cooldown,
            target,
        });

        enemy.angle = wrap_angle(update.new_angle);
        enemy.position = update.new_position;
        enemy.fire_cooldown = update.new_fire_cooldown;

        if let Some(order) = update.fire {
            session.phasers.push(Projectile {
                kind: ProjectileKind::Phaser,
                position: order.origin,
                angle: order.angle,
                speed: ENEMY_BOLT_SPEED,
                life: ENEMY_BOLT_LIFE,
                damage: ENEMY_BOLT_DAMAGE,
                faction: Faction::Hostile,
            });
        }
    }
}
