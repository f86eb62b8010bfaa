//! Mission table and the director state that walks it.
//!
//! Missions repeat cyclically: after the last one the first is flown again.

use serde::{Deserialize, Serialize};

use bastion_core::enums::{EnemyArchetype, RewardTrigger};

/// One wave definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Enemies to spawn: (archetype, count).
    pub groups: &'static [(EnemyArchetype, u32)],
    /// Score paid once the wave is cleared.
    pub reward: u64,
}

impl MissionDefinition {
    /// Total number of enemies in the wave.
    pub fn enemy_count(&self) -> u32 {
        self.groups.iter().map(|(_, count)| count).sum()
    }
}

/// Built-in mission cycle with escalating difficulty.
pub const MISSIONS: [MissionDefinition; 5] = [
    MissionDefinition {
        name: "Station Patrol",
        description: "Defend the station against raiders",
        groups: &[(EnemyArchetype::Raider, 3)],
        reward: 200,
    },
    MissionDefinition {
        name: "Cruiser Threat",
        description: "A cruiser squadron is inbound!",
        groups: &[(EnemyArchetype::Cruiser, 4)],
        reward: 300,
    },
    MissionDefinition {
        name: "Marauder Raid",
        description: "Marauders have come through the wormhole!",
        groups: &[(EnemyArchetype::Marauder, 3), (EnemyArchetype::Raider, 2)],
        reward: 500,
    },
    MissionDefinition {
        name: "Dreadnought Incursion",
        description: "A dreadnought has been detected! All hands to battle stations!",
        groups: &[(EnemyArchetype::Dreadnought, 1), (EnemyArchetype::Raider, 3)],
        reward: 800,
    },
    MissionDefinition {
        name: "Full Assault",
        description: "The enemy fleet launches a massive attack!",
        groups: &[
            (EnemyArchetype::Raider, 5),
            (EnemyArchetype::Cruiser, 3),
            (EnemyArchetype::Marauder, 2),
        ],
        reward: 1000,
    },
];

/// Mission flown at a given phase.
pub fn mission_for_phase(phase: u32) -> &'static MissionDefinition {
    &MISSIONS[phase as usize % MISSIONS.len()]
}

/// Progression state: how many waves have launched and how long the
/// field has been empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDirector {
    /// Waves launched so far.
    pub phase: u32,
    /// Ticks since the enemy store last became empty; 0 while a wave is live.
    pub idle_timer: u32,
    /// Set on launch, consumed when the wave's reward is paid.
    pub wave_active: bool,
    pub reward_trigger: RewardTrigger,
}

impl MissionDirector {
    pub fn new(reward_trigger: RewardTrigger) -> Self {
        Self {
            phase: 0,
            idle_timer: 0,
            wave_active: false,
            reward_trigger,
        }
    }

    /// Mission most recently launched, if any.
    pub fn current(&self) -> Option<&'static MissionDefinition> {
        self.phase.checked_sub(1).map(mission_for_phase)
    }

    /// Mission that launches next.
    pub fn next(&self) -> &'static MissionDefinition {
        mission_for_phase(self.phase)
    }

    /// Advance the idle timer for this tick.
    pub fn observe(&mut self, field_empty: bool) {
        if field_empty {
            self.idle_timer = self.idle_timer.saturating_add(1);
        } else {
            self.idle_timer = 0;
        }
    }

    /// Returns the cleared mission when its reward is due this tick.
    /// Only meaningful while the field is empty.
    pub fn take_reward(&mut self) -> Option<&'static MissionDefinition> {
        let due = match self.reward_trigger {
            RewardTrigger::ExactIdleTick => self.idle_timer == 1 && self.phase > 0,
            RewardTrigger::ClearEdge => self.wave_active,
        };
        if !due {
            return None;
        }
        self.wave_active = false;
        self.current()
    }

    pub fn wave_due(&self) -> bool {
        self.idle_timer > bastion_core::constants::WAVE_IDLE_TICKS
    }

    /// Record a launch and return the mission being launched.
    pub fn launch(&mut self) -> &'static MissionDefinition {
        let mission = self.next();
        self.idle_timer = 0;
        self.phase += 1;
        self.wave_active = true;
        mission
    }
}
