//! State shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use space_shooter_core::commands::PlayerCommand;
use space_shooter_core::input::AxisInput;
use space_shooter_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Replace the held axis input. Disables the autopilot.
    SetInput(AxisInput),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop.
///
/// `mpsc::Sender` is not `Sync`, so the handle stays with one owner; the
/// snapshot slot is shared with the loop thread.
pub struct GameLoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot, updated by the game loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub thread: JoinHandle<LoopStats>,
}

impl GameLoopHandle {
    /// Forward a command. Returns false if the loop has already stopped.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    /// Copy of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}

/// Running totals collected by the game loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopStats {
    pub ticks: u64,
    pub shots_fired: u32,
    pub projectile_impacts: u32,
    pub sounds_played: u32,
}

impl LoopStats {
    /// Fold one snapshot's events into the totals.
    pub fn record(&mut self, snapshot: &GameStateSnapshot) {
        use space_shooter_core::events::GameEvent;

        self.ticks += 1;
        for event in &snapshot.events {
            match event {
                GameEvent::ShotFired { .. } => self.shots_fired += 1,
                GameEvent::ProjectileImpact { .. } => self.projectile_impacts += 1,
                _ => {}
            }
        }
        self.sounds_played += snapshot.audio_events.len() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_shooter_core::events::{AudioEvent, GameEvent};
    use space_shooter_core::types::{AssetHandle, Rotator};

    #[test]
    fn test_stats_count_events() {
        let mut stats = LoopStats::default();
        let snapshot = GameStateSnapshot {
            events: vec![
                GameEvent::ShotFired {
                    location: glam::DVec3::ZERO,
                    rotation: Rotator::ZERO,
                },
                GameEvent::WeaponReady,
                GameEvent::ProjectileImpact {
                    location: glam::DVec3::X,
                },
            ],
            audio_events: vec![AudioEvent::PlaySound {
                sound: AssetHandle::new("audio/test"),
                location: glam::DVec3::ZERO,
            }],
            ..Default::default()
        };
        stats.record(&snapshot);
        stats.record(&GameStateSnapshot::default());

        assert_eq!(stats.ticks, 2);
        assert_eq!(stats.shots_fired, 1);
        assert_eq!(stats.projectile_impacts, 1);
        assert_eq!(stats.sounds_played, 1);
    }
}
