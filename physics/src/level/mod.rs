//! Level content consumed by the collision registry.
//!
//! These types describe the geometry a level generator hands to the physics
//! core. They carry only what collision needs; decorative content (minerals,
//! bones, crystals, checkpoints) stays with the generator and renderer.
//!
//! # Conventions
//! - Positions are world units, Y up, the track runs along Z.
//! - Platforms, obstacles and targets are placed by their X/Z footprint center
//!   and their bottom Y.
//! - A pit's `height` is its length along the track and its `depth` is how far
//!   it sinks below the ground. That is how the generator lays pits out, and it
//!   is what decides whether the pit cuts a gap into the ground.
//!
//! Content changes (target shot, gate unlocked, platform moved) are applied
//! here, then the registry is rebuilt from scratch.

pub mod moving;

pub use moving::MovingPlatforms;

use serde::{Deserialize, Serialize};

/// A strip of walkable ground centered on `(x, z)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundSegment {
    #[serde(default)]
    pub x: f32,
    pub z: f32,
    /// Extent along Z.
    pub length: f32,
    /// Extent along X.
    pub width: f32,
    /// Thickness of the solid rock layer under the walkable top.
    pub rock_layer_height: f32,
}

impl GroundSegment {
    /// `(start, end)` of the segment along Z.
    #[inline]
    pub fn z_span(&self) -> (f32, f32) {
        (self.z - self.length * 0.5, self.z + self.length * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    /// Sign applied to the sinusoidal offset along X.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            MoveDirection::Left => -1.0,
            MoveDirection::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Static,
    /// Oscillates along X: `x = start + sin(phase) * distance * direction.sign()`.
    Moving {
        direction: MoveDirection,
        distance: f32,
        speed: f32,
    },
    Crumbling,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    #[serde(default)]
    pub kind: PlatformKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// A gap in the track. Never solid.
    Pit,
    Warning,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    #[inline]
    pub fn is_pit(&self) -> bool {
        self.kind == ObstacleKind::Pit
    }

    /// `(start, end)` along Z of the gap a pit leaves in the ground.
    #[inline]
    pub fn pit_span(&self) -> (f32, f32) {
        (self.z - self.height * 0.5, self.z + self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Lantern,
    Idol,
    CrystalCluster,
}

impl TargetKind {
    /// Fixed collision footprint `(width, height, depth)` for this kind.
    #[inline]
    pub fn footprint(self) -> (f32, f32, f32) {
        match self {
            TargetKind::Lantern => (0.4, 0.6, 0.4),
            TargetKind::Idol => (0.3, 0.6, 0.3),
            TargetKind::CrystalCluster => (0.4, 0.4, 0.4),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub kind: TargetKind,
    /// Shot targets are gone and no longer collide.
    #[serde(default)]
    pub shot: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BossGate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub required_crystals: u32,
}

impl BossGate {
    /// Whether the gate is (or should now be) open after collecting `collected` crystals.
    #[inline]
    pub fn is_unlocked(&self, collected: u32) -> bool {
        self.open || collected >= self.required_crystals
    }
}

/// Everything the registry needs to build a level's collidables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelContent {
    pub ground: Vec<GroundSegment>,
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub targets: Vec<Target>,
    pub boss_gate: Option<BossGate>,
}

impl LevelContent {
    /// Mark the target with `id` as shot.
    ///
    /// Returns `true` if a live target changed state (callers rebuild the registry then).
    pub fn mark_target_shot(&mut self, id: u32) -> bool {
        match self.targets.iter_mut().find(|t| t.id == id) {
            Some(target) if !target.shot => {
                target.shot = true;
                true
            }
            _ => false,
        }
    }

    /// Open the boss gate if `collected` crystals satisfy its requirement.
    ///
    /// Returns `true` if the gate just opened.
    pub fn unlock_gate(&mut self, collected: u32) -> bool {
        match self.boss_gate.as_mut() {
            Some(gate) if !gate.open && gate.is_unlocked(collected) => {
                gate.open = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lantern(id: u32) -> Target {
        Target {
            id,
            x: 0.0,
            y: 0.2,
            z: -5.0,
            kind: TargetKind::Lantern,
            shot: false,
        }
    }

    #[test]
    fn shooting_a_target_reports_change_once() {
        let mut level = LevelContent {
            targets: vec![lantern(1), lantern(2)],
            ..Default::default()
        };
        assert!(level.mark_target_shot(2));
        assert!(!level.mark_target_shot(2));
        assert!(!level.mark_target_shot(99));
        assert!(!level.targets[0].shot);
        assert!(level.targets[1].shot);
    }

    #[test]
    fn gate_unlocks_once_enough_crystals_are_collected() {
        let mut level = LevelContent {
            boss_gate: Some(BossGate {
                x: 0.0,
                y: 2.0,
                z: -80.0,
                open: false,
                required_crystals: 3,
            }),
            ..Default::default()
        };
        assert!(!level.unlock_gate(2));
        assert!(level.unlock_gate(3));
        assert!(!level.unlock_gate(5));
        assert!(level.boss_gate.is_some_and(|g| g.open));
    }

    #[test]
    fn pit_span_uses_track_length() {
        let pit = Obstacle {
            x: 0.0,
            y: 0.0,
            z: 2.5,
            width: 4.0,
            height: 1.0,
            depth: 0.15,
            kind: ObstacleKind::Pit,
        };
        assert!(pit.is_pit());
        assert_eq!(pit.pit_span(), (2.0, 3.0));
    }

    #[test]
    fn level_parses_from_ron() {
        let src = r#"(
            ground: [(z: 0.0, length: 20.0, width: 4.0, rock_layer_height: 0.2)],
            platforms: [
                (x: 0.0, y: 1.0, z: -6.0, width: 2.0, height: 0.3, depth: 2.0),
                (x: 0.0, y: 1.5, z: -9.0, width: 2.0, height: 0.3, depth: 2.0,
                 kind: Moving(direction: Left, distance: 1.5, speed: 2.0)),
            ],
            obstacles: [(x: 0.0, y: 0.0, z: 2.5, width: 4.0, height: 1.0, depth: 0.15, kind: Pit)],
            targets: [(id: 7, x: 1.0, y: 0.2, z: -4.0, kind: Idol)],
            boss_gate: Some((x: 0.0, y: 2.0, z: -18.0, required_crystals: 2)),
        )"#;

        let level: LevelContent = ron::from_str(src).expect("level should parse");
        assert_eq!(level.ground.len(), 1);
        assert_eq!(level.platforms[0].kind, PlatformKind::Static);
        assert_eq!(
            level.platforms[1].kind,
            PlatformKind::Moving {
                direction: MoveDirection::Left,
                distance: 1.5,
                speed: 2.0,
            }
        );
        assert!(level.obstacles[0].is_pit());
        assert!(!level.targets[0].shot);
        assert!(level.boss_gate.is_some_and(|g| !g.open && g.required_crystals == 2));
    }
}
