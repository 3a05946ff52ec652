pub mod collision;
pub mod config;
pub mod constants;
pub mod level;
pub mod motion;

pub use collision::{
    Aabb, CollidableEntry, CollidableRegistry, CollisionResult, CollisionSettings, EntryId,
    EntrySource, GroundContact, RegistrySettings, Vec3, check_grounded, resolve_collisions,
};
pub use config::{Config, ConfigError};
pub use constants::{GRAVITY, JUMP_SPEED, RUN_SPEED};
pub use level::{
    BossGate, GroundSegment, LevelContent, MoveDirection, MovingPlatforms, Obstacle, ObstacleKind,
    Platform, PlatformKind, Target, TargetKind,
};
pub use motion::{ControlInput, MotionTuning, PlayerController, PlayerKinematicState};
