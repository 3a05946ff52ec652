/*!
Motion driver: turns per-tick control input into a desired position and runs
the collision core on it.

The player runs along a fixed forward direction (the track). Control input is
two booleans: keep advancing, and jump. Per tick:

- Run speed eases toward `run_speed` while advancing and decays otherwise.
- A jump starts only from the ground; airborne ticks integrate gravity.
- `desired = position + velocity * dt`, resolved with one
  [`resolve_collisions`] call, and the result is written back into the state.
*/

use serde::{Deserialize, Serialize};

use crate::{
    collision::{CollidableEntry, CollisionResult, CollisionSettings, EntryId, Vec3, resolve_collisions},
    constants::{
        DECELERATION, GRAVITY, JUMP_SPEED, PLAYER_CENTER_OFFSET, PLAYER_SIZE, RUN_SPEED,
        SPEED_SMOOTHING, STOP_SPEED,
    },
};

/// Tunables for the motion driver. Defaults come from [`crate::constants`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    pub gravity: f32,
    pub jump_speed: f32,
    pub run_speed: f32,
    pub speed_smoothing: f32,
    pub deceleration: f32,
    pub stop_speed: f32,
    /// Unit direction the player runs in.
    pub forward: [f32; 3],
    /// Full extents of the player box.
    pub player_size: [f32; 3],
    /// Offset from the player anchor (feet) to the box center.
    pub center_offset: [f32; 3],
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            run_speed: RUN_SPEED,
            speed_smoothing: SPEED_SMOOTHING,
            deceleration: DECELERATION,
            stop_speed: STOP_SPEED,
            forward: [0.0, 0.0, -1.0],
            player_size: PLAYER_SIZE,
            center_offset: PLAYER_CENTER_OFFSET,
        }
    }
}

impl MotionTuning {
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::from(self.forward)
    }
}

/// One tick of control input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub advance: bool,
    pub jump: bool,
}

/// Everything the collision core needs to know about the player between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerKinematicState {
    /// Anchor position (feet).
    pub position: Vec3,
    pub velocity: Vec3,
    pub size: Vec3,
    pub center_offset: Vec3,
    pub is_grounded: bool,
    /// Only valid against the registry entries of the last step.
    pub grounded_on: Option<EntryId>,
}

impl PlayerKinematicState {
    pub fn new(position: Vec3, tuning: &MotionTuning) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            size: Vec3::from(tuning.player_size),
            center_offset: Vec3::from(tuning.center_offset),
            is_grounded: false,
            grounded_on: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlayerController {
    pub state: PlayerKinematicState,
    tuning: MotionTuning,
    /// Current speed along `tuning.forward`.
    run_speed: f32,
}

impl PlayerController {
    pub fn new(spawn: Vec3, tuning: MotionTuning) -> Self {
        Self {
            state: PlayerKinematicState::new(spawn, &tuning),
            tuning,
            run_speed: 0.0,
        }
    }

    #[inline]
    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    #[inline]
    pub fn run_speed(&self) -> f32 {
        self.run_speed
    }

    /// Advance the player by `dt_seconds` against `entries`.
    ///
    /// A player rising away from the surface it just left is kept airborne:
    /// the landing band reaches above platform tops, and without this the
    /// first ticks of every jump would snap back onto the ground.
    pub fn step(
        &mut self,
        input: ControlInput,
        dt_seconds: f32,
        entries: &[CollidableEntry],
        settings: &CollisionSettings,
    ) -> CollisionResult {
        let dt = dt_seconds.max(0.0);
        let t = self.tuning;

        if input.advance {
            self.run_speed = self.run_speed * t.speed_smoothing + t.run_speed * (1.0 - t.speed_smoothing);
        } else {
            self.run_speed *= t.deceleration;
            if self.run_speed.abs() < t.stop_speed {
                self.run_speed = 0.0;
            }
        }

        let planar = t.forward() * self.run_speed;
        let mut velocity = Vec3::new(planar.x, self.state.velocity.y, planar.z);

        let jumped = input.jump && self.state.is_grounded;
        if jumped {
            velocity.y = t.jump_speed;
        } else {
            velocity.y += t.gravity * dt;
        }

        let desired = self.state.position + velocity * dt;
        let mut result = resolve_collisions(
            desired,
            velocity,
            self.state.size,
            self.state.center_offset,
            entries,
            settings,
        );

        // Taking off: the resolver pulled a rising player back down onto a top.
        if velocity.y > 0.0 && result.is_grounded && result.position.y < desired.y {
            result.position.y = desired.y;
            result.velocity.y = velocity.y;
            result.is_grounded = false;
            result.grounded_on = None;
        }

        if result.is_grounded != self.state.is_grounded {
            if result.is_grounded {
                log::debug!(
                    "player landed on {:?} at y={:.3}",
                    result.grounded_on,
                    result.position.y
                );
            } else {
                log::debug!(
                    "player left the ground at y={:.3} (jumped: {})",
                    self.state.position.y,
                    jumped
                );
            }
        }

        self.state.position = result.position;
        self.state.velocity = result.velocity;
        self.state.is_grounded = result.is_grounded;
        self.state.grounded_on = result.grounded_on;
        result
    }
}
