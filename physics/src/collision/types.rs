/*!
Core collision types and math aliases shared by the collision submodules.

This module contains no algorithms. It defines the data exchanged between
the registry, the grounding check, both resolver passes and the orchestrator.

Handles into the registry (`EntryId`) are plain indices. They identify which
entry a player rests on for continuity checks and never keep the entry alive:
an `EntryId` is only meaningful against the entry list it was produced from,
and a registry rebuild invalidates every handle taken before it.
*/

use nalgebra as na;

use super::aabb::Aabb;

/// Common math alias for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;

/// Index of an entry in the registry's ordered entry list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

impl EntryId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which piece of level content produced a registry entry.
///
/// Informational only: resolution never looks at it. Useful for logging,
/// debugging overlays and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrySource {
    /// One slice of a ground segment (`slice` counts from the segment start).
    Ground { segment: usize, slice: usize },
    Platform(usize),
    Obstacle(usize),
    /// A target, by its content id.
    Target(u32),
    BossGate,
    /// Added directly through `CollidableRegistry::add_entry`.
    Custom,
}

/// A solid the player collides with.
///
/// - `is_platform = true`: the top face can be stood on.
/// - `is_platform = false`: any overlap is an obstruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollidableEntry {
    pub aabb: Aabb,
    pub is_platform: bool,
    pub source: EntrySource,
}

impl CollidableEntry {
    #[inline]
    pub fn platform(aabb: Aabb) -> Self {
        Self {
            aabb,
            is_platform: true,
            source: EntrySource::Custom,
        }
    }

    #[inline]
    pub fn solid(aabb: Aabb) -> Self {
        Self {
            aabb,
            is_platform: false,
            source: EntrySource::Custom,
        }
    }

    #[inline]
    pub fn with_source(mut self, source: EntrySource) -> Self {
        self.source = source;
        self
    }

    /// Y of the top face (where a player stands).
    #[inline]
    pub fn top(&self) -> f32 {
        self.aabb.max.y
    }

    /// Y of the bottom face (what a rising player bumps into).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.aabb.min.y
    }
}

/// Outcome of the grounding check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroundContact {
    pub is_grounded: bool,
    pub grounded_on: Option<EntryId>,
}

impl GroundContact {
    #[inline]
    pub fn on(id: EntryId) -> Self {
        Self {
            is_grounded: true,
            grounded_on: Some(id),
        }
    }

    #[inline]
    pub fn airborne() -> Self {
        Self::default()
    }
}

/// Result of the vertical pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalResolution {
    /// Resolved Y of the player box bottom.
    pub y: f32,
    pub velocity_y: f32,
    pub is_grounded: bool,
    pub grounded_on: Option<EntryId>,
}

/// Result of the horizontal pass: corrected anchor X/Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalResolution {
    pub x: f32,
    pub z: f32,
}

/// Final per-tick state returned by the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionResult {
    /// Corrected anchor position (same frame as the desired position passed in).
    pub position: Vec3,
    pub velocity: Vec3,
    pub is_grounded: bool,
    /// Which entry the player rests on, if grounded.
    pub grounded_on: Option<EntryId>,
}
