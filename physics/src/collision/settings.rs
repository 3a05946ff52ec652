/*!
Collision bands, tolerances and level geometry constants.

These constants centralize the parameters used by the grounding check, both
resolver passes and the registry builder. Keeping them together makes tuning
easier without touching resolver logic.

Notes
- Distances are in world units (the runner treats one unit as roughly a meter).
- Bands are asymmetric on purpose: a falling player is allowed to sink a little
  into a platform before the landing snap, and to float slightly above it.
- `CollisionSettings` / `RegistrySettings` carry these as defaults so a level or
  a test can override individual values (see `crate::config`).
*/

use serde::{Deserialize, Serialize};

/// Max vertical gap between player bottom and platform top still counted as
/// resting contact.
pub const GROUND_CHECK_DISTANCE: f32 = 0.1;

/// Landing band above a platform top: a bottom up to this far above still lands.
pub const LANDING_BAND_ABOVE: f32 = 0.3;

/// Landing band below a platform top: a bottom sunk up to this far still lands.
pub const LANDING_BAND_BELOW: f32 = 0.5;

/// Ceiling band: player top may stop this far short of an entry's bottom.
pub const CEILING_BAND_BELOW: f32 = 0.1;

/// Ceiling band: player top may poke this far past an entry's bottom.
pub const CEILING_BAND_ABOVE: f32 = 0.3;

/// Upper edge of the "standing on this ledge" band used by the horizontal pass.
///
/// Narrower than [`LANDING_BAND_ABOVE`]: the vertical pass already snapped the
/// player, so only near-exact contact is skipped sideways.
pub const LEDGE_BAND_ABOVE: f32 = 0.2;

/// A hit is treated as a side hit when the vertical overlap is below this
/// fraction of the player's height.
pub const SIDE_HIT_HEIGHT_RATIO: f32 = 0.5;

/// Vertical overlaps up to this depth count as face contact, not a side hit.
///
/// Snapping the player flush against a top or underside leaves a rounding
/// residue of a few ulps; this keeps it out of the horizontal pass.
pub const CONTACT_SKIN: f32 = 1.0e-4;

/// Y of the walkable top of every ground segment's rock layer.
pub const ROCK_TOP_Y: f32 = 0.2;

/// Pits at most this deep cut a gap into the ground; deeper pits leave the
/// ground intact.
pub const SHALLOW_PIT_MAX_DEPTH: f32 = 0.2;

/// Ground slices no wider than this (along the track) are discarded.
pub const MIN_SLICE_WIDTH: f32 = 0.1;

/// Half extents (x, y, z) of a closed boss gate around its anchor.
pub const GATE_HALF_EXTENTS: [f32; 3] = [1.5, 2.0, 0.25];

/// Tunable bands used by the resolvers and the grounding check.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    pub grounding_tolerance: f32,
    pub landing_band_above: f32,
    pub landing_band_below: f32,
    pub ceiling_band_below: f32,
    pub ceiling_band_above: f32,
    pub ledge_band_above: f32,
    pub side_hit_height_ratio: f32,
    pub contact_skin: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            grounding_tolerance: GROUND_CHECK_DISTANCE,
            landing_band_above: LANDING_BAND_ABOVE,
            landing_band_below: LANDING_BAND_BELOW,
            ceiling_band_below: CEILING_BAND_BELOW,
            ceiling_band_above: CEILING_BAND_ABOVE,
            ledge_band_above: LEDGE_BAND_ABOVE,
            side_hit_height_ratio: SIDE_HIT_HEIGHT_RATIO,
            contact_skin: CONTACT_SKIN,
        }
    }
}

impl CollisionSettings {
    /// Whether a player bottom at `bottom` lands on a platform top at `top`.
    #[inline]
    pub fn in_landing_band(&self, bottom: f32, top: f32) -> bool {
        bottom <= top + self.landing_band_above && bottom >= top - self.landing_band_below
    }

    /// Whether a player bottom at `bottom` is standing on the ledge at `top`
    /// for the purpose of the horizontal pass.
    #[inline]
    pub fn in_ledge_band(&self, bottom: f32, top: f32) -> bool {
        bottom <= top + self.ledge_band_above && bottom >= top - self.landing_band_below
    }

    /// Whether a player top at `top` is bumping an entry whose bottom is `bottom`.
    #[inline]
    pub fn in_ceiling_band(&self, top: f32, bottom: f32) -> bool {
        top > bottom - self.ceiling_band_below && top < bottom + self.ceiling_band_above
    }

    /// Whether a vertical overlap of `overlap` is shallow enough to be a side
    /// hit for a player `height` tall.
    #[inline]
    pub fn is_side_hit(&self, overlap: f32, height: f32) -> bool {
        overlap > self.contact_skin && overlap < height * self.side_hit_height_ratio
    }

    /// Whether a player bottom at `bottom` counts as resting on a top at `top`.
    #[inline]
    pub fn is_resting(&self, bottom: f32, top: f32) -> bool {
        (bottom - top).abs() < self.grounding_tolerance
    }
}

/// Level geometry parameters used when converting content into collidables.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    pub rock_top_y: f32,
    pub shallow_pit_max_depth: f32,
    pub min_slice_width: f32,
    pub gate_half_extents: [f32; 3],
    /// Mirror every box as if the scene were rotated 180 degrees about Y.
    pub mirror_scene: bool,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            rock_top_y: ROCK_TOP_Y,
            shallow_pit_max_depth: SHALLOW_PIT_MAX_DEPTH,
            min_slice_width: MIN_SLICE_WIDTH,
            gate_half_extents: GATE_HALF_EXTENTS,
            mirror_scene: false,
        }
    }
}
