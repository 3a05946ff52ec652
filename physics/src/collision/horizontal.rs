use super::{
    aabb::Aabb,
    settings::CollisionSettings,
    types::{CollidableEntry, HorizontalResolution, Vec3},
};

const AXIS_X: usize = 0;
const AXIS_Y: usize = 1;
const AXIS_Z: usize = 2;

/// Resolve the player's X/Z motion against every entry.
///
/// `player` already carries the Y resolved by the vertical pass; only its X/Z
/// span is moved to `desired_position`. For each entry the test box intersects
/// with a strictly overlapping X/Z footprint:
///
/// - Platforms the player is standing on (bottom within the ledge band of the
///   top) are skipped: the vertical pass owns them, and pushing here would
///   eject a player standing still on a ledge.
/// - A hit counts as a side hit only if the vertical overlap is deeper than
///   `contact_skin` and under `side_hit_height_ratio` of the player's height.
///   Face contact and deeper overlaps are left to the vertical pass.
/// - Side hits resolve X first: the player goes to the entry's left face if its
///   center is left of the entry's center, else to the right face. The test box
///   follows the corrected X.
/// - Z is then resolved with the same rule if the Z spans overlapped and the
///   box still intersects the entry after the X correction. Touching the face
///   X was pushed to counts.
///
/// Returns the corrected anchor X/Z. Y is never touched here.
pub fn resolve_horizontal(
    player: &Aabb,
    desired_position: Vec3,
    size: Vec3,
    center_offset: Vec3,
    entries: &[CollidableEntry],
    settings: &CollisionSettings,
) -> HorizontalResolution {
    let half = size * 0.5;
    let center = desired_position + center_offset;

    let mut test = player
        .with_axis_center(AXIS_X, center.x, half.x)
        .with_axis_center(AXIS_Z, center.z, half.z);
    let mut out = HorizontalResolution {
        x: desired_position.x,
        z: desired_position.z,
    };

    for entry in entries {
        if !test.intersects(&entry.aabb) || !test.overlaps_xz(&entry.aabb) {
            continue;
        }
        if entry.is_platform && settings.in_ledge_band(test.min.y, entry.top()) {
            continue;
        }
        if !settings.is_side_hit(test.overlap_along(&entry.aabb, AXIS_Y), size.y) {
            continue;
        }

        // Both overlaps are measured before any correction for this entry.
        let x_overlap = test.overlap_along(&entry.aabb, AXIS_X);
        let z_overlap = test.overlap_along(&entry.aabb, AXIS_Z);

        if x_overlap > 0.0 {
            let center_x = push_out(&mut test, &entry.aabb, AXIS_X, size.x);
            out.x = center_x - center_offset.x;
        }

        if z_overlap > 0.0 && test.intersects(&entry.aabb) {
            let center_z = push_out(&mut test, &entry.aabb, AXIS_Z, size.z);
            out.z = center_z - center_offset.z;
        }
    }

    out
}

/// Move `test` along `axis` to the nearer face of `obstacle` and return its new center.
///
/// The face coordinate is copied exactly onto the box so the two end up
/// touching, never overlapping by a rounding error.
fn push_out(test: &mut Aabb, obstacle: &Aabb, axis: usize, extent: f32) -> f32 {
    let player_center = (test.min[axis] + test.max[axis]) * 0.5;
    let obstacle_center = (obstacle.min[axis] + obstacle.max[axis]) * 0.5;
    let half = extent * 0.5;

    if player_center < obstacle_center {
        let face = obstacle.min[axis];
        test.min[axis] = face - extent;
        test.max[axis] = face;
        face - half
    } else {
        let face = obstacle.max[axis];
        test.min[axis] = face;
        test.max[axis] = face + extent;
        face + half
    }
}
