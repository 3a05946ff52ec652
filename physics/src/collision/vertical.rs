use super::{
    aabb::Aabb,
    settings::CollisionSettings,
    types::{CollidableEntry, EntryId, Vec3, VerticalResolution},
};

/// Resolve the player's vertical motion against every entry.
///
/// `player` is the box at the desired position. Only entries that intersect it
/// and strictly overlap its X/Z footprint take part. Exactly one case applies
/// per entry, in this order:
///
/// 1. Landing: a platform whose top is within the landing band of the player's
///    bottom. Snap onto the top, zero vertical velocity, mark grounded and stop
///    looking at further entries. The first platform found wins.
/// 2. Ceiling: the player's top is within the ceiling band of the entry's
///    bottom. Push down so the top touches the entry's bottom and cancel any
///    upward velocity. Not grounded.
/// 3. Penetration: the spans overlap vertically. A platform whose top is not
///    far below the player's bottom is landed on (without stopping). Anything
///    else pushes the player out through the nearer face: up onto the top
///    (zero velocity, grounded if it is a platform) or down below the bottom
///    (upward velocity cancelled).
///
/// Cases 2 and 3 may be overwritten by a later entry.
///
/// Returns the resolved Y of the player box bottom.
pub fn resolve_vertical(
    player: &Aabb,
    velocity: Vec3,
    size: Vec3,
    entries: &[CollidableEntry],
    settings: &CollisionSettings,
) -> VerticalResolution {
    let bottom = player.min.y;
    let top = player.max.y;
    let height = size.y;

    let mut out = VerticalResolution {
        y: bottom,
        velocity_y: velocity.y,
        is_grounded: false,
        grounded_on: None,
    };

    for (idx, entry) in entries.iter().enumerate() {
        if !player.intersects(&entry.aabb) || !player.overlaps_xz(&entry.aabb) {
            continue;
        }

        let entry_top = entry.top();
        let entry_bottom = entry.bottom();

        if entry.is_platform && settings.in_landing_band(bottom, entry_top) {
            land(&mut out, entry_top, idx);
            break;
        }

        if settings.in_ceiling_band(top, entry_bottom) {
            out.y = entry_bottom - height;
            out.velocity_y = out.velocity_y.min(0.0);
            continue;
        }

        if bottom < entry_top && top > entry_bottom {
            if entry.is_platform && bottom <= entry_top + settings.landing_band_above {
                land(&mut out, entry_top, idx);
                continue;
            }

            let dist_to_top = (top - entry_top).abs();
            let dist_to_bottom = (bottom - entry_bottom).abs();
            if dist_to_top < dist_to_bottom {
                out.y = entry_top;
                out.velocity_y = 0.0;
                if entry.is_platform {
                    out.is_grounded = true;
                    out.grounded_on = Some(EntryId(idx));
                }
            } else {
                out.y = entry_bottom - height;
                out.velocity_y = out.velocity_y.min(0.0);
            }
        }
    }

    out
}

#[inline]
fn land(out: &mut VerticalResolution, top: f32, idx: usize) {
    out.y = top;
    out.velocity_y = 0.0;
    out.is_grounded = true;
    out.grounded_on = Some(EntryId(idx));
}
