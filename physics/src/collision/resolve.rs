use super::{
    aabb::Aabb,
    ground::{check_grounded, rests_on},
    horizontal::resolve_horizontal,
    settings::CollisionSettings,
    types::{CollidableEntry, CollisionResult, EntryId, GroundContact, Vec3},
    vertical::resolve_vertical,
};

/// Resolve one tick of player motion against `entries`.
///
/// - `desired_position`: where the motion driver wants the player anchor to be.
/// - `size`: full extents of the player box.
/// - `center_offset`: offset from the anchor to the center of the box.
///
/// Sequence:
/// 1. Build the player box at the desired position.
/// 2. Vertical pass; the resolved Y is applied to a working box.
/// 3. Horizontal pass against the Y-corrected box.
/// 4. Rebuild the box at the fully corrected position.
/// 5. Re-validate grounding. If the vertical pass grounded the player, the
///    entry it landed on is kept while the player still rests on it,
///    otherwise the first platform the player now rests on takes over; with
///    neither the player is falling. If the vertical pass left the player
///    airborne, the grounding check runs at the final box in case the
///    horizontal correction moved the player onto an edge. Whenever grounded,
///    Y is snapped exactly onto the supporting top.
/// 6. Velocity Y comes from the vertical pass, and is zeroed when grounded and
///    still pointing down.
///
/// With no entries the desired position and velocity are returned as-is,
/// not grounded ("falling in the void").
pub fn resolve_collisions(
    desired_position: Vec3,
    velocity: Vec3,
    size: Vec3,
    center_offset: Vec3,
    entries: &[CollidableEntry],
    settings: &CollisionSettings,
) -> CollisionResult {
    if entries.is_empty() {
        return CollisionResult {
            position: desired_position,
            velocity,
            is_grounded: false,
            grounded_on: None,
        };
    }

    // Offset from the anchor to the box bottom.
    let bottom_offset = center_offset.y - size.y * 0.5;
    let player = Aabb::from_anchor(desired_position, center_offset, size);

    let vertical = resolve_vertical(&player, velocity, size, entries, settings);
    let working = player.with_bottom(vertical.y, size.y);

    let horizontal = resolve_horizontal(
        &working,
        desired_position,
        size,
        center_offset,
        entries,
        settings,
    );

    // Anchor Y for a box whose bottom sits at `bottom`.
    let anchor_y = |bottom: f32| bottom - bottom_offset;

    let mut position = Vec3::new(horizontal.x, anchor_y(vertical.y), horizontal.z);
    let final_box = Aabb::from_anchor(position, center_offset, size);

    let contact = if vertical.is_grounded {
        vertical
            .grounded_on
            .filter(|id| still_rests_on(&final_box, *id, entries, settings))
            .map(GroundContact::on)
            .unwrap_or_else(|| check_grounded(&final_box, entries, settings))
    } else {
        check_grounded(&final_box, entries, settings)
    };

    if let Some(support) = contact.grounded_on.and_then(|id| entries.get(id.index())) {
        position.y = anchor_y(support.top());
    }

    let mut out_velocity = Vec3::new(velocity.x, vertical.velocity_y, velocity.z);
    if contact.is_grounded && out_velocity.y < 0.0 {
        out_velocity.y = 0.0;
    }

    log::trace!(
        "resolve: desired={:?} -> position={:?} vy={} grounded={} (vertical grounded={}, on={:?})",
        desired_position,
        position,
        out_velocity.y,
        contact.is_grounded,
        vertical.is_grounded,
        contact.grounded_on,
    );

    CollisionResult {
        position,
        velocity: out_velocity,
        is_grounded: contact.is_grounded,
        grounded_on: contact.grounded_on,
    }
}

#[inline]
fn still_rests_on(
    player: &Aabb,
    id: EntryId,
    entries: &[CollidableEntry],
    settings: &CollisionSettings,
) -> bool {
    entries
        .get(id.index())
        .is_some_and(|entry| rests_on(player, entry, settings))
}
