use super::{
    aabb::Aabb,
    settings::CollisionSettings,
    types::{CollidableEntry, EntryId, GroundContact},
};

/// Check whether `player` currently rests on a platform.
///
/// - Only platform entries are considered.
/// - The player's X/Z footprint must strictly overlap the entry's.
/// - The player's bottom must be within `grounding_tolerance` of the entry's top,
///   above or below.
///
/// The first qualifying entry in registry order wins; there is no other
/// tie-break between stacked or adjacent platforms.
pub fn check_grounded(
    player: &Aabb,
    entries: &[CollidableEntry],
    settings: &CollisionSettings,
) -> GroundContact {
    entries
        .iter()
        .position(|entry| rests_on(player, entry, settings))
        .map_or_else(GroundContact::airborne, |idx| GroundContact::on(EntryId(idx)))
}

/// Whether `player` rests on `entry` (platform, footprint overlap, within tolerance).
#[inline]
pub fn rests_on(player: &Aabb, entry: &CollidableEntry, settings: &CollisionSettings) -> bool {
    entry.is_platform
        && player.overlaps_xz(&entry.aabb)
        && settings.is_resting(player.min.y, entry.top())
}
