use crate::level::{GroundSegment, LevelContent, Obstacle};

use super::{
    aabb::Aabb,
    settings::RegistrySettings,
    types::{CollidableEntry, EntryId, EntrySource, Vec3},
};

/// Closed Z interval `[start, end]` of one ground slice, `start < end`.
///
/// Both bounds become faces of the slice's box. A pit's span shares its bounds
/// with the neighbouring slices, which touch it but never overlap it.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Span {
    start: f32,
    end: f32,
}

/// Ordered set of solids for the current level.
///
/// Notes:
/// - Iteration order is a contract: ground slices, then platforms, then
///   obstacles, then targets, then the boss gate, each in content order. The
///   resolvers take the first qualifying entry where they need a single match,
///   so earlier entries are more authoritative.
/// - The registry is never patched. Any content change (new level, gate
///   opened, target shot, platform moved) goes through [`CollidableRegistry::rebuild`],
///   which clears and repopulates the whole list.
/// - [`EntryId`] handles index into [`CollidableRegistry::entries`] and are only
///   valid until the next rebuild or clear.
#[derive(Clone, Debug, Default)]
pub struct CollidableRegistry {
    entries: Vec<CollidableEntry>,
    settings: RegistrySettings,
}

impl CollidableRegistry {
    pub fn new(settings: RegistrySettings) -> Self {
        Self {
            entries: Vec::new(),
            settings,
        }
    }

    /// Build a registry for `level` with default geometry settings.
    pub fn from_level(level: &LevelContent) -> Self {
        let mut registry = Self::default();
        registry.rebuild(level);
        registry
    }

    #[inline]
    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    #[inline]
    pub fn entries(&self) -> &[CollidableEntry] {
        &self.entries
    }

    #[inline]
    pub fn get(&self, id: EntryId) -> Option<&CollidableEntry> {
        self.entries.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append an entry at the end of the current order.
    pub fn add_entry(&mut self, entry: CollidableEntry) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(entry);
        id
    }

    /// Replace every entry with the collidables derived from `level`.
    pub fn rebuild(&mut self, level: &LevelContent) {
        self.clear();

        let shallow_pits: Vec<&Obstacle> = level
            .obstacles
            .iter()
            .filter(|o| o.is_pit() && o.depth <= self.settings.shallow_pit_max_depth)
            .collect();

        // Ground slices first: primary ground is the most authoritative surface.
        let mut ground_slices = 0usize;
        for (segment_idx, segment) in level.ground.iter().enumerate() {
            let slices = ground_slices_for(segment, &shallow_pits, self.settings.min_slice_width);
            for (slice_idx, span) in slices.into_iter().enumerate() {
                let aabb = ground_slice_aabb(segment, span, self.settings.rock_top_y);
                self.push(
                    CollidableEntry::platform(aabb).with_source(EntrySource::Ground {
                        segment: segment_idx,
                        slice: slice_idx,
                    }),
                );
                ground_slices += 1;
            }
        }

        for (idx, p) in level.platforms.iter().enumerate() {
            let aabb = Aabb::from_footprint(p.x, p.z, p.width, p.depth, p.y, p.height);
            self.push(CollidableEntry::platform(aabb).with_source(EntrySource::Platform(idx)));
        }

        // Pits are gaps, never solids. Every other obstacle can be climbed.
        for (idx, o) in level.obstacles.iter().enumerate() {
            if o.is_pit() {
                continue;
            }
            let aabb = Aabb::from_footprint(o.x, o.z, o.width, o.depth, o.y, o.height);
            self.push(CollidableEntry::platform(aabb).with_source(EntrySource::Obstacle(idx)));
        }

        for t in level.targets.iter().filter(|t| !t.shot) {
            let (w, h, d) = t.kind.footprint();
            let aabb = Aabb::from_footprint(t.x, t.z, w, d, t.y, h);
            self.push(CollidableEntry::solid(aabb).with_source(EntrySource::Target(t.id)));
        }

        if let Some(gate) = level.boss_gate.filter(|g| !g.open) {
            let [hx, hy, hz] = self.settings.gate_half_extents;
            let aabb = Aabb::from_center_half_extents(
                Vec3::new(gate.x, gate.y, gate.z),
                Vec3::new(hx, hy, hz),
            );
            self.push(CollidableEntry::solid(aabb).with_source(EntrySource::BossGate));
        }

        log::debug!(
            "collidable registry rebuilt: {} entries ({} ground slices from {} segments, {} shallow pits carved)",
            self.entries.len(),
            ground_slices,
            level.ground.len(),
            shallow_pits.len(),
        );
    }

    /// Push a content-derived entry, applying scene mirroring if enabled.
    fn push(&mut self, mut entry: CollidableEntry) {
        if self.settings.mirror_scene {
            entry.aabb = entry.aabb.mirrored_about_y();
        }
        self.entries.push(entry);
    }
}

/// Box for one slice of a ground segment's rock layer.
fn ground_slice_aabb(segment: &GroundSegment, span: Span, rock_top_y: f32) -> Aabb {
    Aabb::new(
        Vec3::new(
            segment.x - segment.width * 0.5,
            rock_top_y - segment.rock_layer_height,
            span.start,
        ),
        Vec3::new(segment.x + segment.width * 0.5, rock_top_y, span.end),
    )
}

/// Subtract every shallow pit's span from the segment's Z span.
///
/// Pieces no wider than `min_width` are discarded so no degenerate slivers end
/// up in the registry. Slices come out ordered along +Z.
fn ground_slices_for(segment: &GroundSegment, shallow_pits: &[&Obstacle], min_width: f32) -> Vec<Span> {
    let (seg_start, seg_end) = segment.z_span();
    let mut slices = vec![Span {
        start: seg_start,
        end: seg_end,
    }];

    for pit in shallow_pits {
        let (pit_start, pit_end) = pit.pit_span();
        if pit_end <= seg_start || pit_start >= seg_end {
            continue;
        }

        slices = slices
            .into_iter()
            .flat_map(|slice| {
                if pit_end <= slice.start || pit_start >= slice.end {
                    return vec![slice];
                }
                let mut pieces = Vec::with_capacity(2);
                if pit_start > slice.start {
                    pieces.push(Span {
                        start: slice.start,
                        end: pit_start,
                    });
                }
                if pit_end < slice.end {
                    pieces.push(Span {
                        start: pit_end,
                        end: slice.end,
                    });
                }
                pieces.retain(|s| s.end - s.start > min_width);
                pieces
            })
            .collect();
    }

    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{BossGate, ObstacleKind, Platform, PlatformKind, Target, TargetKind};
    use approx::assert_abs_diff_eq;

    fn segment() -> GroundSegment {
        GroundSegment {
            x: 0.0,
            z: 0.0,
            length: 20.0,
            width: 4.0,
            rock_layer_height: 0.2,
        }
    }

    fn pit(z: f32, length: f32, depth: f32) -> Obstacle {
        Obstacle {
            x: 0.0,
            y: 0.0,
            z,
            width: 4.0,
            height: length,
            depth,
            kind: ObstacleKind::Pit,
        }
    }

    fn z_spans(registry: &CollidableRegistry) -> Vec<(f32, f32)> {
        registry
            .entries()
            .iter()
            .map(|e| (e.aabb.min.z, e.aabb.max.z))
            .collect()
    }

    #[test]
    fn plain_ground_segment_becomes_one_platform() {
        let level = LevelContent {
            ground: vec![segment()],
            ..Default::default()
        };
        let registry = CollidableRegistry::from_level(&level);

        assert_eq!(registry.len(), 1);
        let ground = registry.entries()[0];
        assert!(ground.is_platform);
        assert_abs_diff_eq!(ground.top(), 0.2, epsilon = 1.0e-6);
        assert_abs_diff_eq!(ground.bottom(), 0.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(ground.aabb.min.x, -2.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(ground.aabb.max.x, 2.0, epsilon = 1.0e-6);
        assert_eq!(z_spans(&registry), vec![(-10.0, 10.0)]);
    }

    #[test]
    fn shallow_pit_cuts_ground_into_two_slices() {
        let level = LevelContent {
            ground: vec![segment()],
            obstacles: vec![pit(2.5, 1.0, 0.15)],
            ..Default::default()
        };
        let registry = CollidableRegistry::from_level(&level);

        assert_eq!(z_spans(&registry), vec![(-10.0, 2.0), (3.0, 10.0)]);
        assert!(registry.entries().iter().all(|e| e.is_platform));
        assert_eq!(
            registry.entries()[1].source,
            EntrySource::Ground {
                segment: 0,
                slice: 1
            }
        );
    }

    #[test]
    fn deep_pit_leaves_ground_whole_and_adds_nothing() {
        let level = LevelContent {
            ground: vec![segment()],
            obstacles: vec![pit(2.5, 1.0, 0.5)],
            ..Default::default()
        };
        let registry = CollidableRegistry::from_level(&level);

        assert_eq!(registry.len(), 1);
        assert_eq!(z_spans(&registry), vec![(-10.0, 10.0)]);
        assert!(matches!(
            registry.entries()[0].source,
            EntrySource::Ground { .. }
        ));
    }

    #[test]
    fn slivers_narrower_than_min_width_are_dropped() {
        // Pit ends 0.05 short of the segment end: the leftover piece is discarded.
        let level = LevelContent {
            ground: vec![segment()],
            obstacles: vec![pit(9.0, 1.9, 0.1)],
            ..Default::default()
        };
        let registry = CollidableRegistry::from_level(&level);

        assert_eq!(registry.len(), 1);
        let (start, end) = z_spans(&registry)[0];
        assert_abs_diff_eq!(start, -10.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(end, 8.05, epsilon = 1.0e-5);
    }

    #[test]
    fn overlapping_shallow_pits_merge_their_gaps() {
        let level = LevelContent {
            ground: vec![segment()],
            obstacles: vec![pit(0.0, 2.0, 0.1), pit(1.5, 2.0, 0.1)],
            ..Default::default()
        };
        let registry = CollidableRegistry::from_level(&level);
        assert_eq!(z_spans(&registry), vec![(-10.0, -1.0), (2.5, 10.0)]);
    }

    #[test]
    fn entries_follow_content_priority_order() {
        let level = LevelContent {
            ground: vec![segment()],
            platforms: vec![Platform {
                x: 0.0,
                y: 1.0,
                z: -4.0,
                width: 2.0,
                height: 0.3,
                depth: 2.0,
                kind: PlatformKind::Static,
            }],
            obstacles: vec![
                Obstacle {
                    x: 1.0,
                    y: 0.2,
                    z: -2.0,
                    width: 1.0,
                    height: 0.5,
                    depth: 1.0,
                    kind: ObstacleKind::Wall,
                },
                pit(5.0, 1.0, 0.5),
            ],
            targets: vec![
                Target {
                    id: 4,
                    x: 0.0,
                    y: 0.2,
                    z: -6.0,
                    kind: TargetKind::CrystalCluster,
                    shot: false,
                },
                Target {
                    id: 5,
                    x: 0.0,
                    y: 0.2,
                    z: -7.0,
                    kind: TargetKind::Idol,
                    shot: true,
                },
            ],
            boss_gate: Some(BossGate {
                x: 0.0,
                y: 2.0,
                z: -9.0,
                open: false,
                required_crystals: 1,
            }),
        };
        let registry = CollidableRegistry::from_level(&level);

        let sources: Vec<EntrySource> = registry.entries().iter().map(|e| e.source).collect();
        assert_eq!(
            sources,
            vec![
                EntrySource::Ground {
                    segment: 0,
                    slice: 0
                },
                EntrySource::Platform(0),
                EntrySource::Obstacle(0),
                EntrySource::Target(4),
                EntrySource::BossGate,
            ]
        );
        let platform_flags: Vec<bool> = registry.entries().iter().map(|e| e.is_platform).collect();
        assert_eq!(platform_flags, vec![true, true, true, false, false]);

        let target = registry.entries()[3].aabb;
        assert_abs_diff_eq!(target.size().x, 0.4, epsilon = 1.0e-6);
        assert_abs_diff_eq!(target.size().y, 0.4, epsilon = 1.0e-6);

        let gate = registry.entries()[4].aabb;
        assert_abs_diff_eq!(gate.min.y, 0.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(gate.max.y, 4.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(gate.size().x, 3.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(gate.size().z, 0.5, epsilon = 1.0e-6);
    }

    #[test]
    fn open_gate_is_not_solid() {
        let mut level = LevelContent {
            ground: vec![segment()],
            boss_gate: Some(BossGate {
                x: 0.0,
                y: 2.0,
                z: -9.0,
                open: false,
                required_crystals: 2,
            }),
            ..Default::default()
        };
        let mut registry = CollidableRegistry::from_level(&level);
        assert_eq!(registry.len(), 2);

        assert!(level.unlock_gate(2));
        registry.rebuild(&level);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn mirrored_scene_flips_x_and_z() {
        let level = LevelContent {
            ground: vec![segment()],
            obstacles: vec![pit(2.5, 1.0, 0.15)],
            ..Default::default()
        };
        let mut registry = CollidableRegistry::new(RegistrySettings {
            mirror_scene: true,
            ..Default::default()
        });
        registry.rebuild(&level);

        assert!(registry.settings().mirror_scene);
        assert_eq!(z_spans(&registry), vec![(-2.0, 10.0), (-10.0, -3.0)]);
    }

    #[test]
    fn add_entry_appends_and_clear_empties() {
        let mut registry = CollidableRegistry::default();
        let a = registry.add_entry(CollidableEntry::platform(Aabb::new(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.2, 1.0),
        )));
        let b = registry.add_entry(CollidableEntry::solid(Aabb::new(
            Vec3::new(-1.0, 0.2, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        )));
        assert_eq!((a, b), (EntryId(0), EntryId(1)));
        assert!(registry.get(b).is_some_and(|e| !e.is_platform));

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get(a).is_none());
    }
}
