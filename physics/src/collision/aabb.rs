use super::types::Vec3;

/// World-space axis-aligned bounding box.
///
/// Invariant (caller contract): `min <= max` componentwise. Inverted or
/// zero-volume boxes are not guarded against; results involving them are
/// unspecified.
///
/// Boxes are plain values. Per-tick code builds fresh boxes instead of mutating
/// one across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` extending `half_extents` along each axis.
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Player box for an anchor position.
    ///
    /// Built from the bottom corner (`anchor + center_offset - size / 2`) so a
    /// feet anchor with `center_offset.y == size.y / 2` puts the bottom exactly
    /// at `anchor.y`. Going through the center would round the bottom off a
    /// surface the player stands on.
    #[inline]
    pub fn from_anchor(anchor: Vec3, center_offset: Vec3, size: Vec3) -> Self {
        let min = anchor + (center_offset - size * 0.5);
        Self {
            min,
            max: min + size,
        }
    }

    /// Box for a level piece placed by its X/Z center and its bottom Y.
    ///
    /// This is how level content describes solids: `(x, z)` is the footprint
    /// center, `bottom` the resting height and `height` the vertical extent.
    #[inline]
    pub fn from_footprint(x: f32, z: f32, width: f32, depth: f32, bottom: f32, height: f32) -> Self {
        Self {
            min: Vec3::new(x - width * 0.5, bottom, z - depth * 0.5),
            max: Vec3::new(x + width * 0.5, bottom + height, z + depth * 0.5),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive intersection test: boxes sharing a face count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }

    /// Strict overlap of the X/Z footprints, ignoring height.
    #[inline]
    pub fn overlaps_xz(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.z > other.min.z
            && self.min.z < other.max.z
    }

    /// Signed length of the overlap along `axis` (0 = X, 1 = Y, 2 = Z).
    ///
    /// Negative when the boxes are separated along that axis.
    #[inline]
    pub fn overlap_along(&self, other: &Aabb, axis: usize) -> f32 {
        self.max[axis].min(other.max[axis]) - self.min[axis].max(other.min[axis])
    }

    /// Same footprint, vertical span replaced by `[bottom, bottom + height]`.
    #[inline]
    pub fn with_bottom(&self, bottom: f32, height: f32) -> Self {
        let mut out = *self;
        out.min.y = bottom;
        out.max.y = bottom + height;
        out
    }

    /// Same box, moved along `axis` so its center sits at `center` with the
    /// given half extent.
    #[inline]
    pub fn with_axis_center(&self, axis: usize, center: f32, half_extent: f32) -> Self {
        let mut out = *self;
        out.min[axis] = center - half_extent;
        out.max[axis] = center + half_extent;
        out
    }

    /// The box after a 180 degree rotation of the scene around the world Y axis
    /// (`x -> -x`, `z -> -z`).
    #[inline]
    pub fn mirrored_about_y(&self) -> Self {
        Self {
            min: Vec3::new(-self.max.x, self.min.y, -self.max.z),
            max: Vec3::new(-self.min.x, self.max.y, -self.min.z),
        }
    }
}
