/*!
Collision root module.

This module re-exports submodules that implement the runner's collision core:
a per-level registry of axis-aligned solids and a per-tick resolver that
corrects the player's desired motion against them. The code is split for
clarity:

- aabb:       axis-aligned bounding box value type
- types:      shared data types (entries, handles, per-pass results)
- settings:   landing/ceiling/grounding bands and level geometry constants
- registry:   ordered collidable list rebuilt from level content
- ground:     "resting on a platform" check
- vertical:   Y-axis resolution (landing, ceiling, push-out)
- horizontal: X/Z resolution against side hits
- resolve:    the per-tick orchestrator tying the passes together

Every resolver walks the registry in order and the first qualifying entry
wins where the rules call for a single match. Ground comes first in the
registry, so it is the most authoritative surface.
*/

pub mod aabb;
pub mod ground;
pub mod horizontal;
pub mod registry;
pub mod resolve;
pub mod settings;
pub mod types;
pub mod vertical;

// Re-export commonly used types and functions.
pub use aabb::Aabb;
pub use ground::check_grounded;
pub use horizontal::resolve_horizontal;
pub use registry::CollidableRegistry;
pub use resolve::resolve_collisions;
pub use settings::{CollisionSettings, RegistrySettings};
pub use types::{
    CollidableEntry, CollisionResult, EntryId, EntrySource, GroundContact, HorizontalResolution,
    Vec3, VerticalResolution,
};
pub use vertical::resolve_vertical;
