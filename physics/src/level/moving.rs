use super::{LevelContent, PlatformKind};

/// Per-platform oscillation state for moving platforms.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Track {
    /// Index into `LevelContent::platforms`.
    platform: usize,
    start_x: f32,
    phase: f32,
}

/// Advances moving platforms along X, one frame at a time.
///
/// Each moving platform keeps its own accumulated phase:
/// `phase += dt * speed`, `x = start_x + sin(phase) * distance * direction`.
///
/// The tracker only rewrites platform positions in [`LevelContent`]. It never
/// touches the collision registry: a host that wants live collision against
/// moving platforms rebuilds the registry after [`MovingPlatforms::advance`]
/// reports movement.
#[derive(Clone, Debug, Default)]
pub struct MovingPlatforms {
    tracks: Vec<Track>,
}

impl MovingPlatforms {
    /// Capture the starting X of every moving platform in `level`.
    pub fn new(level: &LevelContent) -> Self {
        let tracks = level
            .platforms
            .iter()
            .enumerate()
            .filter(|(_, p)| matches!(p.kind, PlatformKind::Moving { .. }))
            .map(|(platform, p)| Track {
                platform,
                start_x: p.x,
                phase: 0.0,
            })
            .collect();
        Self { tracks }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Advance every tracked platform by `dt_seconds` and write the new X back.
    ///
    /// Returns `true` if any platform position changed this frame.
    pub fn advance(&mut self, dt_seconds: f32, level: &mut LevelContent) -> bool {
        let dt = dt_seconds.max(0.0);
        let mut moved = false;

        for track in &mut self.tracks {
            let Some(platform) = level.platforms.get_mut(track.platform) else {
                continue;
            };
            let PlatformKind::Moving {
                direction,
                distance,
                speed,
            } = platform.kind
            else {
                continue;
            };

            track.phase += dt * speed;
            let x = track.start_x + track.phase.sin() * distance * direction.sign();
            if x != platform.x {
                platform.x = x;
                moved = true;
            }
        }

        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{MoveDirection, Platform};
    use approx::assert_abs_diff_eq;

    fn platform(kind: PlatformKind) -> Platform {
        Platform {
            x: 1.0,
            y: 1.0,
            z: -5.0,
            width: 2.0,
            height: 0.3,
            depth: 2.0,
            kind,
        }
    }

    #[test]
    fn only_moving_platforms_are_tracked() {
        let level = LevelContent {
            platforms: vec![
                platform(PlatformKind::Static),
                platform(PlatformKind::Moving {
                    direction: MoveDirection::Right,
                    distance: 2.0,
                    speed: 1.0,
                }),
                platform(PlatformKind::Crumbling),
            ],
            ..Default::default()
        };
        let tracker = MovingPlatforms::new(&level);
        assert_eq!(tracker.len(), 1);
        assert!(!tracker.is_empty());
    }

    #[test]
    fn static_level_has_nothing_to_move() {
        let mut level = LevelContent {
            platforms: vec![platform(PlatformKind::Static)],
            ..Default::default()
        };
        let mut tracker = MovingPlatforms::new(&level);

        assert!(tracker.is_empty());
        assert!(!tracker.advance(1.0, &mut level));
        assert_eq!(level.platforms[0].x, 1.0);
    }

    #[test]
    fn platform_follows_sinusoid_in_its_direction() {
        let mut level = LevelContent {
            platforms: vec![platform(PlatformKind::Moving {
                direction: MoveDirection::Left,
                distance: 2.0,
                speed: 0.5,
            })],
            ..Default::default()
        };
        let mut tracker = MovingPlatforms::new(&level);

        // phase = pi/2 after dt * speed: full excursion to the left.
        let dt = std::f32::consts::PI;
        assert!(tracker.advance(dt, &mut level));
        assert_abs_diff_eq!(level.platforms[0].x, 1.0 - 2.0, epsilon = 1.0e-4);

        // Another quarter period brings it back through the start.
        assert!(tracker.advance(dt, &mut level));
        assert_abs_diff_eq!(level.platforms[0].x, 1.0, epsilon = 1.0e-4);
    }

    #[test]
    fn zero_dt_reports_no_motion() {
        let mut level = LevelContent {
            platforms: vec![platform(PlatformKind::Moving {
                direction: MoveDirection::Right,
                distance: 2.0,
                speed: 1.0,
            })],
            ..Default::default()
        };
        let mut tracker = MovingPlatforms::new(&level);
        assert!(!tracker.advance(0.0, &mut level));
        assert_eq!(level.platforms[0].x, 1.0);
    }
}
