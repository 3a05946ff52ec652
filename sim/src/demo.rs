use runner_physics::{
    BossGate, GroundSegment, LevelContent, MoveDirection, Obstacle, ObstacleKind, Platform,
    PlatformKind, Target, TargetKind,
};

/// Player spawn for the demo level (anchor at the feet, on the rock top).
pub const SPAWN: [f32; 3] = [0.0, 0.2, 0.0];

/// A short run along -Z: a shallow pit to jump, a step, two platforms
/// (one moving), a lantern and a closed gate at the end.
pub fn demo_level() -> LevelContent {
    LevelContent {
        ground: vec![
            GroundSegment {
                x: 0.0,
                z: -25.0,
                length: 60.0,
                width: 4.0,
                rock_layer_height: 0.2,
            },
            GroundSegment {
                x: 0.0,
                z: -75.0,
                length: 40.0,
                width: 4.0,
                rock_layer_height: 0.2,
            },
        ],
        platforms: vec![
            Platform {
                x: 0.0,
                y: 1.0,
                z: -22.0,
                width: 2.0,
                height: 0.3,
                depth: 3.0,
                kind: PlatformKind::Static,
            },
            Platform {
                x: 0.0,
                y: 1.4,
                z: -34.0,
                width: 2.0,
                height: 0.3,
                depth: 2.0,
                kind: PlatformKind::Moving {
                    direction: MoveDirection::Right,
                    distance: 1.5,
                    speed: 1.2,
                },
            },
        ],
        obstacles: vec![
            Obstacle {
                x: 0.0,
                y: 0.0,
                z: -12.0,
                width: 4.0,
                height: 1.5,
                depth: 0.15,
                kind: ObstacleKind::Pit,
            },
            Obstacle {
                x: 0.0,
                y: 0.2,
                z: -16.0,
                width: 3.0,
                height: 0.4,
                depth: 1.0,
                kind: ObstacleKind::Wall,
            },
        ],
        targets: vec![Target {
            id: 1,
            x: 1.2,
            y: 0.2,
            z: -40.0,
            kind: TargetKind::Lantern,
            shot: false,
        }],
        boss_gate: Some(BossGate {
            x: 0.0,
            y: 2.2,
            z: -90.0,
            open: false,
            required_crystals: 3,
        }),
    }
}
