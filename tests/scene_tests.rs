//! End-to-end scenarios driving the scene the way the render loop does.

use arbor::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

fn test_scene() -> Scene {
    Scene::new(
        SceneConfig::new()
            .with_foliage_count(200)
            .with_ornament_counts(20, 30),
    )
}

#[test]
fn test_toggle_assembles_everything() {
    let mut scene = test_scene();

    // Start dispersed and let everything settle into the cloud.
    let mut elapsed = 0.0;
    for _ in 0..300 {
        scene.advance(Mode::Dispersed, elapsed, FRAME);
        elapsed += FRAME;
    }
    assert!(scene.foliage.progress() < 0.01);

    // Toggle to assembled and run ten seconds, several damping half-lives.
    for _ in 0..600 {
        scene.advance(Mode::Assembled, elapsed, FRAME);
        elapsed += FRAME;
    }

    assert!(
        (scene.foliage.progress() - 1.0).abs() < 1e-2,
        "progress ended at {}",
        scene.foliage.progress()
    );

    for set in [&scene.boxes, &scene.spheres] {
        for o in set.ornaments() {
            assert!(
                (o.position - o.tree_pos).length() < 0.15,
                "ornament at {:?} should sit near {:?}",
                o.position,
                o.tree_pos
            );
        }
    }

    assert!((scene.topper.position - scene.topper.crown_pos).length() < 1e-2);
}

#[test]
fn test_round_trip_returns_to_cloud() {
    let mut scene = test_scene();
    let mut elapsed = 0.0;

    for _ in 0..600 {
        scene.advance(Mode::Assembled, elapsed, FRAME);
        elapsed += FRAME;
    }
    for _ in 0..900 {
        scene.advance(Mode::Dispersed, elapsed, FRAME);
        elapsed += FRAME;
    }

    assert!(scene.foliage.progress() < 1e-2);
    assert!((scene.topper.position - scene.topper.scatter_pos).length() < 1e-2);
    for o in scene.spheres.ornaments() {
        // Dispersed bobbing never settles fully; allow its drift.
        assert!((o.position - o.scatter_pos).length() < 1.5);
    }
}

#[test]
fn test_endpoints_immutable_across_advances() {
    let mut scene = test_scene();
    let foliage_before: Vec<(Vec3, Vec3)> = scene
        .foliage
        .particles()
        .iter()
        .map(|p| (p.scatter_pos, p.tree_pos))
        .collect();
    let ornaments_before: Vec<(Vec3, Vec3)> = scene
        .boxes
        .ornaments()
        .iter()
        .map(|o| (o.scatter_pos, o.tree_pos))
        .collect();

    let mut elapsed = 0.0;
    for i in 0..240 {
        let mode = if i % 2 == 0 {
            Mode::Assembled
        } else {
            Mode::Dispersed
        };
        scene.advance(mode, elapsed, FRAME);
        elapsed += FRAME;
    }

    for (p, (s, t)) in scene.foliage.particles().iter().zip(&foliage_before) {
        assert_eq!(p.scatter_pos, *s);
        assert_eq!(p.tree_pos, *t);
    }
    for (o, (s, t)) in scene.boxes.ornaments().iter().zip(&ornaments_before) {
        assert_eq!(o.scatter_pos, *s);
        assert_eq!(o.tree_pos, *t);
    }
}

#[test]
fn test_zero_counts_are_a_no_op() {
    let mut scene = Scene::new(
        SceneConfig::new()
            .with_foliage_count(0)
            .with_ornament_counts(0, 0),
    );
    for frame in 0..10 {
        scene.advance(Mode::Assembled, frame as f32 * FRAME, FRAME);
    }
    assert!(scene.foliage.vertices().is_empty());
    assert!(scene.boxes.instances().is_empty());
    assert!(scene.spheres.instances().is_empty());
}

#[test]
fn test_resize_regenerates_all_records() {
    let mut scene = test_scene();
    scene.set_foliage_count(50);
    assert_eq!(scene.foliage.len(), 50);
    for p in scene.foliage.particles() {
        assert!(p.scatter_pos.is_finite());
        assert!(p.tree_pos.is_finite());
        assert!((0.2..0.8).contains(&p.size));
    }

    scene.set_ornament_counts(7, 9);
    assert_eq!(scene.boxes.len(), 7);
    assert_eq!(scene.spheres.len(), 9);
    for o in scene.boxes.ornaments().iter().chain(scene.spheres.ornaments()) {
        assert!((0.15..0.55).contains(&o.scale));
        assert_eq!(o.position, o.scatter_pos);
    }
}

#[test]
fn test_fixed_delta_clock_drives_deterministic_progress() {
    let mut time = Time::new();
    time.set_fixed_delta(Some(FRAME));

    let mut scene = test_scene();
    for _ in 0..120 {
        let (elapsed, delta) = time.update();
        scene.advance(Mode::Assembled, elapsed, delta);
    }
    // Two seconds at lambda 1.2: progress = 1 - exp(-2.4).
    let expected = 1.0 - (-2.4f32).exp();
    assert!(
        (scene.foliage.progress() - expected).abs() < 1e-2,
        "progress {} vs expected {}",
        scene.foliage.progress(),
        expected
    );
}
