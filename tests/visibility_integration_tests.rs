//! Integration tests for the visibility pipeline
//!
//! Drives the public API end to end: camera + probe sources, a scene of
//! tracked objects, and the per-frame visibility pass.

use std::f32::consts::{FRAC_PI_4, PI};

use vista_3d_culling::glam::{Mat4, Vec3};
use vista_3d_culling::vista3d::camera::{Camera, Probe};
use vista_3d_culling::vista3d::frustum::{Frustum, FrustumSource};
use vista_3d_culling::vista3d::scene::{
    BoundingBox, ProbeShading, Scene, SceneObject, VisibilityPass,
};

fn demo_camera() -> Camera {
    let mut camera = Camera::new(Vec3::ZERO, Vec3::X, Vec3::Z);
    camera.set_clip_range(5.0, 30.0);
    camera.set_fov_h_deg(45.0);
    camera.set_aspect(2.0);
    camera
}

// ============================================================================
// END-TO-END CLASSIFICATION SCENARIO
// ============================================================================

#[test]
fn test_integration_camera_classification_scenario() {
    // Camera at the origin looking along +X, near=5, far=30, fov_h=45°,
    // aspect=2. Unit-half-extent boxes at three positions.
    let camera = demo_camera();
    let probe = Probe::new(Vec3::new(-10.0, 0.0, 14.0), 5.0, 30.0, 45.0, 2.0);

    let mut scene = Scene::new();
    let mid = scene.add_object(SceneObject::new(
        "mid",
        Vec3::new(15.0, 0.0, 0.0),
        BoundingBox::new(Vec3::ONE),
    ));
    let far_out = scene.add_object(SceneObject::new(
        "far_out",
        Vec3::new(100.0, 0.0, 0.0),
        BoundingBox::new(Vec3::ONE),
    ));
    let at_camera = scene.add_object(SceneObject::new(
        "at_camera",
        Vec3::ZERO,
        BoundingBox::new(Vec3::ONE),
    ));

    let report = VisibilityPass::new().run(&mut scene, &camera, &probe);

    assert_eq!(report.total, 3);
    assert_eq!(report.visible, 1);

    assert!(scene.object(mid).unwrap().is_visible());
    assert!(!scene.object(far_out).unwrap().is_visible());
    assert!(!scene.object(at_camera).unwrap().is_visible());

    let labels = scene.visible_labels();
    assert_eq!(labels, vec!["mid"]);
}

#[test]
fn test_integration_probe_drives_shading_not_drawing() {
    let camera = demo_camera();
    // Probe colocated with the camera but looking the other way
    let mut probe = Probe::new(Vec3::ZERO, 5.0, 30.0, 45.0, 2.0);
    probe.set_orientation(Mat4::from_rotation_z(PI));

    let mut scene = Scene::new();
    let ahead = scene.add_object(SceneObject::new(
        "ahead",
        Vec3::new(15.0, 0.0, 0.0),
        BoundingBox::new(Vec3::ONE),
    ));
    let behind = scene.add_object(SceneObject::new(
        "behind",
        Vec3::new(-15.0, 0.0, 0.0),
        BoundingBox::new(Vec3::ONE),
    ));

    VisibilityPass::new().run(&mut scene, &camera, &probe);

    // Camera sees "ahead", probe sees "behind"; shading follows the probe
    // while drawing follows the camera
    let a = scene.object(ahead).unwrap();
    assert!(a.is_visible());
    assert_eq!(a.probe_shading(), ProbeShading::OutsideProbe);

    let b = scene.object(behind).unwrap();
    assert!(!b.is_visible());
    assert_eq!(b.probe_shading(), ProbeShading::InsideProbe);
}

// ============================================================================
// OBJECT RING SWEEP
// ============================================================================

#[test]
fn test_integration_ring_of_objects_partially_visible() {
    // A ring of objects around the camera: those in the forward cone and
    // clip range classify visible, the rest do not. Sanity-checks the
    // orchestration over tens of objects.
    let camera = demo_camera();
    let probe = Probe::new(Vec3::new(-10.0, 0.0, 14.0), 5.0, 30.0, 45.0, 2.0);

    let mut scene = Scene::new();
    let count = 24;
    for i in 0..count {
        let angle = i as f32 * 2.0 * PI / count as f32;
        scene.add_object(SceneObject::new(
            format!("obj{}", i),
            Vec3::new(15.0 * angle.cos(), 15.0 * angle.sin(), 0.0),
            BoundingBox::new(Vec3::ONE),
        ));
    }

    let report = VisibilityPass::new().run(&mut scene, &camera, &probe);

    assert_eq!(report.total, count);
    // The 45° horizontal cone along +X covers a fraction of the ring
    assert!(report.visible > 0);
    assert!(report.visible < count);

    // Every visible object sits in the +X half-space
    for (_, object) in scene.objects() {
        if object.is_visible() {
            assert!(object.position().x > 0.0, "{} should be ahead", object.label());
        }
    }
}

// ============================================================================
// PROBE ROTATION OVER SIMULATED TIME
// ============================================================================

#[test]
fn test_integration_probe_rotation_angle_is_dt_times_rate() {
    let mut probe = Probe::new(Vec3::ZERO, 5.0, 30.0, 45.0, 2.0);
    probe.toggle_rotation();

    // Advance simulated time in uneven frame steps
    let steps = [0.016f32, 0.2, 1.0, 0.5, 0.084];
    let elapsed: f32 = steps.iter().sum();
    for dt in steps {
        probe.advance(dt);
    }

    // Re-derive the look direction from the updated orientation: it must
    // have turned by exactly elapsed * π/4 about the world Z axis
    let expected = elapsed * FRAC_PI_4;
    let look = probe.look();
    let measured = look.y.atan2(look.x);
    assert!((measured - expected).abs() < 1e-4);

    // The up direction rides the rotation axis and stays put
    assert!((probe.normal() - Vec3::Z).length() < 1e-5);
}

#[test]
fn test_integration_rotating_probe_sweeps_objects_in_and_out() {
    let camera = demo_camera();
    let mut probe = Probe::new(Vec3::ZERO, 5.0, 30.0, 45.0, 2.0);

    let mut scene = Scene::new();
    let east = scene.add_object(SceneObject::new(
        "east",
        Vec3::new(15.0, 0.0, 0.0),
        BoundingBox::new(Vec3::ONE),
    ));
    let north = scene.add_object(SceneObject::new(
        "north",
        Vec3::new(0.0, 15.0, 0.0),
        BoundingBox::new(Vec3::ONE),
    ));

    let pass = VisibilityPass::new();

    pass.run(&mut scene, &camera, &probe);
    assert!(scene.object(east).unwrap().is_in_probe());
    assert!(!scene.object(north).unwrap().is_in_probe());

    // Quarter turn (2 seconds at π/4 rad/s): the probe now looks along +Y
    probe.set_rotating(true);
    probe.advance(2.0);
    pass.run(&mut scene, &camera, &probe);
    assert!(!scene.object(east).unwrap().is_in_probe());
    assert!(scene.object(north).unwrap().is_in_probe());

    // Camera-driven visibility never moved
    assert!(scene.object(east).unwrap().is_visible());
    assert!(!scene.object(north).unwrap().is_visible());
}

// ============================================================================
// SYNTHETIC FRUSTUM SOURCE
// ============================================================================

#[test]
fn test_integration_camera_and_raw_params_agree() {
    use vista_3d_culling::vista3d::frustum::FrustumParams;

    let camera = demo_camera();
    let params = FrustumParams {
        position: camera.position(),
        look: camera.look(),
        normal: camera.normal(),
        near: camera.near(),
        far: camera.far(),
        fov_h_deg: camera.fov_h_deg(),
        aspect: camera.aspect(),
    };

    let from_camera = Frustum::from_source(&camera);
    let from_params = Frustum::from_source(&params);

    for p in [
        Vec3::new(15.0, 0.0, 0.0),
        Vec3::new(10.0, 4.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(40.0, 0.0, 0.0),
    ] {
        assert_eq!(from_camera.contains_point(p), from_params.contains_point(p));
    }
}

#[test]
fn test_integration_validation_catches_degenerate_probe() {
    let mut probe = Probe::new(Vec3::ZERO, 5.0, 30.0, 45.0, 2.0);

    assert!(probe.validate().is_ok());
    assert!(Frustum::try_from_source(&probe).is_ok());

    // Collapse the clip range
    probe = Probe::new(Vec3::ZERO, 30.0, 5.0, 45.0, 2.0);
    assert!(Frustum::try_from_source(&probe).is_err());
}
