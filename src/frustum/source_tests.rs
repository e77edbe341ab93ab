use glam::Vec3;
use crate::error::Error;
use super::*;

fn valid_params() -> FrustumParams {
    FrustumParams {
        position: Vec3::new(1.0, 2.0, 3.0),
        look: Vec3::X,
        normal: Vec3::Z,
        near: 5.0,
        far: 30.0,
        fov_h_deg: 45.0,
        aspect: 2.0,
    }
}

// ============================================================================
// FrustumParams as a FrustumSource
// ============================================================================

#[test]
fn test_params_expose_their_fields() {
    let params = valid_params();
    let source: &dyn FrustumSource = &params;

    assert_eq!(source.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(source.look_direction(), Vec3::X);
    assert_eq!(source.normal_direction(), Vec3::Z);
    assert_eq!(source.near_distance(), 5.0);
    assert_eq!(source.far_distance(), 30.0);
    assert_eq!(source.horizontal_fov_deg(), 45.0);
    assert_eq!(source.aspect_ratio(), 2.0);
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_accepts_valid_params() {
    assert!(valid_params().validate().is_ok());
}

#[test]
fn test_validate_rejects_non_positive_aspect() {
    let mut params = valid_params();
    params.aspect = 0.0;
    assert!(matches!(params.validate(), Err(Error::InvalidAspectRatio(_))));

    params.aspect = -1.5;
    assert!(matches!(params.validate(), Err(Error::InvalidAspectRatio(_))));
}

#[test]
fn test_validate_rejects_out_of_range_fov() {
    let mut params = valid_params();
    params.fov_h_deg = 0.0;
    assert!(matches!(params.validate(), Err(Error::InvalidFieldOfView(_))));

    params.fov_h_deg = 180.0;
    assert!(matches!(params.validate(), Err(Error::InvalidFieldOfView(_))));

    params.fov_h_deg = 179.9;
    assert!(params.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_clip_range() {
    let mut params = valid_params();
    params.near = 0.0;
    assert!(matches!(params.validate(), Err(Error::InvalidClipRange(_))));

    params.near = 10.0;
    params.far = 10.0;
    assert!(matches!(params.validate(), Err(Error::InvalidClipRange(_))));

    params.far = 5.0;
    assert!(matches!(params.validate(), Err(Error::InvalidClipRange(_))));
}

#[test]
fn test_validate_rejects_zero_directions() {
    let mut params = valid_params();
    params.look = Vec3::ZERO;
    assert!(matches!(params.validate(), Err(Error::DegenerateDirection(_))));

    params.look = Vec3::X;
    params.normal = Vec3::ZERO;
    assert!(matches!(params.validate(), Err(Error::DegenerateDirection(_))));
}

#[test]
fn test_validate_rejects_parallel_directions() {
    let mut params = valid_params();
    params.normal = Vec3::X;
    assert!(matches!(params.validate(), Err(Error::DegenerateDirection(_))));

    // Anti-parallel is just as degenerate
    params.normal = -Vec3::X * 2.0;
    assert!(matches!(params.validate(), Err(Error::DegenerateDirection(_))));
}

#[test]
fn test_validate_accepts_non_unit_directions() {
    // Directions are normalized at construction; length must not matter
    let mut params = valid_params();
    params.look = Vec3::X * 17.0;
    params.normal = Vec3::Z * 0.01;
    assert!(params.validate().is_ok());
}
