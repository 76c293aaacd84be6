//! Tests for boundary validation.

use super::*;

fn square_boundary() -> Boundary {
    Boundary::new(
        vec![
            BoundaryVertex::planar(0.0, 0.0, 2.0),
            BoundaryVertex::planar(1.0, 0.0, 1.5),
            BoundaryVertex::planar(2.0, 0.0, 1.5),
        ],
        vec![
            BoundaryVertex::planar(0.0, 1.0, 0.2),
            BoundaryVertex::planar(0.0, 2.0, 0.2),
        ],
    )
    .expect("valid boundary")
}

#[test]
fn dimensions_follow_arm_lengths() {
    let boundary = square_boundary();
    assert_eq!(boundary.rows(), 3);
    assert_eq!(boundary.cols(), 3);
    assert_eq!(boundary.corner().position, DVec3::ZERO);
}

#[test]
fn column_position_starts_at_corner() {
    let boundary = square_boundary();
    assert_eq!(boundary.column_position(0), DVec3::ZERO);
    assert_eq!(boundary.column_position(2), DVec3::new(0.0, 2.0, 0.0));
}

#[test]
fn short_horizontal_arm_is_rejected() {
    let err = Boundary::new(
        vec![BoundaryVertex::planar(0.0, 0.0, 1.0)],
        vec![BoundaryVertex::planar(0.0, 1.0, 1.0)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        BoundaryError::TooFewVertices {
            arm: Arm::Horizontal,
            count: 1,
            min: 2
        }
    );
}

#[test]
fn empty_vertical_arm_is_rejected() {
    let err = Boundary::new(
        vec![
            BoundaryVertex::planar(0.0, 0.0, 1.0),
            BoundaryVertex::planar(1.0, 0.0, 1.0),
        ],
        vec![],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        BoundaryError::TooFewVertices {
            arm: Arm::Vertical,
            ..
        }
    ));
}

#[test]
fn non_finite_vertex_is_rejected() {
    let err = Boundary::new(
        vec![
            BoundaryVertex::planar(0.0, 0.0, 1.0),
            BoundaryVertex::planar(1.0, 0.0, 1.0),
        ],
        vec![BoundaryVertex::planar(0.0, 1.0, f64::NAN)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        BoundaryError::NonFinite {
            arm: Arm::Vertical,
            index: 0
        }
    );
    assert!(err.to_string().contains("vertical"));
}

#[test]
fn translate_moves_both_arms() {
    let mut boundary = square_boundary();
    boundary.translate(DVec3::new(1.0, -1.0, 0.0));
    assert_eq!(boundary.corner().position, DVec3::new(1.0, -1.0, 0.0));
    assert_eq!(boundary.vertical()[1].position, DVec3::new(1.0, 1.0, 0.0));
}

#[test]
fn boundary_loads_from_json() {
    let json = r#"{
        "horizontal": [
            {"position": [0.0, 0.0, 0.0], "ray_angle": 2.0},
            {"position": [1.0, 0.0, 0.0], "ray_angle": 1.5}
        ],
        "vertical": [
            {"position": [0.0, 1.0, 0.0], "ray_angle": 0.2}
        ]
    }"#;
    let boundary: Boundary = serde_json::from_str(json).unwrap();
    assert_eq!(boundary.cols(), 2);
    assert_eq!(boundary.horizontal()[1].ray_angle, 1.5);
}

#[test]
fn invalid_json_boundary_reports_validation_error() {
    let json = r#"{"horizontal": [{"position": [0.0, 0.0, 0.0], "ray_angle": 2.0}], "vertical": []}"#;
    let err = serde_json::from_str::<Boundary>(json).unwrap_err();
    assert!(err.to_string().contains("horizontal boundary has 1 vertices"));
}
