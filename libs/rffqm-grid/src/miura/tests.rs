//! Tests for the Miura-Ori boundary generator.

use super::*;
use approx::assert_abs_diff_eq;

fn params(horizontal: usize, vertical: usize, theta_degrees: f64) -> MiuraParams {
    MiuraParams {
        horizontal_vertices: horizontal,
        vertical_vertices: vertical,
        theta: theta_degrees.to_radians(),
        horizontal_length: 1.0,
        vertical_length: 1.0,
    }
}

#[test]
fn default_is_five_by_four_at_sixty_degrees() {
    let boundary = MiuraParams::default().generate().unwrap();
    assert_eq!(boundary.cols(), 5);
    assert_eq!(boundary.rows(), 4);
}

#[test]
fn zigzag_alternates_and_is_centred() {
    let boundary = params(5, 4, 60.0).generate().unwrap();
    let h = boundary.horizontal();
    let rise = 60_f64.to_radians().sin();

    assert_abs_diff_eq!(h[0].position.x, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(h[0].position.y, -1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(h[1].position.y - h[0].position.y, rise, epsilon = 1e-12);
    assert_abs_diff_eq!(h[2].position.y, h[0].position.y, epsilon = 1e-12);
    assert_abs_diff_eq!(h[4].position.x, 1.0, epsilon = 1e-12);

    let v = boundary.vertical();
    assert_eq!(v.len(), 3);
    assert_abs_diff_eq!(v[2].position.y, 1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(v[0].position.x, -1.0, epsilon = 1e-12);
}

#[test]
fn ray_angles_follow_theta() {
    let theta = 50_f64.to_radians();
    let boundary = params(4, 3, 50.0).generate().unwrap();
    assert_abs_diff_eq!(boundary.corner().ray_angle, PI - theta, epsilon = 1e-15);
    for vertex in &boundary.horizontal()[1..] {
        assert_eq!(vertex.ray_angle, FRAC_PI_2);
    }
    for vertex in boundary.vertical() {
        assert_eq!(vertex.ray_angle, theta);
    }
}

#[test]
fn even_vertex_count_measures_width_one_step_back() {
    // With 4 zigzag vertices the last one sits on the upper line
    let boundary = params(4, 2, 60.0).generate().unwrap();
    let h = boundary.horizontal();
    assert_abs_diff_eq!(h[0].position.x, -0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(h[2].position.x, 0.5, epsilon = 1e-12);
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(matches!(
        params(1, 4, 60.0).generate(),
        Err(BoundaryError::InvalidParameter {
            name: "horizontal_vertices",
            ..
        })
    ));
    assert!(matches!(
        params(5, 1, 60.0).generate(),
        Err(BoundaryError::InvalidParameter {
            name: "vertical_vertices",
            ..
        })
    ));
    assert!(matches!(
        params(5, 4, 0.0).generate(),
        Err(BoundaryError::InvalidParameter { name: "theta", .. })
    ));
    let mut negative = params(5, 4, 60.0);
    negative.vertical_length = -1.0;
    assert!(negative.generate().is_err());
}
