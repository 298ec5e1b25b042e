//! Tests for 2x2 matrices, vectors and the eigen-decomposition.

use approx::assert_relative_eq;
use mathviz_kernel::math::eigen::discriminant;
use mathviz_kernel::math::{
    determinant, dot_product_report, eigen, multiply, EigenResult, Matrix2x2, TransformPreset,
    Vector2,
};
use mathviz_kernel::KernelError;

fn assert_eigenpair(m: &Matrix2x2, lambda: f64, v: Vector2) {
    let mv = m.apply(v);
    assert!(
        mv.approx_eq(&v.scale(lambda), 1e-9),
        "M v = {} but λ v = {}",
        mv,
        v.scale(lambda)
    );
    assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
}

// ----------------------------------------------------------------------------
// Products and determinants
// ----------------------------------------------------------------------------

#[test]
fn test_multiply() {
    let a = Matrix2x2::new(1.0, 2.0, 3.0, 4.0);
    let b = Matrix2x2::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(multiply(&a, &b), Matrix2x2::new(19.0, 22.0, 43.0, 50.0));
    assert_eq!(a * b, multiply(&a, &b));
    assert_eq!(multiply(&a, &Matrix2x2::IDENTITY), a);
}

#[test]
fn test_determinant_is_multiplicative() {
    let a = Matrix2x2::new(1.0, 2.0, 3.0, 4.0);
    let b = Matrix2x2::new(0.5, -1.0, 2.0, 3.0);
    assert_relative_eq!(determinant(&a), -2.0);
    assert_relative_eq!(
        determinant(&multiply(&a, &b)),
        determinant(&a) * determinant(&b),
        epsilon = 1e-12
    );
}

#[test]
fn test_transform_summary_flags_reflection() {
    let summary = TransformPreset::Reflect.matrix().summary();
    assert_relative_eq!(summary.determinant, -1.0);
    assert_relative_eq!(summary.area_scale, 1.0);
    assert!(summary.orientation_flipped);

    let scale = TransformPreset::Scale.matrix().summary();
    assert_relative_eq!(scale.area_scale, 4.0);
    assert!(!scale.orientation_flipped);
}

#[test]
fn test_unit_square_image_uses_columns() {
    let m = Matrix2x2::new(1.0, 0.5, 0.0, 1.0);
    let corners = m.unit_square_image();
    assert_eq!(corners[0], Vector2::ZERO);
    assert_eq!(corners[1], Vector2::new(1.0, 0.0));
    assert_eq!(corners[2], Vector2::new(1.5, 1.0));
    assert_eq!(corners[3], Vector2::new(0.5, 1.0));
}

#[test]
fn test_preset_parsing() {
    assert_eq!("Shear".parse::<TransformPreset>().unwrap(), TransformPreset::Shear);
    assert!(matches!(
        "skew".parse::<TransformPreset>(),
        Err(KernelError::UnknownPreset(_))
    ));
}

#[test]
fn test_matrix_display() {
    let m = Matrix2x2::new(2.0, 1.0, 1.0, 2.0);
    assert_eq!(m.to_string(), "[[2.00, 1.00], [1.00, 2.00]]");
    assert_eq!(format!("{:.0}", m), "[[2, 1], [1, 2]]");
}

// ----------------------------------------------------------------------------
// Vectors
// ----------------------------------------------------------------------------

#[test]
fn test_dot_product_report() {
    let report = dot_product_report(&Vector2::new(3.0, 0.0), &Vector2::new(0.0, 2.0));
    assert_relative_eq!(report.dot, 0.0);
    assert_relative_eq!(report.norm_a, 3.0);
    assert_relative_eq!(report.norm_b, 2.0);
    assert_relative_eq!(report.angle_degrees.unwrap(), 90.0, epsilon = 1e-12);
}

#[test]
fn test_angle_with_zero_vector_is_undefined() {
    let report = dot_product_report(&Vector2::ZERO, &Vector2::UNIT_X);
    assert!(report.angle_degrees.is_none());
}

#[test]
fn test_parallel_vectors_have_zero_angle() {
    let v = Vector2::new(0.1, 0.7);
    assert_relative_eq!(v.angle_between_degrees(&v.scale(3.0)), 0.0, epsilon = 1e-6);
}

// ----------------------------------------------------------------------------
// Eigen-decomposition
// ----------------------------------------------------------------------------

#[test]
fn test_eigen_symmetric() {
    let m = Matrix2x2::new(2.0, 1.0, 1.0, 2.0);
    match eigen(&m) {
        EigenResult::Real {
            lambda1,
            lambda2,
            v1,
            v2,
        } => {
            assert_relative_eq!(lambda1, 3.0, epsilon = 1e-12);
            assert_relative_eq!(lambda2, 1.0, epsilon = 1e-12);
            assert_eigenpair(&m, lambda1, v1);
            assert_eigenpair(&m, lambda2, v2);
            let s = std::f64::consts::FRAC_1_SQRT_2;
            assert!(v1.approx_eq(&Vector2::new(s, s), 1e-12));
            assert!(v2.approx_eq(&Vector2::new(s, -s), 1e-12));
        }
        EigenResult::Complex => panic!("expected real eigenvalues"),
    }
}

#[test]
fn test_eigen_rotation_is_complex() {
    let m = Matrix2x2::new(0.0, -1.0, 1.0, 0.0);
    assert!(discriminant(&m) < 0.0);
    let result = eigen(&m);
    assert!(result.is_complex());
    assert!(result.eigenvalues().is_none());
    assert!(result.eigenvectors().is_none());
}

#[test]
fn test_eigen_values_are_ordered() {
    for m in [
        Matrix2x2::new(4.0, 1.0, 2.0, 3.0),
        Matrix2x2::new(-1.0, 2.0, 0.5, 1.0),
        Matrix2x2::new(3.0, 0.0, 2.0, 1.0),
    ] {
        let (l1, l2) = eigen(&m).eigenvalues().unwrap();
        assert!(l1 >= l2);
        assert_relative_eq!(l1 + l2, m.trace(), epsilon = 1e-12);
        assert_relative_eq!(l1 * l2, m.determinant(), epsilon = 1e-12);
    }
}

#[test]
fn test_eigen_non_symmetric_pairs() {
    for m in [
        Matrix2x2::new(4.0, 1.0, 2.0, 3.0),
        Matrix2x2::new(-1.0, 2.0, 0.5, 1.0),
        Matrix2x2::new(1.0, -3.0, 0.0, 2.0),
    ] {
        let (l1, l2) = eigen(&m).eigenvalues().unwrap();
        let (v1, v2) = eigen(&m).eigenvectors().unwrap();
        assert_eigenpair(&m, l1, v1);
        assert_eigenpair(&m, l2, v2);
    }
}

#[test]
fn test_eigen_lower_triangular() {
    let m = Matrix2x2::new(3.0, 0.0, 2.0, 1.0);
    let (l1, l2) = eigen(&m).eigenvalues().unwrap();
    let (v1, v2) = eigen(&m).eigenvectors().unwrap();
    assert_eigenpair(&m, l1, v1);
    assert_eigenpair(&m, l2, v2);
}

#[test]
fn test_eigen_diagonal_gives_basis_vectors() {
    let m = Matrix2x2::new(1.0, 0.0, 0.0, 3.0);
    let (l1, l2) = eigen(&m).eigenvalues().unwrap();
    let (v1, v2) = eigen(&m).eigenvectors().unwrap();
    assert_relative_eq!(l1, 3.0);
    assert_relative_eq!(l2, 1.0);
    assert_eigenpair(&m, l1, v1);
    assert_eigenpair(&m, l2, v2);
    assert_relative_eq!(v1.dot(&v2), 0.0);
}

#[test]
fn test_eigen_scalar_matrix() {
    let m = Matrix2x2::new(2.0, 0.0, 0.0, 2.0);
    let (v1, v2) = eigen(&m).eigenvectors().unwrap();
    assert_eq!(v1, Vector2::UNIT_X);
    assert_eq!(v2, Vector2::UNIT_Y);
}

#[test]
fn test_eigen_result_serializes_with_kind_tag() {
    let json = serde_json::to_value(eigen(&Matrix2x2::new(0.0, -1.0, 1.0, 0.0))).unwrap();
    assert_eq!(json["kind"], "complex");

    let json = serde_json::to_value(eigen(&Matrix2x2::IDENTITY)).unwrap();
    assert_eq!(json["kind"], "real");
    assert_eq!(json["lambda1"], 1.0);
}
