// =========================================================================
// FALSIFY-MX: Matrix primitives contract
//
// Each test names one algebraic law the Matrix type must satisfy and
// fails with a FALSIFIED message pointing at the law that broke.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
//   - Strang (2016) "Introduction to Linear Algebra", ch. 5 (cofactors)
// =========================================================================

use super::*;

fn sample_3x3() -> Matrix {
    Matrix::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]]).expect("valid")
}

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let mut att = a.clone();
    att.transpose().expect("live").transpose().expect("live");

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001: shape mismatch");
    assert!(att.eq_matrix(&a), "FALSIFIED MX-001: (A^T)^T != A");
}

/// FALSIFY-MX-002: Shape invariant: storage length is rows * cols after every reshape
#[test]
fn falsify_mx_002_storage_matches_shape() {
    let mut m = Matrix::from_vec(3, 5, vec![1.0; 15]).expect("valid");
    let check = |m: &Matrix, step: &str| {
        assert_eq!(
            m.as_slice().len(),
            m.rows() * m.cols(),
            "FALSIFIED MX-002: storage/shape drift after {step}"
        );
    };

    m.transpose().expect("live");
    check(&m, "transpose");
    m.set_rows(7).expect("positive");
    check(&m, "set_rows");
    m.set_cols(2).expect("positive");
    check(&m, "set_cols");
    m.mul_matrix(&Matrix::from_vec(2, 4, vec![1.0; 8]).expect("valid"))
        .expect("compatible dims");
    check(&m, "mul_matrix");
    m.minor(0, 0);
    check(&m, "minor");
}

/// FALSIFY-MX-003: Additive inverse: A + A*(-1) = 0
#[test]
fn falsify_mx_003_additive_inverse() {
    let a = sample_3x3();
    let mut neg = a.clone();
    neg.mul_number(-1.0).expect("live");
    let mut sum = a.clone();
    sum.sum_matrix(&neg).expect("same shape");

    assert!(
        sum.eq_matrix(&Matrix::square(3).expect("valid")),
        "FALSIFIED MX-003: A + (-A) != 0"
    );
}

/// FALSIFY-MX-004: Identity matmul: A * I = A
#[test]
fn falsify_mx_004_identity_matmul() {
    let a = sample_3x3();
    let mut result = a.clone();
    result
        .mul_matrix(&Matrix::identity(3).expect("valid"))
        .expect("compatible dims");

    assert!(result.eq_matrix(&a), "FALSIFIED MX-004: A * I != A");
}

/// FALSIFY-MX-005: Equality boundary: a difference of exactly EPS is unequal, EPS/2 is equal
#[test]
fn falsify_mx_005_eps_boundary() {
    let a = Matrix::square(2).expect("valid");

    let mut at_eps = a.clone();
    at_eps.set(1, 1, EPS).expect("in range");
    assert!(
        !a.eq_matrix(&at_eps),
        "FALSIFIED MX-005: difference of EPS treated as equal"
    );

    let mut half_eps = a.clone();
    half_eps.set(1, 1, EPS / 2.0).expect("in range");
    assert!(
        a.eq_matrix(&half_eps),
        "FALSIFIED MX-005: difference of EPS/2 treated as unequal"
    );
}

/// FALSIFY-MX-006: Resize preserves overlap and zero-fills growth
#[test]
fn falsify_mx_006_resize_round_trip() {
    let original = sample_3x3();
    let mut m = original.clone();
    m.set_rows(5).expect("positive");
    m.set_cols(6).expect("positive");

    for i in 0..5 {
        for j in 0..6 {
            if i >= 3 || j >= 3 {
                assert_eq!(
                    m.get(i, j),
                    Ok(0.0),
                    "FALSIFIED MX-006: grown cell [{i},{j}] not zero"
                );
            }
        }
    }

    m.set_rows(3).expect("positive");
    m.set_cols(3).expect("positive");
    assert_eq!(
        m.as_slice(),
        original.as_slice(),
        "FALSIFIED MX-006: overlap changed across grow/shrink"
    );
}

/// FALSIFY-MX-007: Determinant of identity is 1
#[test]
fn falsify_mx_007_det_identity() {
    for n in 1..=6 {
        let det = Matrix::identity(n).expect("valid").determinant().expect("square");
        assert!(
            (det - 1.0).abs() < EPS,
            "FALSIFIED MX-007: det(I_{n}) = {det}"
        );
    }
}

/// FALSIFY-MX-008: A * A^-1 = I
#[test]
fn falsify_mx_008_inverse_product() {
    let a = sample_3x3();
    let inv = a.inverse_matrix().expect("det = -1");
    let mut product = a.clone();
    product.mul_matrix(&inv).expect("square");

    assert!(
        product.eq_matrix(&Matrix::identity(3).expect("valid")),
        "FALSIFIED MX-008: A * A^-1 != I\n{product}"
    );
}

/// FALSIFY-MX-009: det(A^T) = det(A)
#[test]
fn falsify_mx_009_det_transpose() {
    let a = sample_3x3();
    let at = a.transposed().expect("live");
    let (d, dt) = (
        a.determinant().expect("square"),
        at.determinant().expect("square"),
    );
    assert!((d - dt).abs() < EPS, "FALSIFIED MX-009: {d} != {dt}");
}
