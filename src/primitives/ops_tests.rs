use super::*;

fn a() -> Matrix {
    Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).expect("valid")
}

fn b() -> Matrix {
    Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).expect("valid")
}

#[test]
fn test_add_operators() {
    let expected = Matrix::from_rows(&[[6.0, 8.0], [10.0, 12.0]]).expect("valid");
    assert_eq!(&a() + &b(), expected);
    assert_eq!(a() + &b(), expected);
    assert_eq!(a() + b(), expected);

    let mut m = a();
    m += &b();
    assert_eq!(m, expected);
}

#[test]
fn test_add_leaves_operands_untouched() {
    let (x, y) = (a(), b());
    let _sum = &x + &y;
    assert_eq!(x.as_slice(), a().as_slice());
    assert_eq!(y.as_slice(), b().as_slice());
}

#[test]
fn test_sub_operators() {
    let expected = Matrix::from_rows(&[[-4.0, -4.0], [-4.0, -4.0]]).expect("valid");
    assert_eq!(&a() - &b(), expected);
    assert_eq!(a() - b(), expected);

    let mut m = a();
    m -= &b();
    assert_eq!(m, expected);
}

#[test]
fn test_scalar_mul_operators() {
    let expected = Matrix::from_rows(&[[3.0, 6.0], [9.0, 12.0]]).expect("valid");
    assert_eq!(&a() * 3.0, expected);
    assert_eq!(3.0 * &a(), expected);
    assert_eq!(3.0 * a(), expected);

    let mut m = a();
    m *= 3.0;
    assert_eq!(m, expected);
}

#[test]
fn test_matrix_mul_operators() {
    let expected = Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]).expect("valid");
    assert_eq!(&a() * &b(), expected);
    assert_eq!(a() * b(), expected);

    let mut m = a();
    m *= &b();
    assert_eq!(m, expected);
}

#[test]
fn test_matrix_mul_by_itself() {
    let x = a();
    let squared = &x * &x;
    assert_eq!(
        squared,
        Matrix::from_rows(&[[7.0, 10.0], [15.0, 22.0]]).expect("valid")
    );
}

#[test]
fn test_eq_operator_uses_tolerance() {
    let mut close = a();
    close[(0, 0)] += 1e-9;
    assert_eq!(a(), close);
    close[(0, 0)] += 1e-3;
    assert_ne!(a(), close);
}

#[test]
fn test_index() {
    let mut m = a();
    assert_eq!(m[(1, 0)], 3.0);
    m[(1, 0)] = -1.0;
    assert_eq!(m.get(1, 0), Ok(-1.0));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_out_of_range_panics() {
    let m = a();
    let _value: f64 = m[(2, 0)];
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn test_add_mismatch_panics() {
    let _ = &a() + &Matrix::new();
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn test_mul_mismatch_panics() {
    let wide = Matrix::with_shape(2, 3).expect("valid");
    let _ = &wide * &wide;
}

#[test]
#[should_panic(expected = "Invalid state")]
fn test_scalar_mul_empty_panics() {
    let mut m = a();
    let _moved = m.take();
    m *= 2.0;
}

#[test]
#[should_panic(expected = "Index (0, 5) out of range for 2x2 matrix")]
fn test_index_mut_out_of_range_panics() {
    let mut m = a();
    m[(0, 5)] = 1.0;
}
