#![no_main]

use dense_matrix::Matrix;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the shape, the rest become element values.
    // Targets: shape validation, resize bookkeeping, cofactor recursion
    if data.len() < 2 {
        return;
    }
    let rows = usize::from(data[0] % 6);
    let cols = usize::from(data[1] % 6);
    let values: Vec<f64> = data[2..]
        .iter()
        .map(|&b| f64::from(b as i8) / 8.0)
        .cycle()
        .take(rows * cols)
        .collect();

    let Ok(mut m) = Matrix::from_vec(rows, cols, values) else {
        return;
    };

    let _ = m.determinant();
    let _ = m.calc_complements();
    if let Ok(inv) = m.inverse_matrix() {
        assert_eq!(inv.shape(), m.shape());
    }

    let copy = m.clone();
    let _ = m.mul_matrix(&copy);
    let _ = m.transpose();
    let _ = m.set_rows(rows.max(1) + 1);
    assert_eq!(m.as_slice().len(), m.rows() * m.cols());
});
