use crate::misc::binomial::pascal_row;
use crate::misc::FloatingPoint;

/// Compute the Bernstein basis weights of a given degree at the parameter `t`,
/// `B_i(t) = C(degree, i) * (1 - t)^(degree - i) * t^i`.
/// Returns `degree + 1` weights that sum to one for any `t` in `[0, 1]`.
/// Intermediates are evaluated in double precision and narrowed on return.
///
/// `t` outside `[0, 1]` is not rejected, the polynomial simply extrapolates.
///
/// # Example
/// ```
/// use bezier_patch::prelude::bernstein_basis;
///
/// let weights = bernstein_basis::<f64>(1, 0.25);
/// assert_eq!(weights, vec![0.75, 0.25]);
/// ```
pub fn bernstein_basis<T: FloatingPoint>(degree: usize, t: T) -> Vec<T> {
    let coefficients = pascal_row(degree);

    let t = t.to_f64().unwrap();
    let inv_t = 1.0 - t;

    (0..=degree)
        .map(|i| {
            let w = coefficients[i] as f64 * inv_t.powi((degree - i) as i32) * t.powi(i as i32);
            T::from_f64(w).unwrap()
        })
        .collect()
}
