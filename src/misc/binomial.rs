/// Returns the binomial coefficient of `n` and `k`.
#[allow(unused)]
pub fn binomial(n: usize, k: usize) -> f64 {
    if k == 0 || k == n {
        return 1.;
    } else if n == 0 || k > n {
        return 0.;
    }

    let k = k.min(n - k);
    let mut r = 1.;
    for i in 0..k {
        r = r * (n - i) as f64 / (i + 1) as f64;
    }
    r
}

/// Returns the `n`-th row of Pascal's triangle,
/// the binomial coefficients C(n, 0) ..= C(n, n).
/// The row is built additively so the coefficients stay exact integers.
///
/// # Example
/// ```
/// use bezier_patch::prelude::pascal_row;
/// assert_eq!(pascal_row(4), vec![1, 4, 6, 4, 1]);
/// ```
pub fn pascal_row(n: usize) -> Vec<u64> {
    let mut row = vec![1];
    for _ in 0..n {
        let mut next = vec![1; row.len() + 1];
        for i in 1..row.len() {
            next[i] = row[i - 1] + row[i];
        }
        row = next;
    }
    row
}
