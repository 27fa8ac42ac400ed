use ndarray::Array2;

pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// Full pairwise distance matrix over a set of 2D points.
///
/// Symmetric with a zero diagonal; O(n^2) time and space, which is fine at
/// the few-thousand-point scale this simulator targets.
pub fn distance_matrix(points: &[(f64, f64)]) -> Array2<f64> {
    let n = points.len();
    let mut matrix = Array2::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            let dist = euclidean(points[i], points[j]);
            matrix[[i, j]] = dist;
            matrix[[j, i]] = dist;
        }
    }
    matrix
}
