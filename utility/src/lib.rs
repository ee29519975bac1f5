use matrix::Matrix;
use rand::{thread_rng, Rng};
use std::cmp::Ordering;
use types::c64;
use vector3::*;

pub fn dot_product_v3i32_v3f64(g: Vector3i32, r: Vector3f64) -> f64 {
    f64::from(g.x) * r.x + f64::from(g.y) * r.y + f64::from(g.z) * r.z
}

pub fn argsort_by_key<T, K: Ord>(v: &[T], key: impl Fn(&T) -> K) -> Vec<usize> {
    let mut idx = (0..v.len()).collect::<Vec<_>>();

    idx.sort_by(|&i, &j| match key(&v[i]).cmp(&key(&v[j])) {
        Ordering::Equal => i.cmp(&j),
        other => other,
    });

    idx
}

pub fn is_sorted_ascending(v: &[f64]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

// deterministic Hermitian test matrix with a spread-out diagonal
pub fn make_matrix(n: usize) -> Matrix<c64> {
    let mut m = Matrix::<c64>::new(n, n);

    for i in 0..n {
        for j in (i + 1)..n {
            m[[j, i]] = c64 {
                re: 0.1 * i as f64,
                im: 0.001 * j as f64,
            };

            m[[i, j]] = m[[j, i]].conj();
        }
        m[[i, i]] = c64 {
            re: ((i + 1) as f64) * 1.0 - 0.1,
            im: 0.0,
        };
    }

    m
}

pub fn make_rand_hermitian(n: usize) -> Matrix<c64> {
    let mut rng = thread_rng();

    let mut m = Matrix::<c64>::new(n, n);

    for i in 0..n {
        for j in (i + 1)..n {
            m[[i, j]] = c64 {
                re: rng.gen_range(-1.0, 1.0),
                im: rng.gen_range(-1.0, 1.0),
            };

            m[[j, i]] = m[[i, j]].conj();
        }

        m[[i, i]] = c64 {
            re: rng.gen_range(-5.0, 5.0),
            im: 0.0,
        };
    }

    m
}

// uniform random point in the cube [-half, half]^3
pub fn make_rand_vector3(half: f64) -> Vector3f64 {
    let mut rng = thread_rng();

    Vector3f64::new(
        rng.gen_range(-half, half),
        rng.gen_range(-half, half),
        rng.gen_range(-half, half),
    )
}
