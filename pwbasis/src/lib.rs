use vector3::*;

// Primitive reciprocal vectors of the fcc lattice in units of 2pi/a.
pub const FCC_RECIPROCAL: [Vector3i32; 3] = [
    Vector3i32 { x: -1, y: 1, z: 1 },
    Vector3i32 { x: 1, y: -1, z: 1 },
    Vector3i32 { x: 1, y: 1, z: -1 },
];

// Plane-wave basis {G : |G|^2 <= max_g2}, G in units of 2pi/a.
//
// The set depends only on the cutoff, not on k, so one basis serves every
// k-point of a run. Vectors are ordered by |G|^2, then lexicographically.
#[derive(Debug, Default, Clone)]
pub struct PWBasis {
    max_g2: u32,
    miller: Vec<Vector3i32>, // coefficients on FCC_RECIPROCAL
    g: Vec<Vector3i32>,      // cartesian components
    g2: Vec<i32>,
}

impl PWBasis {
    pub fn new(max_g2: u32) -> PWBasis {
        let n = (f64::from(max_g2)).sqrt() as i32 + 1;

        let mut t_miller = Vec::new();
        let mut t_g = Vec::new();

        for i in -n..=n {
            for j in -n..=n {
                for k in -n..=n {
                    let g = miller_to_cart(i, j, k);

                    if g.norm_squared() as u32 <= max_g2 {
                        t_miller.push(Vector3i32::new(i, j, k));
                        t_g.push(g);
                    }
                }
            }
        }

        let ordered_index = utility::argsort_by_key(&t_g, |g| (g.norm_squared(), g.x, g.y, g.z));

        let miller: Vec<Vector3i32> = ordered_index.iter().map(|&i| t_miller[i]).collect();
        let g: Vec<Vector3i32> = ordered_index.iter().map(|&i| t_g[i]).collect();
        let g2: Vec<i32> = g.iter().map(|v| v.norm_squared()).collect();

        PWBasis {
            max_g2,
            miller,
            g,
            g2,
        }
    }

    pub fn get_max_g2(&self) -> u32 {
        self.max_g2
    }

    pub fn get_n_plane_waves(&self) -> usize {
        self.g.len()
    }

    pub fn get_miller(&self) -> &[Vector3i32] {
        &self.miller
    }

    pub fn get_g(&self) -> &[Vector3i32] {
        &self.g
    }

    pub fn get_g2(&self) -> &[i32] {
        &self.g2
    }

    pub fn index_of(&self, g: Vector3i32) -> Option<usize> {
        self.g.iter().position(|x| *x == g)
    }

    // (|G|^2, number of vectors) per shell, ascending
    pub fn get_shells(&self) -> Vec<(i32, usize)> {
        let mut shells: Vec<(i32, usize)> = Vec::new();

        for &g2 in self.g2.iter() {
            match shells.last_mut() {
                Some(last) if last.0 == g2 => last.1 += 1,
                _ => shells.push((g2, 1)),
            }
        }

        shells
    }

    pub fn display(&self) {
        println!("   {:-^80}", " plane-wave basis ");
        println!();
        println!("   {:<24} = {:>16}", "max |G|^2", self.max_g2);
        println!("   {:<24} = {:>16}", "n_plane_waves", self.get_n_plane_waves());
        println!();
        println!("   {:>8} {:>8} {:>8}", "|G|^2", "count", "total");

        let mut total = 0;

        for (g2, count) in self.get_shells() {
            total += count;
            println!("   {:>8} {:>8} {:>8}", g2, count, total);
        }

        println!();
    }
}

// G = i b1 + j b2 + k b3
fn miller_to_cart(i: i32, j: i32, k: i32) -> Vector3i32 {
    let [a, b, c] = FCC_RECIPROCAL;

    Vector3i32::new(
        i * a.x + j * b.x + k * c.x,
        i * a.y + j * b.y + k * c.y,
        i * a.z + j * b.z + k * c.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_size_per_cutoff() {
        let expected = [
            (0, 1),
            (3, 9),
            (4, 15),
            (8, 27),
            (11, 51),
            (12, 59),
            (16, 65),
            (19, 89),
            (20, 113),
        ];

        for &(max_g2, npw) in expected.iter() {
            assert_eq!(PWBasis::new(max_g2).get_n_plane_waves(), npw, "max_g2 = {}", max_g2);
        }
    }

    #[test]
    fn test_basis_ordering_and_shells() {
        let basis = PWBasis::new(11);

        assert_eq!(basis.get_g()[0], Vector3i32::zeros());

        let g2 = basis.get_g2();
        assert!(g2.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(basis.get_shells(), vec![(0, 1), (3, 8), (4, 6), (8, 12), (11, 24)]);
    }

    #[test]
    fn test_basis_is_inversion_symmetric() {
        let basis = PWBasis::new(20);

        for g in basis.get_g() {
            assert!(basis.index_of(-*g).is_some(), "missing -G for {}", g);
        }
    }

    #[test]
    fn test_miller_matches_cartesian() {
        let basis = PWBasis::new(19);

        for (m, g) in basis.get_miller().iter().zip(basis.get_g()) {
            assert_eq!(miller_to_cart(m.x, m.y, m.z), *g);

            // fcc reciprocal vectors have all-odd or all-even components
            let parity = g.x.rem_euclid(2);
            assert_eq!(g.y.rem_euclid(2), parity);
            assert_eq!(g.z.rem_euclid(2), parity);
        }
    }
}
