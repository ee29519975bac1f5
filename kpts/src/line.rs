use crate::{high_symmetry_point, KptsError, KPTS};
use vector3::*;

// Straight-line path through labelled high-symmetry points.
//
// Each segment carries `n_per_segment` points with both end points included;
// the shared corner of two consecutive segments is stored once.
pub struct KptsLine {
    labels: Vec<String>,
    xk: Vec<Vector3f64>,
    distance: Vec<f64>,
    corners: Vec<usize>,
}

impl KptsLine {
    pub fn new(labels: &[&str], n_per_segment: usize) -> Result<KptsLine, KptsError> {
        if labels.len() < 2 {
            return Err(KptsError::TooFewLabels(labels.len()));
        }

        if n_per_segment < 2 {
            return Err(KptsError::TooFewPoints(n_per_segment));
        }

        let ends = labels
            .iter()
            .map(|s| high_symmetry_point(s))
            .collect::<Result<Vec<Vector3f64>, KptsError>>()?;

        let mut xk = vec![ends[0]];
        let mut corners = vec![0];

        let nseg = (n_per_segment - 1) as f64;

        for w in ends.windows(2) {
            let step = (w[1] - w[0]) / nseg;

            for i in 1..(n_per_segment - 1) {
                xk.push(w[0] + step * i as f64);
            }

            xk.push(w[1]);

            corners.push(xk.len() - 1);
        }

        let mut distance = Vec::with_capacity(xk.len());
        distance.push(0.0);

        for i in 1..xk.len() {
            let d = distance[i - 1] + (xk[i] - xk[i - 1]).norm2();
            distance.push(d);
        }

        Ok(KptsLine {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            xk,
            distance,
            corners,
        })
    }

    // "L G X W K G" or "L-G-X"
    pub fn from_path(path: &str, n_per_segment: usize) -> Result<KptsLine, KptsError> {
        let labels: Vec<&str> = path
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|s| !s.is_empty())
            .collect();

        KptsLine::new(&labels, n_per_segment)
    }

    pub fn get_labels(&self) -> &[String] {
        &self.labels
    }

    // k-point index of every label along the path
    pub fn get_corners(&self) -> &[usize] {
        &self.corners
    }

    // accumulated path length, units of 2pi/a
    pub fn get_k_distance(&self, k_index: usize) -> f64 {
        self.distance[k_index]
    }
}

impl KPTS for KptsLine {
    fn get_k(&self, k_index: usize) -> Vector3f64 {
        self.xk[k_index]
    }

    fn get_k_weight(&self, _k_index: usize) -> f64 {
        1.0 / self.xk.len() as f64
    }

    fn get_n_kpts(&self) -> usize {
        self.xk.len()
    }

    fn get_positions(&self) -> Vec<Vector3f64> {
        self.xk.clone()
    }

    fn display(&self) {
        println!();
        println!("   {:-^88}", " k-path (2pi/a) ");
        println!();

        println!("{:12} {:^6} {}", "", "path =", self.labels.join("-"));
        println!("{:12} {:^6} {}", "", "nkpt =", self.get_n_kpts());
        println!();

        println!(
            "{:12} {:^6} {:^16} {:^16} {:^16} {:^12} {:^6}",
            "", "index", "kx", "ky", "kz", "distance", "label"
        );

        for ik in 0..self.get_n_kpts() {
            let xk = self.get_k(ik);

            let label = match self.corners.iter().position(|&c| c == ik) {
                Some(i) => self.labels[i].as_str(),
                None => "",
            };

            println!(
                "{:12} {:^6} {:16.12} {:16.12} {:16.12} {:12.6} {:^6}",
                "",
                ik + 1,
                xk.x,
                xk.y,
                xk.z,
                self.get_k_distance(ik),
                label
            );
        }
    }
}
