use crate::KptsError;
use vector3::Vector3f64;

// High-symmetry points of the fcc Brillouin zone, units of 2pi/a.
pub const FCC_POINTS: [(&str, [f64; 3]); 6] = [
    ("G", [0.0, 0.0, 0.0]),
    ("X", [1.0, 0.0, 0.0]),
    ("L", [0.5, 0.5, 0.5]),
    ("W", [1.0, 0.5, 0.0]),
    ("K", [0.75, 0.75, 0.0]),
    ("U", [1.0, 0.25, 0.25]),
];

// "Gamma" and "Γ" are accepted for G
pub fn high_symmetry_point(label: &str) -> Result<Vector3f64, KptsError> {
    let key = match label {
        "Gamma" | "GAMMA" | "gamma" | "Γ" => "G",
        other => other,
    };

    FCC_POINTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, xk)| Vector3f64::from(*xk))
        .ok_or_else(|| KptsError::UnknownLabel(label.to_string()))
}
