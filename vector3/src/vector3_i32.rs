use crate::{Vector3, Vector3f64};

pub type Vector3i32 = Vector3<i32>;

use std::fmt;
use std::ops::{Add, Neg, Sub};

impl Vector3i32 {
    pub fn dot_product(&self, other: &Vector3i32) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    // |G|^2 in units of (2pi/a)^2 when G is given in units of 2pi/a
    pub fn norm_squared(&self) -> i32 {
        self.dot_product(self)
    }

    pub fn to_f64(&self) -> Vector3f64 {
        Vector3f64::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl Add<Vector3i32> for Vector3i32 {
    type Output = Vector3i32;

    fn add(self, rhs: Vector3i32) -> Vector3i32 {
        Vector3i32 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub<Vector3i32> for Vector3i32 {
    type Output = Vector3i32;

    fn sub(self, rhs: Vector3i32) -> Vector3i32 {
        Vector3i32 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vector3i32 {
    type Output = Vector3i32;

    fn neg(self) -> Vector3i32 {
        Vector3i32::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3i32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
