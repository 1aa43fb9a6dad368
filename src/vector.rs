use std::ops::{Add, Mul, Neg};

use crate::point::SpatialPoint;

/// A displacement in 3D space, used to translate points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Displacement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Displacement {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Displacement leading from `from` to `to`.
    #[must_use]
    pub fn between(from: &SpatialPoint, to: &SpatialPoint) -> Self {
        Self::new(to.x() - from.x(), to.y() - from.y(), to.z() - from.z())
    }

    /// Position vector of a point relative to the origin.
    #[must_use]
    pub fn of_point(point: &SpatialPoint) -> Self {
        Self::new(point.x(), point.y(), point.z())
    }

    #[must_use]
    pub const fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Displacement {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Displacement {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Displacement {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
