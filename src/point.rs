use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::error::{Result, SolarError};
use crate::vector::Displacement;

/// Azimuth reported when the point lies on the X = 0 side of the Y = 0 line,
/// including the polar axis itself.
pub const AZIMUTH_SENTINEL: f64 = 270.0;

pub const DEFAULT_SIZE: f64 = 20.0;

/// Display color, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// How a translated point is labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Naming {
    /// Use the label as is.
    Label(String),
    /// Append the source point's name: `label<-(source)`.
    Provenance(String),
}

impl Naming {
    fn resolve(&self, source: &str) -> String {
        match self {
            Naming::Label(label) => label.clone(),
            Naming::Provenance(label) => format!("{label}<-({source})"),
        }
    }
}

impl Default for Naming {
    fn default() -> Self {
        Naming::Label("_t".to_string())
    }
}

/// A point of a sun-path diagram or shading scene.
///
/// Azimuth and altitude are measured with respect to the origin. `distant`
/// marks directionally significant points such as sun positions. All
/// derived points are new values; the receiver is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialPoint {
    x: f64,
    y: f64,
    z: f64,
    name: String,
    color: Color,
    distant: bool,
    size: f64,
}

fn check_coordinate(axis: char, value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(SolarError::NonNumericCoordinate { axis });
    }
    Ok(value)
}

/// Division that substitutes a signed infinity for a zero divisor.
fn safe_div(numerator: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        log::warn!("division by zero ({numerator} / {divisor}), substituting infinity");
        f64::INFINITY.copysign(numerator)
    } else {
        numerator / divisor
    }
}

impl SpatialPoint {
    /// Creates an unnamed black point. Fails if a coordinate is NaN.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self::raw(
            check_coordinate('x', x)?,
            check_coordinate('y', y)?,
            check_coordinate('z', z)?,
        ))
    }

    pub fn origin() -> Self {
        Self::raw(0.0, 0.0, 0.0)
    }

    fn raw(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            name: String::new(),
            color: Color::BLACK,
            distant: false,
            size: DEFAULT_SIZE,
        }
    }

    /// Point at `radius` from the origin seen under the given azimuth and
    /// altitude; the inverse of [`azimuth`](Self::azimuth) and
    /// [`altitude`](Self::altitude).
    pub fn from_azimuth_altitude(azimuth: f64, altitude: f64, radius: f64) -> Result<Self> {
        let (az, alt) = (deg_to_rad(azimuth), deg_to_rad(altitude));
        let horizontal = radius * alt.cos();
        Self::new(
            -horizontal * az.sin(),
            -horizontal * az.cos(),
            radius * alt.sin(),
        )
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_distant(mut self, distant: bool) -> Self {
        self.distant = distant;
        self
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_distant(&self) -> bool {
        self.distant
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn set_x(&mut self, value: f64) -> Result<()> {
        self.x = check_coordinate('x', value)?;
        Ok(())
    }

    pub fn set_y(&mut self, value: f64) -> Result<()> {
        self.y = check_coordinate('y', value)?;
        Ok(())
    }

    pub fn set_z(&mut self, value: f64) -> Result<()> {
        self.z = check_coordinate('z', value)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Azimuth of the point in [0°, 360°).
    ///
    /// `atan(x / y)` shifted by 180° for Y > 0, by 360° for Y < 0 and X > 0,
    /// and left as is otherwise. On the Y = 0 line the ratio is undefined:
    /// X > 0 gives 90°, anything else [`AZIMUTH_SENTINEL`].
    ///
    /// The Y = 0 values are a fixed convention, not the limit of the formula:
    /// points just off the line with X > 0 come out near 270°, and X < 0 near
    /// 90°. [`from_azimuth_altitude`](Self::from_azimuth_altitude) follows the
    /// formula, so an azimuth of 90° lands on the -X side.
    pub fn azimuth(&self) -> f64 {
        let (x, y) = (self.x, self.y);
        if y == 0.0 {
            return if x > 0.0 { 90.0 } else { AZIMUTH_SENTINEL };
        }
        let offset = if y > 0.0 {
            180.0
        } else if x > 0.0 {
            360.0
        } else {
            0.0
        };
        normalize_angle(rad_to_deg((x / y).atan()) + offset)
    }

    /// Elevation above the XY plane; 0° at the origin.
    pub fn altitude(&self) -> f64 {
        rad_to_deg(self.z.atan2(self.x.hypot(self.y)))
    }

    pub fn azimuth_altitude(&self) -> (f64, f64) {
        (self.azimuth(), self.altitude())
    }

    pub fn horizontal_projection(&self) -> Self {
        Self::raw(self.x, self.y, 0.0).named(format!("{}_0", self.name))
    }

    /// Translated copy. The result is an ordinary (not distant) point.
    pub fn translate_by_deltas(&self, dx: f64, dy: f64, dz: f64, naming: Naming) -> Self {
        Self::raw(self.x + dx, self.y + dy, self.z + dz).named(naming.resolve(&self.name))
    }

    pub fn translate_by_vector(&self, displacement: &Displacement, naming: Naming) -> Self {
        self.translate_by_deltas(displacement.x, displacement.y, displacement.z, naming)
    }

    /// Rotation about the Z axis through the origin. Positive angles turn
    /// counter-clockwise, i.e. +Y toward -X. Z is unchanged.
    pub fn rotate_about_origin(&self, angle: f64) -> Self {
        let (sin, cos) = deg_to_rad(angle).sin_cos();
        let mut rotated = Self::raw(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
        .named(format!("{}_rot({})", self.name, angle));
        rotated.distant = self.distant;
        rotated
    }

    /// Rotation about a vertical axis through `pivot`: the point is moved so
    /// the pivot sits at the origin, rotated there and moved back.
    pub fn rotate_about(&self, pivot: &SpatialPoint, angle: f64) -> Self {
        let shift = Displacement::of_point(pivot);
        let mut rotated = self
            .translate_by_vector(&-shift, Naming::default())
            .rotate_about_origin(angle)
            .translate_by_vector(&shift, Naming::default())
            .named(format!("{}_rot({})", self.name, angle))
            .with_color(Color::BLUE);
        rotated.distant = self.distant;
        rotated
    }

    pub fn distance(&self, other: &SpatialPoint) -> f64 {
        Displacement::between(self, other).length()
    }

    pub fn midpoint(&self, other: &SpatialPoint) -> Self {
        let [x, y, z] =
            ((Displacement::of_point(self) + Displacement::of_point(other)) * 0.5).to_array();
        Self::raw(x, y, z).named("midP")
    }

    /// Evenly spaced points from `self` to `other`, both included. A `steps`
    /// of zero is treated as one.
    pub fn interpolated_range(&self, other: &SpatialPoint, steps: usize) -> PointRange {
        PointRange {
            start: self.clone(),
            end: other.clone(),
            steps: steps.max(1),
            next: 0,
        }
    }

    /// This point's azimuth together with the angle between the two
    /// position vectors. `None` when either point is at the origin.
    pub fn angle_between(&self, other: &SpatialPoint) -> Option<(f64, f64)> {
        let (a, b) = (Displacement::of_point(self), Displacement::of_point(other));
        let magnitudes = a.length() * b.length();
        if magnitudes == 0.0 || !magnitudes.is_finite() {
            return None;
        }
        let cos = (a.dot(b) / magnitudes).clamp(-1.0, 1.0);
        Some((self.azimuth(), rad_to_deg(cos.acos())))
    }

    /// Coordinate-wise `1 / c`, with a signed infinity for zero coordinates.
    pub fn reciprocal(&self) -> Self {
        self.map(|c| safe_div(1.0, c)).named(format!("inv{}", self.name))
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::raw(f(self.x), f(self.y), f(self.z))
    }

    fn zip_with(&self, other: &SpatialPoint, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::raw(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }
}

impl Default for SpatialPoint {
    fn default() -> Self {
        Self::origin()
    }
}

impl TryFrom<[f64; 3]> for SpatialPoint {
    type Error = SolarError;

    fn try_from(coords: [f64; 3]) -> Result<Self> {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl From<&SpatialPoint> for [f64; 3] {
    fn from(point: &SpatialPoint) -> Self {
        point.coords()
    }
}

impl Index<usize> for SpatialPoint {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("SpatialPoint index out of range: {index}"),
        }
    }
}

impl fmt::Display for SpatialPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point {:5} = ({:.2}, {:.2}, {:.2}), {}",
            self.name,
            self.x,
            self.y,
            self.z,
            if self.distant { "distant" } else { "not distant" }
        )
    }
}

// Elementwise arithmetic between points, or between a point and a scalar.
// Results are unnamed ordinary points.
macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<&SpatialPoint> for &SpatialPoint {
            type Output = SpatialPoint;
            fn $method(self, rhs: &SpatialPoint) -> SpatialPoint {
                self.zip_with(rhs, $op)
            }
        }

        impl $trait<SpatialPoint> for SpatialPoint {
            type Output = SpatialPoint;
            fn $method(self, rhs: SpatialPoint) -> SpatialPoint {
                (&self).$method(&rhs)
            }
        }

        impl $trait<f64> for &SpatialPoint {
            type Output = SpatialPoint;
            fn $method(self, rhs: f64) -> SpatialPoint {
                let op = $op;
                self.map(|c| op(c, rhs))
            }
        }

        impl $trait<f64> for SpatialPoint {
            type Output = SpatialPoint;
            fn $method(self, rhs: f64) -> SpatialPoint {
                (&self).$method(rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, |a: f64, b: f64| a + b);
impl_elementwise_op!(Sub, sub, |a: f64, b: f64| a - b);
impl_elementwise_op!(Mul, mul, |a: f64, b: f64| a * b);
impl_elementwise_op!(Div, div, safe_div);

impl Neg for &SpatialPoint {
    type Output = SpatialPoint;
    fn neg(self) -> SpatialPoint {
        self.map(|c| -c).named(format!("{}_neg", self.name))
    }
}

impl Neg for SpatialPoint {
    type Output = SpatialPoint;
    fn neg(self) -> SpatialPoint {
        -&self
    }
}

/// Lazy sequence produced by [`SpatialPoint::interpolated_range`].
#[derive(Debug, Clone)]
pub struct PointRange {
    start: SpatialPoint,
    end: SpatialPoint,
    steps: usize,
    next: usize,
}

impl Iterator for PointRange {
    type Item = SpatialPoint;

    fn next(&mut self) -> Option<SpatialPoint> {
        let i = self.next;
        if i > self.steps {
            return None;
        }
        self.next += 1;
        let point = if i == 0 {
            self.start.clone()
        } else if i == self.steps {
            self.end.clone()
        } else {
            let t = i as f64 / self.steps as f64;
            let step = Displacement::between(&self.start, &self.end) * t;
            let [x, y, z] = (Displacement::of_point(&self.start) + step).to_array();
            SpatialPoint::raw(x, y, z).named("P")
        };
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PointRange {}
