use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Ordered pair `(x, y)` of reals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const UNIT_X: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    pub const UNIT_Y: Vector2 = Vector2 { x: 0.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scale(&self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit vector in the same direction, or `fallback` for the zero vector.
    pub fn normalize_or(&self, fallback: Vector2) -> Vector2 {
        let len = self.norm();
        if len == 0.0 {
            return fallback;
        }
        Vector2::new(self.x / len, self.y / len)
    }

    /// Counter-clockwise quarter turn.
    pub fn perpendicular(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    /// Angle between two vectors in degrees. NaN when either is the zero vector.
    pub fn angle_between_degrees(&self, other: &Vector2) -> f64 {
        let denom = self.norm() * other.norm();
        // acos would also yield NaN for 0/0, but rounding can push the
        // cosine just outside [-1, 1] for parallel vectors.
        if denom == 0.0 {
            return f64::NAN;
        }
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }

    pub fn approx_eq(&self, other: &Vector2, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }
}

/// Dot product, magnitudes and enclosed angle of two vectors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DotProductReport {
    pub dot: f64,
    pub norm_a: f64,
    pub norm_b: f64,
    /// `None` when the angle is undefined (a zero vector is involved).
    pub angle_degrees: Option<f64>,
}

pub fn dot_product_report(a: &Vector2, b: &Vector2) -> DotProductReport {
    let angle = a.angle_between_degrees(b);
    DotProductReport {
        dot: a.dot(b),
        norm_a: a.norm(),
        norm_b: b.norm(),
        angle_degrees: if angle.is_nan() { None } else { Some(angle) },
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Index<usize> for Vector2 {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of bounds: {}", index),
        }
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from(value: (f64, f64)) -> Self {
        Vector2::new(value.0, value.1)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(value: Vector2) -> Self {
        (value.x, value.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
