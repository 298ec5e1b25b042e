use std::fmt;
use std::ops::{Index, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KernelError;
use crate::math::vector::Vector2;

/// 2x2 real matrix `[[a, b], [c, d]]`, stored row-major.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Matrix2x2 {
    pub const IDENTITY: Matrix2x2 = Matrix2x2::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn from_rows(rows: [[f64; 2]; 2]) -> Self {
        Self::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
    }

    pub fn to_rows(&self) -> [[f64; 2]; 2] {
        [[self.a, self.b], [self.c, self.d]]
    }

    pub fn determinant(&self) -> f64 {
        determinant(self)
    }

    pub fn trace(&self) -> f64 {
        self.a + self.d
    }

    /// `M · v`
    pub fn apply(&self, v: Vector2) -> Vector2 {
        Vector2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Image of `(1, 0)`, i.e. the first column.
    pub fn i_hat(&self) -> Vector2 {
        Vector2::new(self.a, self.c)
    }

    /// Image of `(0, 1)`, i.e. the second column.
    pub fn j_hat(&self) -> Vector2 {
        Vector2::new(self.b, self.d)
    }

    pub fn is_diagonal(&self) -> bool {
        self.b == 0.0 && self.c == 0.0
    }

    pub fn summary(&self) -> TransformSummary {
        let det = self.determinant();
        TransformSummary {
            determinant: det,
            area_scale: det.abs(),
            orientation_flipped: det < 0.0,
        }
    }

    /// Corners of the image of the unit square, starting at the origin.
    pub fn unit_square_image(&self) -> [Vector2; 4] {
        let i = self.i_hat();
        let j = self.j_hat();
        [Vector2::ZERO, i, i + j, j]
    }
}

impl Default for Matrix2x2 {
    fn default() -> Self {
        Matrix2x2::IDENTITY
    }
}

/// Standard product, unrolled for the 2x2 case.
pub fn multiply(lhs: &Matrix2x2, rhs: &Matrix2x2) -> Matrix2x2 {
    Matrix2x2::new(
        lhs.a * rhs.a + lhs.b * rhs.c,
        lhs.a * rhs.b + lhs.b * rhs.d,
        lhs.c * rhs.a + lhs.d * rhs.c,
        lhs.c * rhs.b + lhs.d * rhs.d,
    )
}

pub fn determinant(m: &Matrix2x2) -> f64 {
    m.a * m.d - m.b * m.c
}

impl Mul for Matrix2x2 {
    type Output = Matrix2x2;

    fn mul(self, rhs: Matrix2x2) -> Self::Output {
        multiply(&self, &rhs)
    }
}

impl Mul<Vector2> for Matrix2x2 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        self.apply(rhs)
    }
}

impl Index<(usize, usize)> for Matrix2x2 {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match index {
            (0, 0) => &self.a,
            (0, 1) => &self.b,
            (1, 0) => &self.c,
            (1, 1) => &self.d,
            (r, c) => panic!("Matrix2x2 index out of bounds: ({}, {})", r, c),
        }
    }
}

impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        write!(
            f,
            "[[{:.*}, {:.*}], [{:.*}, {:.*}]]",
            p, self.a, p, self.b, p, self.c, p, self.d
        )
    }
}

/// What a linear map does to area and orientation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TransformSummary {
    pub determinant: f64,
    pub area_scale: f64,
    pub orientation_flipped: bool,
}

/// Named transforms offered as starting points in the transform explorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformPreset {
    Identity,
    Scale,
    Rotate,
    Shear,
    Reflect,
}

impl TransformPreset {
    pub const ALL: [TransformPreset; 5] = [
        TransformPreset::Identity,
        TransformPreset::Scale,
        TransformPreset::Rotate,
        TransformPreset::Shear,
        TransformPreset::Reflect,
    ];

    pub fn matrix(&self) -> Matrix2x2 {
        match self {
            TransformPreset::Identity => Matrix2x2::IDENTITY,
            TransformPreset::Scale => Matrix2x2::new(2.0, 0.0, 0.0, 2.0),
            // 45 degrees, rounded the way the slider shows it
            TransformPreset::Rotate => Matrix2x2::new(0.707, -0.707, 0.707, 0.707),
            TransformPreset::Shear => Matrix2x2::new(1.0, 0.5, 0.0, 1.0),
            TransformPreset::Reflect => Matrix2x2::new(-1.0, 0.0, 0.0, 1.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransformPreset::Identity => "identity",
            TransformPreset::Scale => "scale",
            TransformPreset::Rotate => "rotate",
            TransformPreset::Shear => "shear",
            TransformPreset::Reflect => "reflect",
        }
    }
}

impl FromStr for TransformPreset {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TransformPreset::ALL
            .iter()
            .copied()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| KernelError::UnknownPreset(s.to_string()))
    }
}
