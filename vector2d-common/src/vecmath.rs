use crate::error::ArgumentError;
use crate::value::{Product, Value};
use log::debug;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An immutable 2D vector.
///
/// Components are only readable; every transforming operation returns a new vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    /// Creates a new vector, rejecting non-finite components.
    pub fn new(x: f64, y: f64) -> Result<Self, ArgumentError> {
        if !x.is_finite() || !y.is_finite() {
            debug!("Rejected non-finite components ({}, {})", x, y);
            return Err(ArgumentError::NonNumeric);
        }
        Ok(Self::raw(x, y))
    }

    /// Builds a vector from loosely typed arguments.
    ///
    /// Accepts either a single vector (copy) or two numbers. Anything past the
    /// second argument is ignored.
    pub fn from_args(args: &[Value]) -> Result<Self, ArgumentError> {
        match args {
            [] => Err(ArgumentError::MissingParameter),
            [Value::Vector(v)] => Ok(Self::from_vector(v)),
            [other] => {
                debug!("Rejected single non-vector argument {:?}", other);
                Err(ArgumentError::NotAVector)
            }
            [x, y, ..] => match (x.as_finite_number(), y.as_finite_number()) {
                (Some(x), Some(y)) => Ok(Self::raw(x, y)),
                _ => {
                    debug!("Rejected non-numeric arguments {:?}, {:?}", x, y);
                    Err(ArgumentError::NonNumeric)
                }
            },
        }
    }

    /// Copy constructor.
    pub fn from_vector(other: &Vector2D) -> Self {
        Self::raw(other.x, other.y)
    }

    /// Creates a zero vector.
    pub fn zero() -> Self {
        Self::raw(0.0, 0.0)
    }

    // Results of arithmetic are not re-validated, see `unit`.
    #[inline(always)]
    fn raw(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline(always)]
    pub fn y(self) -> f64 {
        self.y
    }

    pub fn add(self, other: Vector2D) -> Self {
        Self::raw(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vector2D) -> Self {
        Self::raw(self.x - other.x, self.y - other.y)
    }

    pub fn neg(self) -> Self {
        Self::raw(-self.x, -self.y)
    }

    /// Scales the vector by a scalar value.
    pub fn scale(self, scalar: f64) -> Self {
        Self::raw(self.x * scalar, self.y * scalar)
    }

    /// Calculates the dot product with another vector.
    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Multiplies by a number (scaling) or by a vector (dot product).
    pub fn mul(self, arg: impl Into<Value>) -> Result<Product, ArgumentError> {
        match arg.into() {
            Value::Number(n) => Ok(Product::Scaled(self.scale(n))),
            Value::Vector(v) => Ok(Product::Dot(self.dot(v))),
            other => {
                debug!("Rejected multiplier {:?}", other);
                Err(ArgumentError::InvalidMultiplier)
            }
        }
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns the vector scaled to length 1.
    ///
    /// The zero vector has no direction; its unit vector has NaN components.
    pub fn unit(self) -> Self {
        let norm = self.norm();
        Self::raw(self.x / norm, self.y / norm)
    }

    /// Rotates counter-clockwise by `theta` radians.
    pub fn rotate(self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::raw(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Angle from the positive x axis in radians, in (-pi, pi].
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Exact component-wise comparison. Non-vectors never compare equal.
    pub fn equals(self, other: impl Into<Value>) -> bool {
        self.equals_within(other, 0.0)
    }

    /// Component-wise comparison allowing an absolute difference of `epsilon`.
    pub fn equals_within(self, other: impl Into<Value>, epsilon: f64) -> bool {
        match other.into() {
            Value::Vector(v) => (self.x - v.x).abs() <= epsilon && (self.y - v.y).abs() <= epsilon,
            _ => false,
        }
    }

    /// Converts degrees to radians.
    pub fn rad(degrees: f64) -> f64 {
        degrees * PI / 180.0
    }

    /// Converts radians to degrees.
    pub fn deg(radians: f64) -> f64 {
        radians * 180.0 / PI
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Implement standard operators for convenience
impl Add for Vector2D {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::raw(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::raw(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;
    fn neg(self) -> Self {
        Self::raw(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    fn mul(self, vector: Vector2D) -> Vector2D {
        vector.scale(self)
    }
}

/// `a * b` between two vectors is the dot product.
impl Mul for Vector2D {
    type Output = f64;
    fn mul(self, other: Self) -> f64 {
        self.dot(other)
    }
}
