use crate::vecmath::Vector2D;

/// A loosely typed argument accepted by the overloaded vector operations
/// (`Vector2D::from_args`, `Vector2D::mul`, `Vector2D::equals`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Vector(Vector2D),
    Text(String),
}

impl Value {
    /// Returns the number if this value is a finite number.
    pub fn as_finite_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector2D> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<Vector2D> for Value {
    fn from(v: Vector2D) -> Self {
        Value::Vector(v)
    }
}

impl From<&Vector2D> for Value {
    fn from(v: &Vector2D) -> Self {
        Value::Vector(*v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Result of `Vector2D::mul`: scaling by a number yields a vector,
/// multiplying by a vector yields the dot product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product {
    Scaled(Vector2D),
    Dot(f64),
}

impl Product {
    pub fn as_vector(&self) -> Option<Vector2D> {
        match self {
            Product::Scaled(v) => Some(*v),
            Product::Dot(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Product::Dot(d) => Some(*d),
            Product::Scaled(_) => None,
        }
    }
}
