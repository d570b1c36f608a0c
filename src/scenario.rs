use crate::config::{build_vector, ComparisonConfig, ScenarioConfig, Step};
use log::{debug, error, info};
use std::fmt;
use vector2d_common::{ArgumentError, Product, Vector2D};

/// The result of evaluating a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Vector(Vector2D),
    Scalar(f64),
    Bool(bool),
}

impl From<Product> for Outcome {
    fn from(product: Product) -> Self {
        match product {
            Product::Scaled(v) => Outcome::Vector(v),
            Product::Dot(d) => Outcome::Scalar(d),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Vector(v) => write!(f, "{}", v),
            Outcome::Scalar(s) => write!(f, "{}", s),
            Outcome::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Results of a whole scenario, in step order.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<Result<Outcome, ArgumentError>>,
    pub failures: usize,
}

/// Evaluates one step. Construction and multiplication errors are returned as-is.
pub fn run_step(step: &Step, comparison: &ComparisonConfig) -> Result<Outcome, ArgumentError> {
    let outcome = match step {
        Step::New { args } => Outcome::Vector(build_vector(args)?),
        Step::Add { lhs, rhs } => Outcome::Vector(build_vector(lhs)?.add(build_vector(rhs)?)),
        Step::Sub { lhs, rhs } => Outcome::Vector(build_vector(lhs)?.sub(build_vector(rhs)?)),
        Step::Neg { of } => Outcome::Vector(build_vector(of)?.neg()),
        Step::Mul { lhs, rhs } => build_vector(lhs)?.mul(rhs.to_value()?)?.into(),
        Step::Norm { of } => Outcome::Scalar(build_vector(of)?.norm()),
        Step::Unit { of } => Outcome::Vector(build_vector(of)?.unit()),
        Step::Rotate { of, radians } => Outcome::Vector(build_vector(of)?.rotate(*radians)),
        Step::Angle { of } => Outcome::Scalar(build_vector(of)?.angle()),
        Step::Equals { lhs, rhs, epsilon } => {
            let epsilon = epsilon.unwrap_or(comparison.default_epsilon);
            Outcome::Bool(build_vector(lhs)?.equals_within(rhs.to_value()?, epsilon))
        }
        Step::Clone { of } => Outcome::Vector(build_vector(of)?.clone()),
        Step::Zero => Outcome::Vector(Vector2D::zero()),
        Step::Rad { degrees } => Outcome::Scalar(Vector2D::rad(*degrees)),
        Step::Deg { radians } => Outcome::Scalar(Vector2D::deg(*radians)),
    };
    Ok(outcome)
}

/// Evaluates every step in order. Failing steps are logged and counted; evaluation continues.
pub fn run(config: &ScenarioConfig) -> Report {
    let mut report = Report::default();

    for (idx, step) in config.steps.iter().enumerate() {
        debug!("Step {}: {:?}", idx + 1, step);
        let result = run_step(step, &config.comparison);
        match &result {
            Ok(outcome) => info!("Step [{}/{}] {} => {}", idx + 1, config.steps.len(), op_name(step), outcome),
            Err(e) => {
                error!("Step [{}/{}] {} failed: {}", idx + 1, config.steps.len(), op_name(step), e);
                report.failures += 1;
            }
        }
        report.results.push(result);
    }

    report
}

fn op_name(step: &Step) -> &'static str {
    match step {
        Step::New { .. } => "new",
        Step::Add { .. } => "add",
        Step::Sub { .. } => "sub",
        Step::Neg { .. } => "neg",
        Step::Mul { .. } => "mul",
        Step::Norm { .. } => "norm",
        Step::Unit { .. } => "unit",
        Step::Rotate { .. } => "rotate",
        Step::Angle { .. } => "angle",
        Step::Equals { .. } => "equals",
        Step::Clone { .. } => "clone",
        Step::Zero => "zero",
        Step::Rad { .. } => "rad",
        Step::Deg { .. } => "deg",
    }
}
