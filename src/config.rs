use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use vector2d_common::{ArgumentError, Value, Vector2D};

/// A scalar or vector operand as written in the scenario file.
///
/// Lists are constructor argument lists: `[10, 20]` builds a vector from two
/// numbers, `[[10, 20]]` copies a vector, and `[]` or `["z"]` fail construction.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    Text(String),
    List(Vec<Operand>),
}

impl Operand {
    /// Resolves this operand into a value, constructing nested vectors.
    pub fn to_value(&self) -> Result<Value, ArgumentError> {
        Ok(match self {
            Operand::Number(n) => Value::Number(*n),
            Operand::Text(s) => Value::Text(s.clone()),
            Operand::List(args) => Value::Vector(build_vector(args)?),
        })
    }
}

/// Runs the overloaded constructor over a list of operands.
pub fn build_vector(args: &[Operand]) -> Result<Vector2D, ArgumentError> {
    let values = args
        .iter()
        .map(Operand::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    Vector2D::from_args(&values)
}

// One operation of the scenario, selected by its `op` key.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    New { args: Vec<Operand> },
    Add { lhs: Vec<Operand>, rhs: Vec<Operand> },
    Sub { lhs: Vec<Operand>, rhs: Vec<Operand> },
    Neg { of: Vec<Operand> },
    Mul { lhs: Vec<Operand>, rhs: Operand },
    Norm { of: Vec<Operand> },
    Unit { of: Vec<Operand> },
    Rotate { of: Vec<Operand>, radians: f64 },
    Angle { of: Vec<Operand> },
    Equals {
        lhs: Vec<Operand>,
        rhs: Operand,
        #[serde(default)]
        epsilon: Option<f64>, // Falls back to comparison.default_epsilon
    },
    Clone { of: Vec<Operand> },
    Zero,
    Rad { degrees: f64 },
    Deg { radians: f64 },
}

// Tolerance settings for `equals` steps
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    #[serde(default = "default_epsilon")]
    pub default_epsilon: f64,
}

// Exact comparison unless configured otherwise
fn default_epsilon() -> f64 {
    0.0
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        ComparisonConfig {
            default_epsilon: default_epsilon(),
        }
    }
}

// Main scenario configuration structure, loaded from a TOML file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub comparison: ComparisonConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl ScenarioConfig {
    /// Loads the scenario configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e))?;
        Self::parse(&config_str)
            .map_err(|e| anyhow::anyhow!("Invalid scenario '{}': {}", path_ref.display(), e))
    }

    /// Parses and validates a scenario from TOML text.
    pub fn parse(config_str: &str) -> Result<Self> {
        let config: ScenarioConfig = toml::from_str(config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;

        // --- Validation ---
        let epsilon = config.comparison.default_epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            anyhow::bail!("default_epsilon must be a finite, non-negative number.");
        }
        if config.steps.is_empty() {
            anyhow::bail!("scenario must contain at least one step.");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        let config = ScenarioConfig::parse(
            r#"
            [comparison]
            default_epsilon = 0.01

            [[steps]]
            op = "add"
            lhs = [10, 20]
            rhs = [15.5, 40]

            [[steps]]
            op = "mul"
            lhs = [2, 3]
            rhs = "abc"

            [[steps]]
            op = "zero"
            "#,
        )
        .unwrap();

        assert_eq!(config.comparison.default_epsilon, 0.01);
        assert_eq!(config.steps.len(), 3);
        assert_eq!(
            config.steps[0],
            Step::Add {
                lhs: vec![Operand::Number(10.0), Operand::Number(20.0)],
                rhs: vec![Operand::Number(15.5), Operand::Number(40.0)],
            }
        );
        assert_eq!(
            config.steps[1],
            Step::Mul {
                lhs: vec![Operand::Number(2.0), Operand::Number(3.0)],
                rhs: Operand::Text("abc".to_string()),
            }
        );
        assert_eq!(config.steps[2], Step::Zero);
    }

    #[test]
    fn comparison_section_is_optional() {
        let config = ScenarioConfig::parse("[[steps]]\nop = \"deg\"\nradians = 1.0\n").unwrap();
        assert_eq!(config.comparison, ComparisonConfig::default());
        assert_eq!(config.comparison.default_epsilon, 0.0);
    }

    #[test]
    fn rejects_negative_epsilon() {
        let err = ScenarioConfig::parse(
            "[comparison]\ndefault_epsilon = -1.0\n[[steps]]\nop = \"zero\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("default_epsilon"));
    }

    #[test]
    fn rejects_empty_scenario() {
        assert!(ScenarioConfig::parse("").is_err());
    }

    #[test]
    fn rejects_unknown_op() {
        assert!(ScenarioConfig::parse("[[steps]]\nop = \"cross\"\n").is_err());
    }

    #[test]
    fn builds_nested_vectors() {
        let copy = vec![Operand::List(vec![Operand::Number(30.0), Operand::Number(40.0)])];
        assert_eq!(build_vector(&copy), Vector2D::new(30.0, 40.0));

        assert_eq!(build_vector(&[]), Err(ArgumentError::MissingParameter));
        assert_eq!(
            build_vector(&[Operand::Number(10.0)]),
            Err(ArgumentError::NotAVector)
        );
        assert_eq!(
            build_vector(&[Operand::Number(10.0), Operand::Text("z".to_string())]),
            Err(ArgumentError::NonNumeric)
        );
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("vector2d_scenario_{}.toml", std::process::id()));
        std::fs::write(&path, "[[steps]]\nop = \"rad\"\ndegrees = 30\n").unwrap();
        let config = ScenarioConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.steps, vec![Step::Rad { degrees: 30.0 }]);
    }

    #[test]
    fn missing_file_names_path() {
        let err = ScenarioConfig::load("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
