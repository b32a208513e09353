use serde::Deserialize;
use thiserror::Error;

use crate::math::integration::quadratureruleerror::QuadratureRuleError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("quadrature rule '{name}': {source}")]
    InvalidQuadratureRule {
        name: String,
        source: QuadratureRuleError
    }
}

impl ManagerError {
    pub fn from_json_or_json_parse_error <T> (json_value: serde_json::Value) -> Result<T, Self>
        where T : for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        value: f64
    }

    #[test]
    fn messages() {
        assert_eq!(ManagerError::map_elem_not_found("Central").to_string(), "key 'Central' not found");
        let error = ManagerError::InvalidQuadratureRule {
            name: "Simpson".to_owned(),
            source: QuadratureRuleError::OddPointsCount(5)
        };
        assert_eq!(error.to_string(), "quadrature rule 'Simpson': subdivision count must be even, got 5");
    }

    #[test]
    fn json_value_conversion() {
        let sample: Sample = ManagerError::from_json_or_json_parse_error(serde_json::json!({"value": 0.5})).unwrap();
        assert_eq!(sample.value, 0.5);
        let result: Result<Sample, ManagerError> = ManagerError::from_json_or_json_parse_error(serde_json::json!({"other": 1}));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
