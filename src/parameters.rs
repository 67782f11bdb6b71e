/*!

Types associated with configuration parameters for the `Tuned` mode.

As in the teacher, parameters are not compiled in but read from a small JSON database
at runtime — here, just the two ratios `choose_classic_for_dfs`/
`choose_classic_for_bfs_or_prune` use (see `config.rs`), rather than the full SAT
parameter surface.

*/

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

use json::{parse as parse_json, JsonError, JsonValue, Result as JsonResult};

use crate::config::TunedThresholds;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParameterValue {
  UnsignedInteger(u64),
  Bool(bool),
  Double(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
  pub name: String,
  pub default_value: ParameterValue,
  pub description: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Parameters {
  pub module: String,
  pub description: String,
  parameters: HashMap<String, Parameter>,
}

impl Parameters {
  pub fn get(&self, name: &str) -> Option<ParameterValue> {
    self.parameters.get(name).map(|p| p.default_value)
  }

  fn get_double(&self, name: &str, default: f64) -> f64 {
    match self.get(name) {
      Some(ParameterValue::Double(v)) => v,
      Some(ParameterValue::UnsignedInteger(v)) => v as f64,
      _ => default,
    }
  }

  /// Resolves the `Tuned` mode's thresholds, falling back to `TunedThresholds::default()`
  /// for any parameter this database doesn't define.
  pub fn tuned_thresholds(&self) -> TunedThresholds {
    let defaults = TunedThresholds::default();
    TunedThresholds {
      bfs_ratio: self.get_double("bfs_ratio", defaults.bfs_ratio),
      dfs_ratio: self.get_double("dfs_ratio", defaults.dfs_ratio),
    }
  }
}

fn json_value_to_parameter_value(datatype: &str, json_value: &JsonValue) -> JsonResult<ParameterValue> {
  match datatype {
    "UINT" => Ok(ParameterValue::UnsignedInteger(
      json_value.as_u64().ok_or_else(|| JsonError::wrong_type("expected a uint"))?,
    )),
    "BOOL" => Ok(ParameterValue::Bool(
      json_value.as_bool().ok_or_else(|| JsonError::wrong_type("expected a bool"))?,
    )),
    "DOUBLE" => Ok(ParameterValue::Double(
      json_value.as_f64().ok_or_else(|| JsonError::wrong_type("expected a double"))?,
    )),
    other => Err(JsonError::wrong_type(
      format!("Expected a parameter datatype, found `{}`.", other).as_str(),
    )),
  }
}

/// Builds the `Parameters` map by reading the parameter database from a JSON file.
/// Module has no parameters file or the file cannot be found: callers should fall
/// back to `PropagatorConfig::new`, which uses `TunedThresholds::default()`.
pub fn deserialize_parameters(file_path: &str) -> JsonResult<Parameters> {
  let json_string = read_to_string(Path::new(file_path))
    .map_err(|e| JsonError::wrong_type(format!("could not read {}: {}", file_path, e).as_str()))?;
  let object = parse_json(&json_string)?;
  let mut parameters = HashMap::new();

  let records = match &object["parameters"] {
    JsonValue::Array(records) => records,
    other => {
      return Err(JsonError::wrong_type(
        format!("Expected `parameters` to be a list, got {}.", other).as_str(),
      ))
    }
  };

  for record in records {
    let key = record["param"]
      .as_str()
      .ok_or_else(|| JsonError::wrong_type("parameter record missing `param`"))?
      .to_string();
    let datatype = record["type"]
      .as_str()
      .ok_or_else(|| JsonError::wrong_type("parameter record missing `type`"))?;
    let parameter = Parameter {
      name: key.clone(),
      default_value: json_value_to_parameter_value(datatype, &record["default"])?,
      description: record["description"].as_str().unwrap_or("").to_string(),
    };
    parameters.insert(key, parameter);
  }

  Ok(Parameters {
    module: object["module"].as_str().unwrap_or("alldiff_gac").to_string(),
    description: object["description"].as_str().unwrap_or("").to_string(),
    parameters,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_a_minimal_parameter_database() {
    let json_string = r#"
    {
      "module": "alldiff_gac",
      "description": "tuning knobs for the bimodal propagator",
      "parameters": [
        {"param": "bfs_ratio", "type": "DOUBLE", "default": 1.5, "description": "bfs classic/complement crossover"},
        {"param": "dfs_ratio", "type": "DOUBLE", "default": 0.75, "description": "dfs classic/complement crossover"}
      ]
    }"#;
    let object = parse_json(json_string).unwrap();
    let records = match &object["parameters"] {
      JsonValue::Array(r) => r.clone(),
      _ => panic!("expected array"),
    };
    assert_eq!(records.len(), 2);

    let mut parameters = HashMap::new();
    for record in &records {
      let key = record["param"].as_str().unwrap().to_string();
      let parameter = Parameter {
        name: key.clone(),
        default_value: json_value_to_parameter_value(record["type"].as_str().unwrap(), &record["default"]).unwrap(),
        description: record["description"].as_str().unwrap().to_string(),
      };
      parameters.insert(key, parameter);
    }
    let parameters = Parameters { module: "alldiff_gac".into(), description: "".into(), parameters };

    let thresholds = parameters.tuned_thresholds();
    assert_eq!(thresholds.bfs_ratio, 1.5);
    assert_eq!(thresholds.dfs_ratio, 0.75);
  }

  #[test]
  fn missing_file_is_an_error() {
    assert!(deserialize_parameters("/nonexistent/path/params.json").is_err());
  }

  #[test]
  fn defaults_used_when_parameter_absent() {
    let parameters = Parameters::default();
    let thresholds = parameters.tuned_thresholds();
    assert_eq!(thresholds, TunedThresholds::default());
  }
}
