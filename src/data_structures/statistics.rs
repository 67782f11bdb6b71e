/*!

  `Statistics` is a small typed counter map, the same role it plays in the teacher:
  every `BimodalPropagator` owns one, keyed by counter name, recording purely
  observational data about its own calls (never anything used for filtering
  decisions, and never an explanation of *why* a value was pruned — spec.md
  Non-goals).

*/

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

pub type Statistics = HashMap<&'static str, Statistic>;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Statistic {
  Integer(usize),
  Float(f64),
}

impl From<f64> for Statistic {
  fn from(r: f64) -> Self {
    Statistic::Float(r)
  }
}

impl From<usize> for Statistic {
  fn from(n: usize) -> Self {
    Statistic::Integer(n)
  }
}

impl From<u32> for Statistic {
  fn from(n: u32) -> Self {
    Statistic::Integer(n as usize)
  }
}

impl Display for Statistic {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Statistic::Integer(n) => write!(f, "{}", n),
      Statistic::Float(r) => write!(f, "{}", r),
    }
  }
}

/// Increments an integer counter in a `Statistics` map, inserting it at zero first if
/// absent. The propagator's four counters (`"calls"`, `"contradictions"`,
/// `"values_pruned"`, `"variables_instantiated"`, per SPEC_FULL.md §4.4) are all
/// updated through this helper.
pub fn bump(stats: &mut Statistics, key: &'static str, amount: usize) {
  let entry = stats.entry(key).or_insert(Statistic::Integer(0));
  if let Statistic::Integer(n) = entry {
    *n += amount;
  } else {
    *entry = Statistic::Integer(amount);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bump_initializes_and_accumulates() {
    let mut stats = Statistics::new();
    bump(&mut stats, "calls", 1);
    bump(&mut stats, "calls", 1);
    assert_eq!(stats.get("calls"), Some(&Statistic::Integer(2)));
  }

  #[test]
  fn display_matches_variant() {
    assert_eq!(format!("{}", Statistic::Integer(7)), "7");
    assert_eq!(format!("{}", Statistic::Float(1.5)), "1.5");
  }
}
