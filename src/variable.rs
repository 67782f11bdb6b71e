/*!

  The boundary between this crate and the host solver's variable representation
  (spec.md §6): `BimodalPropagator` narrows domains only through the `Variable`
  trait, never by reaching into a concrete representation. The trait's shape —
  bound queries, membership, a forward domain walk, and narrowing operations that
  report whether they actually changed anything — follows the `IntegerVariable`
  boundary in the Munchkin propagator this crate's algorithm is grounded on
  (`other_examples/.../all_different.rs`), adapted to this crate's `Result<bool, Error>`
  convention (spec.md §7) instead of a solver-specific event type.

  `ArrayDomainVariable` is a reference implementation used only by this crate's own
  tests; real integrations supply their own `Variable` impl over their own domain
  representation.

*/

use bit_set::BitSet;

use crate::errors::Error;

pub type Value = i64;

/// The contract `BimodalPropagator` narrows through. All narrowing methods return
/// `Ok(true)` if the domain actually changed, `Ok(false)` if the call was a no-op
/// (the value was already absent, or already within bounds), and `Err` only when the
/// variable layer itself reports an infeasibility distinct from the `AllDifferent`
/// contradiction the propagator detects on its own (spec.md §7, category 3).
pub trait Variable {
  fn lb(&self) -> Value;
  fn ub(&self) -> Value;
  fn contains(&self, v: Value) -> bool;

  /// The smallest value in the domain strictly greater than `v`, or `None` if `v` is
  /// the maximum present value (or if no present value exceeds `v`). Used by the
  /// propagator's classic (domain-walking) iteration mode.
  fn next_value(&self, v: Value) -> Option<Value>;

  fn domain_size(&self) -> usize;
  fn is_instantiated(&self) -> bool;
  fn value(&self) -> Option<Value>;

  fn remove_value(&mut self, v: Value) -> Result<bool, Error>;
  fn update_bounds(&mut self, lo: Value, hi: Value) -> Result<bool, Error>;
  fn instantiate_to(&mut self, v: Value) -> Result<bool, Error>;
}

/// A `Variable` backed by a fixed bitset over `[lb0, ub0]`, present bits only ever
/// cleared, never set — domains narrow monotonically (spec.md §3). Good enough for
/// this crate's own unit tests; not intended as a production variable representation.
#[derive(Clone, Debug)]
pub struct ArrayDomainVariable {
  base: Value,
  universe_size: usize,
  present: BitSet,
  size: usize,
}

impl ArrayDomainVariable {
  /// Builds a variable whose initial domain is every value in `[lo, hi]`.
  pub fn new(lo: Value, hi: Value) -> Self {
    crate::verify!(hi >= lo);
    let capacity = (hi - lo + 1) as usize;
    let mut present = BitSet::with_capacity(capacity);
    for idx in 0..capacity {
      present.insert(idx);
    }
    ArrayDomainVariable { base: lo, universe_size: capacity, present, size: capacity }
  }

  /// Builds a variable whose domain is exactly `values` within `[lo, hi]`.
  pub fn from_values(lo: Value, hi: Value, values: &[Value]) -> Self {
    let capacity = (hi - lo + 1) as usize;
    let mut v = ArrayDomainVariable {
      base: lo,
      universe_size: capacity,
      present: BitSet::with_capacity(capacity),
      size: 0,
    };
    for &val in values {
      let idx = (val - lo) as usize;
      if !v.present.contains(idx) {
        v.present.insert(idx);
        v.size += 1;
      }
    }
    v
  }

  fn idx(&self, v: Value) -> Option<usize> {
    if v < self.base {
      return None;
    }
    let idx = (v - self.base) as usize;
    if idx < self.universe_size {
      Some(idx)
    } else {
      None
    }
  }
}

impl Variable for ArrayDomainVariable {
  fn lb(&self) -> Value {
    self
      .present
      .iter()
      .next()
      .map(|idx| self.base + idx as Value)
      .unwrap_or(self.base)
  }

  fn ub(&self) -> Value {
    self
      .present
      .iter()
      .last()
      .map(|idx| self.base + idx as Value)
      .unwrap_or(self.base)
  }

  fn contains(&self, v: Value) -> bool {
    match self.idx(v) {
      Some(idx) => self.present.contains(idx),
      None => false,
    }
  }

  fn next_value(&self, v: Value) -> Option<Value> {
    if v < self.base {
      return self.present.iter().next().map(|idx| self.base + idx as Value);
    }
    let start = (v - self.base) as usize + 1;
    self
      .present
      .iter()
      .find(|&idx| idx >= start)
      .map(|idx| self.base + idx as Value)
  }

  fn domain_size(&self) -> usize {
    self.size
  }

  fn is_instantiated(&self) -> bool {
    self.size == 1
  }

  fn value(&self) -> Option<Value> {
    if self.is_instantiated() {
      self.present.iter().next().map(|idx| self.base + idx as Value)
    } else {
      None
    }
  }

  fn remove_value(&mut self, v: Value) -> Result<bool, Error> {
    if let Some(idx) = self.idx(v) {
      if self.present.contains(idx) {
        self.present.remove(idx);
        self.size -= 1;
        return Ok(true);
      }
    }
    Ok(false)
  }

  fn update_bounds(&mut self, lo: Value, hi: Value) -> Result<bool, Error> {
    let mut changed = false;
    let to_remove: Vec<Value> = self
      .present
      .iter()
      .map(|idx| self.base + idx as Value)
      .filter(|&v| v < lo || v > hi)
      .collect();
    for v in to_remove {
      if self.remove_value(v)? {
        changed = true;
      }
    }
    Ok(changed)
  }

  fn instantiate_to(&mut self, v: Value) -> Result<bool, Error> {
    if !self.contains(v) {
      return Err(Error::Precondition("instantiate_to value not in domain"));
    }
    if self.is_instantiated() {
      return Ok(false);
    }
    let to_remove: Vec<Value> = self
      .present
      .iter()
      .map(|idx| self.base + idx as Value)
      .filter(|&other| other != v)
      .collect();
    for other in to_remove {
      self.remove_value(other)?;
    }
    Ok(true)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn full_range_reports_correct_bounds_and_size() {
    let v = ArrayDomainVariable::new(1, 5);
    assert_eq!(v.lb(), 1);
    assert_eq!(v.ub(), 5);
    assert_eq!(v.domain_size(), 5);
    assert!(v.contains(3));
  }

  #[test]
  fn remove_value_shrinks_domain_and_is_idempotent() {
    let mut v = ArrayDomainVariable::new(1, 5);
    assert_eq!(v.remove_value(3).unwrap(), true);
    assert_eq!(v.domain_size(), 4);
    assert!(!v.contains(3));
    assert_eq!(v.remove_value(3).unwrap(), false);
  }

  #[test]
  fn next_value_skips_removed_values() {
    let mut v = ArrayDomainVariable::new(1, 5);
    v.remove_value(3).unwrap();
    assert_eq!(v.next_value(2), Some(4));
    assert_eq!(v.next_value(5), None);
  }

  #[test]
  fn instantiate_to_collapses_domain() {
    let mut v = ArrayDomainVariable::new(1, 5);
    assert_eq!(v.instantiate_to(2).unwrap(), true);
    assert_eq!(v.domain_size(), 1);
    assert_eq!(v.value(), Some(2));
    assert!(v.is_instantiated());
  }

  #[test]
  fn instantiate_to_value_outside_domain_errors() {
    let mut v = ArrayDomainVariable::new(1, 5);
    v.remove_value(3).unwrap();
    assert!(v.instantiate_to(3).is_err());
  }

  #[test]
  fn from_values_builds_sparse_domain() {
    let v = ArrayDomainVariable::from_values(1, 10, &[2, 5, 9]);
    assert_eq!(v.domain_size(), 3);
    assert!(v.contains(5) && !v.contains(4));
    assert_eq!(v.next_value(5), Some(9));
  }
}
