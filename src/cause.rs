/*!

  A `Cause` is an opaque token identifying *why* a constraint's propagation ran — the
  constraint-registration layer (spec.md §6, out of scope here) mints one per
  constraint instance and passes it to `BimodalPropagator::new`. The propagator never
  inspects a `Cause`'s contents; it only carries it so that narrowing calls on the
  variable interface can be attributed back to this constraint by whatever explanation
  or logging machinery the outer solver has (this crate does not produce explanations
  itself — spec.md Non-goals).

  Digests a name into a small proxy ID so `Cause`s are `Copy` and cheap to carry
  around, the same role the teacher's symbol table plays for its own interned
  strings, but owned per-constraint instead of behind a global table.

*/

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

pub type CauseId = usize;

/// A lightweight per-constraint interner. Each `AllDifferent` instance owns one (or
/// shares one with sibling constraints registered by the same outer module) rather
/// than reaching into a process-global table.
#[derive(Clone, Debug, Default)]
pub struct CauseTable {
  by_name: HashMap<String, CauseId>,
  names: Vec<String>,
}

impl CauseTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the existing `Cause` for `name`, or interns a new one.
  pub fn intern(&mut self, name: &str) -> Cause {
    if let Some(&id) = self.by_name.get(name) {
      return Cause(id);
    }
    let id = self.names.len();
    self.names.push(name.to_string());
    self.by_name.insert(name.to_string(), id);
    Cause(id)
  }

  pub fn name_of(&self, cause: Cause) -> Option<&str> {
    self.names.get(cause.0).map(String::as_str)
  }
}

/// An interned, `Copy` token. `Cause::UNKNOWN` is the sentinel used when no outer
/// module supplied one.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Cause(CauseId);

impl Cause {
  pub const UNKNOWN: Cause = Cause(CauseId::MAX);

  pub fn id(&self) -> CauseId {
    self.0
  }
}

impl Default for Cause {
  fn default() -> Self {
    Cause::UNKNOWN
  }
}

impl Display for Cause {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if *self == Cause::UNKNOWN {
      write!(f, "cause(unknown)")
    } else {
      write!(f, "cause({})", self.0)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn interning_the_same_name_returns_the_same_cause() {
    let mut table = CauseTable::new();
    let a = table.intern("alldifferent[x1..x4]");
    let b = table.intern("alldifferent[x1..x4]");
    assert_eq!(a, b);
  }

  #[test]
  fn distinct_names_get_distinct_causes() {
    let mut table = CauseTable::new();
    let a = table.intern("alldifferent[x1..x4]");
    let b = table.intern("alldifferent[y1..y4]");
    assert_ne!(a, b);
    assert_eq!(table.name_of(a), Some("alldifferent[x1..x4]"));
    assert_eq!(table.name_of(b), Some("alldifferent[y1..y4]"));
  }

  #[test]
  fn unknown_is_the_default() {
    assert_eq!(Cause::default(), Cause::UNKNOWN);
  }
}
