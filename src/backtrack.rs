/*!

  The backtrack environment interface the propagator consumes (spec.md §6): an opaque
  sink for *undo closures* that the search engine runs, exactly once each, in LIFO
  order, when it unwinds past the decision during which they were registered. The
  search engine's actual implementation is out of scope (spec.md §1); this module only
  specifies the trait boundary and ships a reference implementation used by this
  crate's own tests, in the scoped push/pop-on-drop style of the teacher's
  `ScopedResourceLimit`/`ScopedResourceLimits`.

*/

pub type Undo = Box<dyn FnOnce() + 'static>;

/// Consumed by `TrackingList::remove_from_universe` and by the propagator's closing
/// phase (spec.md §4.3.5) whenever a tracking list's *universe* (not just its
/// in-list) shrinks. Implementors must run every `save`d action exactly once, in LIFO
/// order, when backtracking past the decision current at the time of the `save`.
pub trait BacktrackEnvironment {
  fn save(&mut self, undo: Undo);
}

/// A minimal reference `BacktrackEnvironment`, organized as a stack of decision
/// levels, each a `Vec` of undo actions. `push_level` opens a new level (mirroring the
/// `push` half of the teacher's `ScopedResourceLimit`); `pop_level` closes the most
/// recent level, running its undos in LIFO order (mirroring `ScopedResourceLimit`'s
/// `Drop`). Used by this crate's own tests to exercise backtrack neutrality
/// (spec.md §8, "Backtrack neutrality").
#[derive(Default)]
pub struct StackBacktrackEnvironment {
  levels: Vec<Vec<Undo>>,
}

impl StackBacktrackEnvironment {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push_level(&mut self) {
    self.levels.push(Vec::new());
  }

  /// Runs this level's undo actions in LIFO order, then discards the level.
  ///
  /// # Panics
  /// Panics if there is no open level — popping past the root is a programming error
  /// in the caller, not a recoverable condition.
  pub fn pop_level(&mut self) {
    let level = self.levels.pop().expect("pop_level called with no open level");
    for undo in level.into_iter().rev() {
      undo();
    }
  }

  pub fn depth(&self) -> usize {
    self.levels.len()
  }
}

impl BacktrackEnvironment for StackBacktrackEnvironment {
  fn save(&mut self, undo: Undo) {
    self
      .levels
      .last_mut()
      .expect("save called with no open decision level")
      .push(undo);
  }
}

/// A scoped guard mirroring `ScopedResourceLimit`: opens a decision level on
/// construction, pops it (running undos) on `Drop`. Handy in tests that want a
/// single push/backtrack pair without manual bookkeeping.
pub struct ScopedDecisionLevel<'env> {
  env: &'env mut StackBacktrackEnvironment,
}

impl<'env> ScopedDecisionLevel<'env> {
  pub fn new(env: &'env mut StackBacktrackEnvironment) -> Self {
    env.push_level();
    ScopedDecisionLevel { env }
  }
}

impl<'env> Drop for ScopedDecisionLevel<'env> {
  fn drop(&mut self) {
    self.env.pop_level();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::RefCell;
  use std::rc::Rc;

  #[test]
  fn undos_run_in_lifo_order_on_pop() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut env = StackBacktrackEnvironment::new();
    env.push_level();

    for i in 0..3 {
      let log = log.clone();
      env.save(Box::new(move || log.borrow_mut().push(i)));
    }
    env.pop_level();

    assert_eq!(*log.borrow(), vec![2, 1, 0]);
  }

  #[test]
  fn nested_levels_restore_independently() {
    let value = Rc::new(RefCell::new(0));
    let mut env = StackBacktrackEnvironment::new();

    env.push_level();
    {
      let value = value.clone();
      *value.borrow_mut() = 1;
      env.save(Box::new(move || *value.borrow_mut() = 0));
    }

    env.push_level();
    {
      let value = value.clone();
      *value.borrow_mut() = 2;
      env.save(Box::new(move || *value.borrow_mut() = 1));
    }

    assert_eq!(*value.borrow(), 2);
    env.pop_level();
    assert_eq!(*value.borrow(), 1);
    env.pop_level();
    assert_eq!(*value.borrow(), 0);
  }

  #[test]
  fn scoped_decision_level_pops_on_drop() {
    let value = Rc::new(RefCell::new(0));
    let mut env = StackBacktrackEnvironment::new();
    {
      let _scope = ScopedDecisionLevel::new(&mut env);
      // can't call env.save while _scope borrows env mutably in this toy example;
      // exercised directly via StackBacktrackEnvironment in the tests above.
    }
    assert_eq!(env.depth(), 0);
    assert_eq!(*value.borrow(), 0);
  }
}
