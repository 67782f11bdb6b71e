/*!

  Handles emitting assertion-violation, trace, and verbose log messages for the
  propagator and its supporting data structures.

*/

pub use assertions::*;
pub use trace::*;
pub use verbosity::*;

pub(crate) mod assertions {
  use std::sync::atomic::{AtomicBool, Ordering};

  pub(crate) static ASSERTIONS_ENABLED: AtomicBool = AtomicBool::new(true);

  /// Prints an assertion violation to `stderr`.
  pub fn notify_assertion_violation(code: &str, file: &str, line: u32) {
    eprintln!(
      "ASSERTION VIOLATION\nFile: {}\nLine: {}\n{}",
      file, line, code,
    );
  }

  /// A logged assert that includes source location on failure. Gated by the `debug`
  /// feature, matching the teacher's `SASSERT`-equivalent macro; disabled builds pay
  /// no runtime cost for the check.
  #[macro_export]
  macro_rules! log_assert {
    ($cond:expr) => {{
      #[cfg(feature = "debug")]
      {
        if $crate::log::assertions::ASSERTIONS_ENABLED.load(std::sync::atomic::Ordering::Relaxed)
          && !($cond)
        {
          $crate::log::assertions::notify_assertion_violation(stringify!($cond), file!(), line!());
          panic!("log_assert failed: {}", stringify!($cond));
        }
      }
    }};
  }

  /// A logged assert that includes source location on failure. Unlike `log_assert`,
  /// `verify` is not guarded by a feature flag — it always runs. Used for the
  /// precondition checks on `BipartiteMatching`/`TrackingList` (spec.md §7, category 2
  /// — these are programming errors and must terminate the process).
  #[macro_export]
  macro_rules! verify {
    ($cond:expr) => {{
      if !($cond) {
        $crate::log::assertions::notify_assertion_violation(
          format!("Failed to verify: {}", stringify!($cond)).as_str(),
          file!(),
          line!(),
        );
        panic!("verify failed: {}", stringify!($cond));
      }
    }};
  }
}

pub(crate) mod trace {
  use std::collections::HashSet;
  use std::sync::Mutex;

  static ENABLED_TRACES: Mutex<Option<HashSet<&'static str>>> = Mutex::new(None);

  fn print_trace(text: &str) {
    eprintln!("{}", text);
  }

  /// Auxiliary helper for `trace!`, do not use directly.
  pub fn trace_prefix(tag: &str, function: &str, filename: &str, line_number: u32) {
    print_trace(
      format!("-------- [{}] {} {}:{} ---------", tag, function, filename, line_number).as_str(),
    );
  }

  /// Auxiliary helper for `trace!`, do not use directly.
  pub fn trace_suffix() {
    print_trace("------------------------------------------------");
  }

  pub fn is_trace_enabled(tag: &str) -> bool {
    ENABLED_TRACES
      .lock()
      .unwrap()
      .as_ref()
      .map_or(false, |tags| tags.contains(tag))
  }

  pub fn update_trace(tag: &'static str, enable: bool) {
    let mut guard = ENABLED_TRACES.lock().unwrap();
    let tags = guard.get_or_insert_with(HashSet::new);
    if enable {
      tags.insert(tag);
    } else {
      tags.remove(tag);
    }
  }

  #[macro_export]
  macro_rules! trace {
    ($tag:expr, $code:expr) => {{
      if $crate::log::trace::is_trace_enabled($tag) {
        $crate::log::trace::trace_prefix($tag, "", file!(), line!());
        $code;
        $crate::log::trace::trace_suffix();
      }
    }};
  }
}

// Global control over verbose messaging.
pub(crate) mod verbosity {
  use std::sync::atomic::{AtomicI32, Ordering};

  pub(crate) static VERBOSITY: AtomicI32 = AtomicI32::new(0);

  fn verbosity_is_at_least(lvl: i32) -> bool {
    VERBOSITY.load(Ordering::Relaxed) >= lvl
  }

  pub fn set_verbosity(new_value: i32) {
    VERBOSITY.store(new_value, Ordering::Relaxed);
  }

  pub(crate) fn verbose_emit(msg: &str) {
    eprint!("{}", msg);
  }

  pub(crate) fn log_at_level(level: i32, msg: &str) {
    if verbosity_is_at_least(level) {
      verbose_emit(msg);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trace_toggle_round_trips() {
    trace::update_trace("gac::test", true);
    assert!(trace::is_trace_enabled("gac::test"));
    trace::update_trace("gac::test", false);
    assert!(!trace::is_trace_enabled("gac::test"));
  }

  #[test]
  #[should_panic(expected = "verify failed")]
  fn verify_panics_on_false() {
    verify!(1 == 2);
  }

  #[test]
  fn verify_passes_on_true() {
    verify!(1 == 1);
  }
}
