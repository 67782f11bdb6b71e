/*!

  Error types for the AllDifferent GAC propagator.

*/

use thiserror::Error as DeriveError;
use user_error::UFE;

/// The three error categories from the design: infeasibility (recoverable by
/// backtrack), programming errors (not recoverable, should panic before this is ever
/// constructed in debug builds), and passthrough errors from the variable layer.
#[derive(Debug, DeriveError)]
pub enum Error {
  /// The constraint is infeasible given the current domains: no augmenting path
  /// could be found for some variable. Propagated up to the search engine, which
  /// backtracks.
  #[error("AllDifferent is infeasible under the current domains.")]
  Contradiction,

  /// Misuse of `BipartiteMatching` or `TrackingList` (e.g. `setMatch` on an
  /// already-matched endpoint). These are programming errors; in practice they are
  /// caught by `verify!`/`log_assert!` before an `Error` is ever built, but the
  /// variant exists so precondition checks outside of debug assertions still have
  /// somewhere to report to.
  #[error("Precondition violated: {0}")]
  Precondition(&'static str),

  /// An error surfaced as-is from the variable interface (spec.md §7, category 3).
  #[error(transparent)]
  Solver {
    #[from]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
}

impl UFE for Error { /* User Facing Error - nothing to implement. */ }
