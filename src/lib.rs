/*!

  Generalized arc consistency filtering for the AllDifferent constraint: given a set
  of integer decision variables, repeatedly removes every value from every domain
  that cannot participate in any pairwise-distinct assignment. See `propagator`'s doc
  comment for the algorithm; see `DESIGN.md` for how each module maps back to its
  grounding source.

*/

pub mod backtrack;
pub mod cause;
pub mod config;
pub mod data_structures;
pub mod errors;
pub mod log;
pub mod matching;
pub mod parameters;
pub mod propagator;
pub mod tracking_list;
pub mod variable;

pub use backtrack::{BacktrackEnvironment, StackBacktrackEnvironment, Undo};
pub use cause::{Cause, CauseTable};
pub use config::{Mode, PropagatorConfig, SccSkipPolicy, TunedThresholds};
pub use data_structures::{bump, Statistic, Statistics, EMA};
pub use errors::Error;
pub use matching::BipartiteMatching;
pub use propagator::BimodalPropagator;
pub use tracking_list::{Node, TrackingList};
pub use variable::{ArrayDomainVariable, Value, Variable};
