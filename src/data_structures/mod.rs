/*!

Generic, self-contained structures used by the propagator for observability: they do
not depend on anything specific to the GAC algorithm itself.

*/

mod moving_average;
mod statistics;

pub use moving_average::{ExponentialMovingAverage, EMA};
pub use statistics::{bump, Statistic, Statistics};
