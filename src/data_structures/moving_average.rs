/*!

Minimal exponential moving average, carried over from the teacher almost verbatim.
Used by the propagator to track pruned-values-per-call as a smoothed diagnostic
signal (SPEC_FULL.md §4.4) — purely observational, never consulted by filtering.

*/

use std::fmt::{Display, Formatter};

pub type EMA = ExponentialMovingAverage;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ExponentialMovingAverage {
  alpha: f64,
  beta: f64,
  value: f64,
  period: u32,
  wait: u32,
}

impl Display for ExponentialMovingAverage {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.value.fmt(f)
  }
}

impl ExponentialMovingAverage {
  pub fn new(alpha: f64) -> Self {
    crate::log_assert!(0f64 <= alpha && alpha <= 1f64);
    ExponentialMovingAverage { alpha, beta: 1f64, value: 0f64, period: 0, wait: 0 }
  }

  pub fn set_alpha(&mut self, alpha: f64) {
    crate::log_assert!(0f64 <= alpha && alpha <= self.beta);
    self.alpha = alpha;
  }

  /// Folds `value` into the running average, following the same bias-correction
  /// schedule (`beta` decaying by half every doubling `period`) as the teacher.
  pub fn update(&mut self, value: f64) {
    self.value += self.beta * (value - self.value);

    if self.beta <= self.alpha {
      return;
    }

    if self.wait != 0 {
      self.wait -= 1;
      return;
    }

    self.period = 2 * (self.period + 1) - 1;
    self.wait = self.period;
    self.beta *= 0.5;

    if self.beta < self.alpha {
      self.beta = self.alpha;
    }
  }

  pub fn set_value(&mut self, value: f64) {
    self.value = value;
  }

  pub fn mean(&self) -> f64 {
    self.value
  }
}

impl Default for ExponentialMovingAverage {
  fn default() -> Self {
    ExponentialMovingAverage::new(0f64)
  }
}

impl From<EMA> for f64 {
  fn from(ema: EMA) -> Self {
    ema.value
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn converges_toward_a_constant_input() {
    let mut ema = ExponentialMovingAverage::new(0.1);
    for _ in 0..200 {
      ema.update(3.0);
    }
    assert!((ema.mean() - 3.0).abs() < 0.5);
  }

  #[test]
  fn starts_at_zero() {
    let ema = ExponentialMovingAverage::default();
    assert_eq!(ema.mean(), 0.0);
  }
}
