//! Operation counters.
//!
//! Services take an `Arc<dyn Metrics>` at construction and record one
//! [`Operation`] per call. Nothing depends on a sink being present:
//! [`NoopMetrics`] is a valid substitute.

use std::{
  collections::BTreeMap,
  sync::atomic::{AtomicU64, Ordering},
};

use strum::{EnumCount, EnumIter, IntoEnumIterator as _, IntoStaticStr};

/// A countable service operation. The serialised name is the counter name.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr,
  strum::Display,
)]
pub enum Operation {
  #[strum(serialize = "color.retrieval.total")]
  ColorRetrieval,
  #[strum(serialize = "color.creation.total")]
  ColorCreation,
  #[strum(serialize = "color.update.total")]
  ColorUpdate,
  #[strum(serialize = "color.deletion.total")]
  ColorDeletion,
  #[strum(serialize = "person.retrieval.total")]
  PersonRetrieval,
  #[strum(serialize = "person.creation.total")]
  PersonCreation,
  #[strum(serialize = "person.update.total")]
  PersonUpdate,
  #[strum(serialize = "person.deletion.total")]
  PersonDeletion,
  #[strum(serialize = "person.color.search.total")]
  PersonColorSearch,
}

/// A side-effect-only observability handle.
pub trait Metrics: Send + Sync {
  fn record(&self, op: Operation);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl Metrics for NoopMetrics {
  fn record(&self, _op: Operation) {}
}

/// In-process monotonic counters, one per [`Operation`].
#[derive(Debug)]
pub struct Counters {
  counts: [AtomicU64; Operation::COUNT],
}

impl Default for Counters {
  fn default() -> Self {
    Self { counts: std::array::from_fn(|_| AtomicU64::new(0)) }
  }
}

impl Counters {
  pub fn new() -> Self { Self::default() }

  pub fn get(&self, op: Operation) -> u64 {
    self.counts[op as usize].load(Ordering::Relaxed)
  }

  /// Current value of every counter, keyed by counter name.
  pub fn snapshot(&self) -> BTreeMap<&'static str, u64> {
    Operation::iter()
      .map(|op| {
        let name: &'static str = op.into();
        (name, self.get(op))
      })
      .collect()
  }
}

impl Metrics for Counters {
  fn record(&self, op: Operation) {
    self.counts[op as usize].fetch_add(1, Ordering::Relaxed);
  }
}
