//! Mastermind search engine
//!
//! Candidate filtering, partitioning, metrics and the best-guess search, plus the
//! session that ties them to a growing history.

pub mod filter;
pub mod metric;
pub mod partition;
pub mod selector;
mod session;

pub use filter::{History, Round, candidates, consistent, count_candidates};
pub use metric::{ExpectedSize, FnMetric, Metric, MetricKind, MinMax, MostParts};
pub use partition::{Partition, partition};
pub use selector::{BestGuesses, best_guesses, select_best_guesses};
pub use session::{RoundInput, RoundInputError, Session};
