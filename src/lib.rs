#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Target transformation and objective aggregation for Bayesian experimental
//! design. Raw measurements — quantities to maximize, minimize, or match to a
//! setpoint — are normalized into a desirability scale and, optionally,
//! reduced into a single scalar score per experiment, ready for a surrogate
//! model or recommender to consume.
//!
//! # Getting Started
//!
//! Score two competing targets with a weighted desirability aggregate:
//!
//! ```
//! use desirability::prelude::*;
//!
//! let yield_t = NumericalTarget::builder("yield", TargetMode::Max)
//!     .bounds(0.0, 100.0)
//!     .build()
//!     .unwrap();
//! let cost_t = NumericalTarget::builder("cost", TargetMode::Min)
//!     .bounds(0.0, 100.0)
//!     .build()
//!     .unwrap();
//!
//! let objective = Objective::builder(ObjectiveMode::Desirability)
//!     .target(yield_t)
//!     .target(cost_t)
//!     .weights(vec![20.0, 30.0])
//!     .combine(CombineFunc::Mean)
//!     .build()
//!     .unwrap();
//!
//! let data = Table::new()
//!     .with_column("yield", vec![100.0, 0.0])
//!     .unwrap()
//!     .with_column("cost", vec![0.0, 100.0])
//!     .unwrap();
//!
//! let scored = objective.transform(&data).unwrap();
//! let scores = scored.column(AGGREGATE_COLUMN).unwrap();
//! assert!((scores[0] - 1.0).abs() < 1e-12); // best row for both targets
//! assert!(scores[1].abs() < 1e-12); // worst row for both targets
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Target`] | One measured quantity with a direction — maximize, minimize, or match a window. |
//! | [`BoundTransform`](transform::BoundTransform) | Normalization from raw values into the `[0, 1]` desirability scale. |
//! | [`Objective`] | Validated set of targets with weights; turns a measurement table into its computational representation. |
//! | [`CombineFunc`](objective::CombineFunc) | Row-wise reducer (arithmetic or geometric mean) for desirability mode. |
//! | [`Table`](table::Table) | Named-column measurement table with a row index. |
//!
//! # Objective modes
//!
//! | Mode | Targets | Output |
//! |------|---------|--------|
//! | [`Single`](objective::ObjectiveMode::Single) | exactly one | one transformed column |
//! | [`Multi`](objective::ObjectiveMode::Multi) | two or more | one transformed column per target |
//! | [`Desirability`](objective::ObjectiveMode::Desirability) | one or more, all bounded | one weighted aggregate column |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public types and config specs | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) (e.g. transform defaulting warnings) | off |

/// Emit a `tracing::warn!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

pub mod config;
mod error;
pub mod objective;
pub mod reduce;
pub mod table;
pub mod target;
pub mod transform;

pub use error::{Error, Result};
pub use objective::{AGGREGATE_COLUMN, CombineFunc, Objective, ObjectiveMode};
pub use table::Table;
pub use target::{Bounds, NumericalTarget, Target, TargetMode};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use desirability::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ObjectiveSpec, TargetSpec};
    pub use crate::error::{Error, Result};
    pub use crate::objective::{AGGREGATE_COLUMN, CombineFunc, Objective, ObjectiveMode};
    pub use crate::table::Table;
    pub use crate::target::{Bounds, NumericalTarget, Target, TargetMode};
    pub use crate::transform::BoundTransform;
}
