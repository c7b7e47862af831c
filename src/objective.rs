//! The [`Objective`]: a validated set of targets with weights and a
//! combination strategy.
//!
//! An objective owns its targets and drives the table-level transformation:
//! each target transforms its own column, and in
//! [desirability mode](ObjectiveMode::Desirability) the per-target columns
//! are reduced row-wise into one aggregate score column.
//!
//! # Example
//!
//! ```
//! use desirability::prelude::*;
//!
//! let target = NumericalTarget::builder("yield", TargetMode::Max)
//!     .bounds(0.0, 100.0)
//!     .build()
//!     .unwrap();
//! let objective = Objective::builder(ObjectiveMode::Single)
//!     .target(target)
//!     .build()
//!     .unwrap();
//!
//! let data = Table::new().with_column("yield", vec![25.0, 75.0]).unwrap();
//! let out = objective.transform(&data).unwrap();
//! assert_eq!(out.column("yield"), Some(&[0.25, 0.75][..]));
//! ```

use core::str::FromStr;

use crate::error::{Error, Result};
use crate::reduce::{weighted_geom_mean, weighted_mean};
use crate::table::Table;
use crate::target::Target;

/// Name of the single aggregate column produced in desirability mode.
pub const AGGREGATE_COLUMN: &str = "Comp_Target";

/// How an objective treats its targets.
///
/// The string tags accepted by the config surface are `"SINGLE"`,
/// `"MULTI"`, and `"DESIRABILITY"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveMode {
    /// Exactly one target, transformed but not aggregated.
    Single,
    /// More than one target, each transformed into its own column.
    Multi,
    /// One or more bounded targets, reduced into one weighted scalar score.
    Desirability,
}

impl ObjectiveMode {
    /// The config-surface tag for this mode.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Multi => "MULTI",
            Self::Desirability => "DESIRABILITY",
        }
    }
}

impl FromStr for ObjectiveMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SINGLE" => Ok(Self::Single),
            "MULTI" => Ok(Self::Multi),
            "DESIRABILITY" => Ok(Self::Desirability),
            other => Err(Error::UnknownMode(
                other.to_owned(),
                &["SINGLE", "MULTI", "DESIRABILITY"],
            )),
        }
    }
}

impl core::fmt::Display for ObjectiveMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Row-wise reducer used in desirability mode.
///
/// The string tags accepted by the config surface are `"MEAN"` and
/// `"GEOM_MEAN"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombineFunc {
    /// Weighted arithmetic mean ([`reduce::weighted_mean`](crate::reduce::weighted_mean)).
    Mean,
    /// Weighted geometric mean ([`reduce::weighted_geom_mean`](crate::reduce::weighted_geom_mean)).
    #[default]
    GeomMean,
}

impl CombineFunc {
    /// The config-surface tag for this reducer.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Mean => "MEAN",
            Self::GeomMean => "GEOM_MEAN",
        }
    }

    fn reduce(self, row: &[f64], weights: &[f64]) -> f64 {
        match self {
            Self::Mean => weighted_mean(row, weights),
            Self::GeomMean => weighted_geom_mean(row, weights),
        }
    }
}

impl FromStr for CombineFunc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MEAN" => Ok(Self::Mean),
            "GEOM_MEAN" => Ok(Self::GeomMean),
            other => Err(Error::UnknownCombineFunc(other.to_owned())),
        }
    }
}

/// A validated optimization objective.
///
/// Construction via [`Objective::builder`] or [`Objective::from_spec`]
/// checks every invariant (target count per mode, bounds in desirability
/// mode, weight consistency) and normalizes the weights to sum to 100; the
/// built value is immutable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    mode: ObjectiveMode,
    targets: Vec<Target>,
    weights: Vec<f64>,
    combine: CombineFunc,
}

impl Objective {
    /// Starts building an objective in the given mode.
    #[must_use]
    pub fn builder(mode: ObjectiveMode) -> ObjectiveBuilder {
        ObjectiveBuilder {
            mode,
            targets: Vec::new(),
            weights: None,
            combine: CombineFunc::default(),
        }
    }

    /// Builds an objective from an already-deserialized spec.
    ///
    /// # Errors
    ///
    /// Any tag or invariant error from the targets or the objective itself,
    /// naming the offending value.
    pub fn from_spec(spec: &crate::config::ObjectiveSpec) -> Result<Self> {
        let mode: ObjectiveMode = spec.mode.parse()?;
        let mut builder = Self::builder(mode);
        for target_spec in &spec.targets {
            builder = builder.target(Target::from_spec(target_spec)?);
        }
        if let Some(weights) = &spec.weights {
            builder = builder.weights(weights.clone());
        }
        if let Some(tag) = &spec.combine {
            builder = builder.combine(tag.parse()?);
        }
        builder.build()
    }

    /// The objective mode.
    #[must_use]
    pub fn mode(&self) -> ObjectiveMode {
        self.mode
    }

    /// The targets, in configuration order.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// The normalized weights (always summing to 100), one per target.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The row-wise reducer used in desirability mode.
    #[must_use]
    pub fn combine_func(&self) -> CombineFunc {
        self.combine
    }

    /// Transforms a measurement table into its computational representation.
    ///
    /// The input must carry one column per target name; extra columns are
    /// ignored. In [`Single`](ObjectiveMode::Single) and
    /// [`Multi`](ObjectiveMode::Multi) modes the output holds one
    /// transformed column per target, in target order. In
    /// [`Desirability`](ObjectiveMode::Desirability) mode the transformed
    /// columns are reduced row-wise into a single
    /// [`AGGREGATE_COLUMN`] column. The row index is preserved either way,
    /// and the input is never modified.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] when a target's column is absent.
    pub fn transform(&self, data: &Table) -> Result<Table> {
        let mut columns: Vec<Vec<f64>> = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            let raw = data.require_column(target.name())?;
            columns.push(target.transform(raw));
        }

        let mut out = Table::with_index(data.index().to_vec());
        if self.mode == ObjectiveMode::Desirability {
            let scores: Vec<f64> = (0..data.len())
                .map(|row| {
                    let row_values: Vec<f64> = columns.iter().map(|c| c[row]).collect();
                    self.combine.reduce(&row_values, &self.weights)
                })
                .collect();
            out = out.with_column(AGGREGATE_COLUMN, scores)?;
        } else {
            for (target, values) in self.targets.iter().zip(columns) {
                out = out.with_column(target.name(), values)?;
            }
        }
        Ok(out)
    }
}

/// Builder for [`Objective`]. All invariants are checked in
/// [`build()`](Self::build).
#[derive(Clone, Debug)]
pub struct ObjectiveBuilder {
    mode: ObjectiveMode,
    targets: Vec<Target>,
    weights: Option<Vec<f64>>,
    combine: CombineFunc,
}

impl ObjectiveBuilder {
    /// Appends a target.
    #[must_use]
    pub fn target(mut self, target: impl Into<Target>) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Appends every target from an iterator.
    #[must_use]
    pub fn targets<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Target>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Sets per-target weights. Defaults to equal weights when unset;
    /// always renormalized to sum to 100 at build time.
    #[must_use]
    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Selects the desirability reducer. Defaults to
    /// [`CombineFunc::GeomMean`]; ignored outside desirability mode.
    #[must_use]
    pub fn combine(mut self, combine: CombineFunc) -> Self {
        self.combine = combine;
        self
    }

    /// Validates the configuration and builds the objective.
    ///
    /// # Errors
    ///
    /// - [`Error::NoTargets`] with an empty target list.
    /// - [`Error::TargetCount`] when the count does not fit the mode
    ///   (`Single` wants exactly one, `Multi` more than one).
    /// - [`Error::DuplicateTarget`] when two targets share a name.
    /// - [`Error::UnboundedTarget`] for an unbounded target in
    ///   desirability mode.
    /// - [`Error::WeightCount`] / [`Error::InvalidWeights`] for malformed
    ///   weights.
    pub fn build(self) -> Result<Objective> {
        if self.targets.is_empty() {
            return Err(Error::NoTargets);
        }
        match self.mode {
            ObjectiveMode::Single if self.targets.len() != 1 => {
                return Err(Error::TargetCount {
                    mode: self.mode,
                    count: self.targets.len(),
                    requirement: "SINGLE requires exactly one target",
                });
            }
            ObjectiveMode::Multi if self.targets.len() <= 1 => {
                return Err(Error::TargetCount {
                    mode: self.mode,
                    count: self.targets.len(),
                    requirement: "MULTI requires more than one target",
                });
            }
            _ => {}
        }

        for (i, target) in self.targets.iter().enumerate() {
            if self.targets[..i].iter().any(|t| t.name() == target.name()) {
                return Err(Error::DuplicateTarget {
                    name: target.name().to_owned(),
                });
            }
        }

        if self.mode == ObjectiveMode::Desirability {
            for target in &self.targets {
                if target.bounds().is_none() {
                    return Err(Error::UnboundedTarget {
                        target: target.name().to_owned(),
                    });
                }
            }
        }

        let weights = normalize_weights(self.weights, self.targets.len())?;

        Ok(Objective {
            mode: self.mode,
            targets: self.targets,
            weights,
            combine: self.combine,
        })
    }
}

/// Fills in equal weights when none were given, then rescales so the sum is
/// exactly 100 while preserving ratios.
fn normalize_weights(weights: Option<Vec<f64>>, targets: usize) -> Result<Vec<f64>> {
    #[allow(clippy::cast_precision_loss)]
    let weights = weights.unwrap_or_else(|| vec![100.0 / targets as f64; targets]);
    if weights.len() != targets {
        return Err(Error::WeightCount {
            weights: weights.len(),
            targets,
        });
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(Error::InvalidWeights);
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(Error::InvalidWeights);
    }
    Ok(weights.iter().map(|w| 100.0 * w / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{NumericalTarget, TargetMode};

    fn bounded(name: &str, mode: TargetMode) -> NumericalTarget {
        NumericalTarget::builder(name, mode)
            .bounds(0.0, 100.0)
            .build()
            .unwrap()
    }

    #[test]
    fn single_requires_exactly_one_target() {
        assert!(matches!(
            Objective::builder(ObjectiveMode::Single).build(),
            Err(Error::NoTargets)
        ));
        let result = Objective::builder(ObjectiveMode::Single)
            .target(bounded("a", TargetMode::Max))
            .target(bounded("b", TargetMode::Min))
            .build();
        assert!(matches!(
            result,
            Err(Error::TargetCount {
                mode: ObjectiveMode::Single,
                count: 2,
                ..
            })
        ));
    }

    #[test]
    fn multi_requires_more_than_one_target() {
        let result = Objective::builder(ObjectiveMode::Multi)
            .target(bounded("a", TargetMode::Max))
            .build();
        assert!(matches!(
            result,
            Err(Error::TargetCount {
                mode: ObjectiveMode::Multi,
                count: 1,
                ..
            })
        ));
    }

    #[test]
    fn desirability_requires_bounds_on_every_target() {
        let unbounded = NumericalTarget::builder("b", TargetMode::Min).build().unwrap();
        let result = Objective::builder(ObjectiveMode::Desirability)
            .target(bounded("a", TargetMode::Max))
            .target(unbounded)
            .build();
        assert!(matches!(
            result,
            Err(Error::UnboundedTarget { target }) if target == "b"
        ));
    }

    #[test]
    fn duplicate_target_names_rejected() {
        let result = Objective::builder(ObjectiveMode::Multi)
            .target(bounded("a", TargetMode::Max))
            .target(bounded("a", TargetMode::Min))
            .build();
        assert!(matches!(
            result,
            Err(Error::DuplicateTarget { name }) if name == "a"
        ));
    }

    #[test]
    fn weight_count_must_match_targets() {
        let result = Objective::builder(ObjectiveMode::Multi)
            .target(bounded("a", TargetMode::Max))
            .target(bounded("b", TargetMode::Min))
            .weights(vec![1.0])
            .build();
        assert!(matches!(
            result,
            Err(Error::WeightCount {
                weights: 1,
                targets: 2,
            })
        ));
    }

    #[test]
    fn negative_or_zero_sum_weights_rejected() {
        let base = || {
            Objective::builder(ObjectiveMode::Multi)
                .target(bounded("a", TargetMode::Max))
                .target(bounded("b", TargetMode::Min))
        };
        assert!(matches!(
            base().weights(vec![-1.0, 2.0]).build(),
            Err(Error::InvalidWeights)
        ));
        assert!(matches!(
            base().weights(vec![0.0, 0.0]).build(),
            Err(Error::InvalidWeights)
        ));
    }

    #[test]
    fn weights_normalize_to_100_preserving_ratios() {
        let objective = Objective::builder(ObjectiveMode::Multi)
            .target(bounded("a", TargetMode::Max))
            .target(bounded("b", TargetMode::Min))
            .weights(vec![20.0, 30.0])
            .build()
            .unwrap();
        let weights = objective.weights();
        assert!((weights.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        assert!((weights[0] - 40.0).abs() < 1e-9);
        assert!((weights[1] - 60.0).abs() < 1e-9);
    }

    #[test]
    fn default_weights_are_equal() {
        let objective = Objective::builder(ObjectiveMode::Multi)
            .targets([
                bounded("a", TargetMode::Max),
                bounded("b", TargetMode::Min),
                bounded("c", TargetMode::Max),
                bounded("d", TargetMode::Min),
            ])
            .build()
            .unwrap();
        for w in objective.weights() {
            assert!((w - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn single_mode_transforms_one_column() {
        let objective = Objective::builder(ObjectiveMode::Single)
            .target(bounded("yield", TargetMode::Max))
            .build()
            .unwrap();
        let data = Table::new()
            .with_column("yield", vec![0.0, 50.0, 100.0])
            .unwrap();
        let out = objective.transform(&data).unwrap();
        assert_eq!(out.column("yield"), Some(&[0.0, 0.5, 1.0][..]));
        assert_eq!(out.columns().len(), 1);
    }

    #[test]
    fn multi_mode_keeps_one_column_per_target() {
        let objective = Objective::builder(ObjectiveMode::Multi)
            .target(bounded("a", TargetMode::Max))
            .target(bounded("b", TargetMode::Min))
            .build()
            .unwrap();
        let data = Table::new()
            .with_column("b", vec![100.0, 0.0])
            .unwrap()
            .with_column("a", vec![100.0, 0.0])
            .unwrap()
            .with_column("ignored", vec![7.0, 7.0])
            .unwrap();
        let out = objective.transform(&data).unwrap();
        // Output follows target order, not input column order; extras drop.
        assert_eq!(out.columns().len(), 2);
        assert_eq!(out.columns()[0].name(), "a");
        assert_eq!(out.column("a"), Some(&[1.0, 0.0][..]));
        assert_eq!(out.column("b"), Some(&[0.0, 1.0][..]));
        assert_eq!(out.column("ignored"), None);
    }

    #[test]
    fn missing_column_is_reported() {
        let objective = Objective::builder(ObjectiveMode::Single)
            .target(bounded("yield", TargetMode::Max))
            .build()
            .unwrap();
        let data = Table::new().with_column("cost", vec![1.0]).unwrap();
        assert!(matches!(
            objective.transform(&data),
            Err(Error::MissingColumn { name }) if name == "yield"
        ));
    }

    #[test]
    fn desirability_mean_end_to_end() {
        let objective = Objective::builder(ObjectiveMode::Desirability)
            .target(bounded("t1", TargetMode::Max))
            .target(bounded("t2", TargetMode::Min))
            .weights(vec![20.0, 30.0])
            .combine(CombineFunc::Mean)
            .build()
            .unwrap();
        // Row 0 is the best possible for both targets, row 1 the worst.
        let data = Table::new()
            .with_column("t1", vec![100.0, 0.0])
            .unwrap()
            .with_column("t2", vec![0.0, 100.0])
            .unwrap();
        let out = objective.transform(&data).unwrap();
        assert_eq!(out.columns().len(), 1);
        let scores = out.column(AGGREGATE_COLUMN).unwrap();
        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert!(scores[1].abs() < 1e-12);
    }

    #[test]
    fn desirability_geom_mean_aggregates() {
        let objective = Objective::builder(ObjectiveMode::Desirability)
            .target(bounded("t1", TargetMode::Max))
            .target(bounded("t2", TargetMode::Max))
            .build()
            .unwrap();
        // Transformed values 0.25 and 1.0, equal weights: sqrt(0.25) = 0.5.
        let data = Table::new()
            .with_column("t1", vec![25.0])
            .unwrap()
            .with_column("t2", vec![100.0])
            .unwrap();
        let out = objective.transform(&data).unwrap();
        let scores = out.column(AGGREGATE_COLUMN).unwrap();
        assert!((scores[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn transform_preserves_row_index() {
        let objective = Objective::builder(ObjectiveMode::Desirability)
            .target(bounded("t", TargetMode::Max))
            .build()
            .unwrap();
        let data = Table::with_index(vec![42, 7, 13])
            .with_column("t", vec![0.0, 50.0, 100.0])
            .unwrap();
        let out = objective.transform(&data).unwrap();
        assert_eq!(out.index(), &[42, 7, 13]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn mode_and_combine_tags_parse() {
        assert_eq!("SINGLE".parse::<ObjectiveMode>().unwrap(), ObjectiveMode::Single);
        assert_eq!(
            "DESIRABILITY".parse::<ObjectiveMode>().unwrap(),
            ObjectiveMode::Desirability
        );
        assert!(matches!(
            "BEST".parse::<ObjectiveMode>(),
            Err(Error::UnknownMode(tag, _)) if tag == "BEST"
        ));
        assert_eq!("GEOM_MEAN".parse::<CombineFunc>().unwrap(), CombineFunc::GeomMean);
        assert!(matches!(
            "MEDIAN".parse::<CombineFunc>(),
            Err(Error::UnknownCombineFunc(tag)) if tag == "MEDIAN"
        ));
    }
}
