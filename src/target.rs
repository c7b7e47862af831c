//! Target types: one measured quantity with an optimization direction.
//!
//! A [`NumericalTarget`] couples a column name with a [`TargetMode`],
//! optional [`Bounds`], and the bound transform used to normalize raw
//! measurements. All validation happens in the builder's
//! [`build()`](NumericalTargetBuilder::build); a constructed target is
//! immutable and its [`transform`](NumericalTarget::transform) is a pure,
//! infallible function.
//!
//! # Example
//!
//! ```
//! use desirability::prelude::*;
//!
//! // Maximize a bounded yield: 0 % maps to 0.0 desirability, 100 % to 1.0.
//! let yield_t = NumericalTarget::builder("yield", TargetMode::Max)
//!     .bounds(0.0, 100.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(yield_t.transform(&[0.0, 50.0, 100.0]), vec![0.0, 0.5, 1.0]);
//!
//! // Match a temperature window with a smooth bell around its center.
//! let temp = NumericalTarget::builder("temperature", TargetMode::Match)
//!     .bounds(40.0, 60.0)
//!     .transform_func(BoundTransform::Bell)
//!     .build()
//!     .unwrap();
//! assert!((temp.transform(&[50.0])[0] - 1.0).abs() < 1e-12);
//! ```

use core::str::FromStr;

use crate::error::{Error, Result};
use crate::transform::BoundTransform;

/// A validated pair of finite bounds with `upper > lower`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Creates a bound pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteBounds`] if either value is NaN or
    /// infinite, and [`Error::InvalidBounds`] if `upper <= lower`. Half-open
    /// bounds are not supported: a target is either fully bounded or
    /// unbounded.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::NonFiniteBounds { lower, upper });
        }
        if upper <= lower {
            return Err(Error::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// The lower bound.
    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    /// The upper bound.
    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    /// The width `upper - lower` (always positive).
    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    /// The midpoint of the bound interval.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// The optimization direction of a target.
///
/// The string tags accepted by the config surface are `"MAX"`, `"MIN"`,
/// and `"MATCH"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetMode {
    /// Higher raw values are better.
    Max,
    /// Lower raw values are better.
    Min,
    /// Values closest to the center of the bound window are better.
    Match,
}

impl TargetMode {
    /// The bound transforms permitted for this mode, in preference order.
    ///
    /// The first entry is the default used when a bounded target does not
    /// name a transform explicitly.
    #[must_use]
    pub fn allowed_transforms(self) -> &'static [BoundTransform] {
        match self {
            Self::Max | Self::Min => &[BoundTransform::LuLinear],
            Self::Match => &[BoundTransform::LmuLinear, BoundTransform::Bell],
        }
    }

    /// The config-surface tag for this mode.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Match => "MATCH",
        }
    }
}

impl FromStr for TargetMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MAX" => Ok(Self::Max),
            "MIN" => Ok(Self::Min),
            "MATCH" => Ok(Self::Match),
            other => Err(Error::UnknownMode(
                other.to_owned(),
                &["MAX", "MIN", "MATCH"],
            )),
        }
    }
}

impl core::fmt::Display for TargetMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A numerical target: one measured quantity to maximize, minimize, or
/// match to a window.
///
/// Constructed via [`NumericalTarget::builder`]; immutable afterwards. When
/// bounds are present the bound transform is resolved at construction time
/// (defaulting to the mode's first allowed transform with a warning), so
/// [`transform`](Self::transform) never consults mutable state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericalTarget {
    name: String,
    mode: TargetMode,
    bounds: Option<Bounds>,
    transform: Option<BoundTransform>,
}

impl NumericalTarget {
    /// Starts building a target with the given column name and mode.
    #[must_use]
    pub fn builder(name: impl Into<String>, mode: TargetMode) -> NumericalTargetBuilder {
        NumericalTargetBuilder {
            name: name.into(),
            mode,
            bounds: None,
            transform: None,
        }
    }


    /// The column name this target reads from the input table.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The optimization mode.
    #[must_use]
    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// The bounds, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// The resolved bound transform. Always `Some` when bounds are set
    /// (explicitly chosen or defaulted at construction); unbounded targets
    /// may still carry one, but their transform path ignores it.
    #[must_use]
    pub fn transform_func(&self) -> Option<BoundTransform> {
        self.transform
    }

    /// Transforms raw measurements into the computational representation.
    ///
    /// - `Max` with bounds: ascending bound transform; without bounds the
    ///   values pass through unchanged.
    /// - `Min` with bounds: descending bound transform; without bounds every
    ///   value is negated, so lower raw values score higher downstream.
    /// - `Match`: the resolved symmetric transform (bounds are guaranteed
    ///   by construction).
    ///
    /// The input is untouched; calling twice yields identical results.
    #[must_use]
    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        if let Some(bounds) = self.bounds {
            // Guaranteed by the builder: bounds imply a resolved transform.
            let func = self
                .transform
                .unwrap_or_else(|| self.mode.allowed_transforms()[0]);
            let descending = self.mode == TargetMode::Min;
            values
                .iter()
                .map(|&v| func.apply(v, bounds, descending))
                .collect()
        } else {
            match self.mode {
                TargetMode::Min => values.iter().map(|v| -v).collect(),
                // MATCH without bounds is unconstructible; MAX passes through.
                TargetMode::Max | TargetMode::Match => values.to_vec(),
            }
        }
    }
}

/// Builder for [`NumericalTarget`]. All invariants are checked in
/// [`build()`](Self::build).
#[derive(Clone, Debug)]
pub struct NumericalTargetBuilder {
    name: String,
    mode: TargetMode,
    bounds: Option<(f64, f64)>,
    transform: Option<BoundTransform>,
}

impl NumericalTargetBuilder {
    /// Sets finite bounds `(lower, upper)` with `upper > lower`.
    ///
    /// Invalid pairs are reported by [`build()`](Self::build), not here, so
    /// the chain stays fluent.
    #[must_use]
    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        // Validation is deferred to build(); stash the raw pair unchecked.
        self.bounds = Some((lower, upper));
        self
    }

    /// Selects the bound transform explicitly. Must be in the mode's
    /// [allowed set](TargetMode::allowed_transforms).
    #[must_use]
    pub fn transform_func(mut self, transform: BoundTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Validates the configuration and builds the target.
    ///
    /// When bounds are present and no transform was named, the mode's first
    /// allowed transform is filled in and a warning naming the defaulted
    /// value is emitted (via `tracing`, when enabled).
    ///
    /// # Errors
    ///
    /// - [`Error::NonFiniteBounds`] / [`Error::InvalidBounds`] for a
    ///   malformed bound pair.
    /// - [`Error::MatchWithoutBounds`] for a `Match` target without bounds.
    /// - [`Error::IncompatibleTransform`] when the named transform is not in
    ///   the mode's allowed set.
    pub fn build(self) -> Result<NumericalTarget> {
        let bounds = match self.bounds {
            Some((lower, upper)) => Some(Bounds::new(lower, upper)?),
            None => None,
        };

        if self.mode == TargetMode::Match && bounds.is_none() {
            return Err(Error::MatchWithoutBounds { target: self.name });
        }

        let allowed = self.mode.allowed_transforms();
        let transform = match (self.transform, bounds) {
            (Some(func), _) => {
                // Mode compatibility holds whether or not bounds are set.
                if !allowed.contains(&func) {
                    return Err(Error::IncompatibleTransform {
                        target: self.name,
                        mode: self.mode,
                        transform: func,
                        allowed,
                    });
                }
                Some(func)
            }
            (None, Some(_)) => {
                let default = allowed[0];
                trace_warn!(
                    target_name = %self.name,
                    mode = %self.mode,
                    transform = %default,
                    "no bound transform specified for bounded target; using mode default"
                );
                Some(default)
            }
            (None, None) => None,
        };

        Ok(NumericalTarget {
            name: self.name,
            mode: self.mode,
            bounds,
            transform,
        })
    }
}

/// A target of any kind.
///
/// Closed sum type over the supported target kinds; the config surface maps
/// kind tags to variants through [`Target::from_spec`]. Currently only
/// numerical targets exist, but categorical kinds slot in as new variants
/// without touching call sites that match exhaustively.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// A numerical quantity (kind tag `"NUM"`).
    Numerical(NumericalTarget),
}

impl Target {
    /// Builds a target from an already-deserialized spec, dispatching on
    /// the kind tag.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTargetKind`] for an unrecognized kind tag, plus any
    /// error the kind's own builder reports.
    pub fn from_spec(spec: &crate::config::TargetSpec) -> Result<Self> {
        match spec.kind.as_str() {
            "NUM" => {
                let mode: TargetMode = spec.mode.parse()?;
                let mut builder = NumericalTarget::builder(spec.name.clone(), mode);
                if let Some((lower, upper)) = spec.bounds {
                    builder = builder.bounds(lower, upper);
                }
                if let Some(tag) = &spec.transform {
                    builder = builder.transform_func(tag.parse()?);
                }
                Ok(Self::Numerical(builder.build()?))
            }
            other => Err(Error::UnknownTargetKind(other.to_owned())),
        }
    }

    /// The column name this target reads from the input table.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Numerical(t) => t.name(),
        }
    }

    /// The bounds, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Numerical(t) => t.bounds(),
        }
    }

    /// Transforms raw measurements into the computational representation.
    #[must_use]
    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        match self {
            Self::Numerical(t) => t.transform(values),
        }
    }
}

impl From<NumericalTarget> for Target {
    fn from(target: NumericalTarget) -> Self {
        Self::Numerical(target)
    }
}
