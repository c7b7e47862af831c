//! Bound-transform functions: pure mappings from raw measurements into the
//! `[0, 1]` desirability scale.
//!
//! Every transform takes a finite, validated [`Bounds`] pair — bound
//! validity is a construction-time concern handled by [`Bounds::new`], so
//! none of these functions can fail at call time.
//!
//! | Transform | Shape | Used by |
//! |---|---|---|
//! | [`BoundTransform::LuLinear`] | monotonic ramp over `[l, u]`, clamped | `Max`, `Min` |
//! | [`BoundTransform::LmuLinear`] | tent peaking at the midpoint, clamped | `Match` |
//! | [`BoundTransform::Bell`] | Gaussian peaking at the midpoint, asymptotic | `Match` |
//!
//! # Example
//!
//! ```
//! use desirability::prelude::*;
//!
//! let bounds = Bounds::new(0.0, 10.0).unwrap();
//! let t = BoundTransform::LuLinear;
//!
//! assert!((t.apply(10.0, bounds, false) - 1.0).abs() < 1e-12);
//! assert!((t.apply(10.0, bounds, true)).abs() < 1e-12);
//! // Out-of-range values clamp instead of erroring.
//! assert!((t.apply(25.0, bounds, false) - 1.0).abs() < 1e-12);
//! ```

use core::str::FromStr;

use crate::error::Error;
use crate::target::Bounds;

/// Identifier for a bound-transform function.
///
/// The string tags accepted by the config surface are `"luLINEAR"`,
/// `"lmuLINEAR"`, and `"BELL"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundTransform {
    /// Linear rescale of `[l, u]` onto `[0, 1]` (or `[1, 0]` descending).
    LuLinear,
    /// Tent-shaped rescale: highest at the midpoint of `[l, u]`, lowest at
    /// either bound.
    LmuLinear,
    /// Smooth Gaussian peak at the midpoint of `[l, u]`.
    Bell,
}

impl BoundTransform {
    /// The config-surface tag for this transform.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::LuLinear => "luLINEAR",
            Self::LmuLinear => "lmuLINEAR",
            Self::Bell => "BELL",
        }
    }

    /// Applies this transform to a single raw value.
    ///
    /// `descending` selects the direction for [`LuLinear`](Self::LuLinear)
    /// (lower raw values score higher); it is ignored by the symmetric
    /// transforms.
    #[must_use]
    pub fn apply(self, value: f64, bounds: Bounds, descending: bool) -> f64 {
        match self {
            Self::LuLinear => linear_lu(value, bounds, descending),
            Self::LmuLinear => linear_lmu(value, bounds),
            Self::Bell => bell(value, bounds),
        }
    }
}

impl FromStr for BoundTransform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "luLINEAR" => Ok(Self::LuLinear),
            "lmuLINEAR" => Ok(Self::LmuLinear),
            "BELL" => Ok(Self::Bell),
            other => Err(Error::UnknownTransform(other.to_owned())),
        }
    }
}

impl core::fmt::Display for BoundTransform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Linearly rescales `[l, u]` onto `[0, 1]`, clamping values outside the
/// bounds to the nearest bound's image.
///
/// With `descending = true` the mapping is mirrored onto `[1, 0]`, so lower
/// raw values score higher.
#[must_use]
pub fn linear_lu(value: f64, bounds: Bounds, descending: bool) -> f64 {
    let scaled = ((value - bounds.lower()) / bounds.span()).clamp(0.0, 1.0);
    if descending { 1.0 - scaled } else { scaled }
}

/// Tent-shaped linear rescale: `1` at the midpoint of `[l, u]`, `0` at
/// either bound, clamped to `0` outside the bounds.
#[must_use]
pub fn linear_lmu(value: f64, bounds: Bounds) -> f64 {
    let scaled = (value - bounds.lower()) / bounds.span();
    (1.0 - (2.0 * scaled - 1.0).abs()).clamp(0.0, 1.0)
}

/// Gaussian bell centered on the midpoint of `[l, u]` with
/// `sigma = (u - l) / 2`, so each bound sits one standard deviation from the
/// peak (≈ 0.6065 of peak height). Asymptotic in both directions; no
/// clamping is needed.
#[must_use]
pub fn bell(value: f64, bounds: Bounds) -> f64 {
    let mean = bounds.midpoint();
    let sigma = bounds.span() / 2.0;
    (-((value - mean) / sigma).powi(2) / 2.0).exp()
}
