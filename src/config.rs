//! Already-deserialized configuration specs.
//!
//! The engine does not parse files. An upstream loader deserializes its
//! config format (JSON, YAML, …) into these plain structs — string tags and
//! all — and hands them to [`Target::from_spec`](crate::Target::from_spec)
//! or [`Objective::from_spec`](crate::Objective::from_spec), which map tags
//! onto the closed enums and run full validation.
//!
//! With the `serde` feature the specs derive `Deserialize`/`Serialize`, so
//! a loader can go straight from its format into them:
//!
//! ```
//! # #[cfg(feature = "serde")] {
//! use desirability::prelude::*;
//!
//! let spec: ObjectiveSpec = serde_json::from_str(
//!     r#"{
//!         "mode": "DESIRABILITY",
//!         "targets": [
//!             {"name": "yield", "type": "NUM", "mode": "MAX", "bounds": [0.0, 100.0]},
//!             {"name": "cost", "type": "NUM", "mode": "MIN", "bounds": [0.0, 50.0]}
//!         ],
//!         "weights": [1.0, 1.0],
//!         "combine_func": "MEAN"
//!     }"#,
//! )
//! .unwrap();
//! let objective = Objective::from_spec(&spec).unwrap();
//! assert_eq!(objective.targets().len(), 2);
//! # }
//! ```

/// Spec for one target, as produced by an external config loader.
///
/// Field tags follow the config surface: `kind` is serialized as `"type"`,
/// and `transform` as `"bounds_transform_func"`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSpec {
    /// Column name, unique within an objective.
    pub name: String,
    /// Target kind tag; `"NUM"` for numerical targets.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Mode tag: `"MAX"`, `"MIN"`, or `"MATCH"`.
    pub mode: String,
    /// Optional `(lower, upper)` bound pair.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds: Option<(f64, f64)>,
    /// Optional bound transform tag: `"luLINEAR"`, `"lmuLINEAR"`, or
    /// `"BELL"`. Defaults per mode when omitted for a bounded target.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "bounds_transform_func")
    )]
    pub transform: Option<String>,
}

/// Spec for a whole objective, as produced by an external config loader.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveSpec {
    /// Mode tag: `"SINGLE"`, `"MULTI"`, or `"DESIRABILITY"`.
    pub mode: String,
    /// One spec per target.
    pub targets: Vec<TargetSpec>,
    /// Optional per-target weights; equal weights when omitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: Option<Vec<f64>>,
    /// Optional combine tag: `"MEAN"` or `"GEOM_MEAN"` (the default).
    #[cfg_attr(feature = "serde", serde(default, rename = "combine_func"))]
    pub combine: Option<String>,
}
