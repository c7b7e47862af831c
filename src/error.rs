#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is not strictly less than the upper bound.
    #[error("invalid bounds: upper ({upper}) must be greater than lower ({lower})")]
    InvalidBounds {
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// Returned when a bound is NaN or infinite.
    #[error(
        "non-finite bounds ({lower}, {upper}): bounds must be finite floats; omit them entirely for an unbounded target"
    )]
    NonFiniteBounds {
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// Returned when a MATCH-mode target is built without bounds.
    #[error("target '{target}' is in MATCH mode but no bounds were provided; bounds are mandatory for MATCH")]
    MatchWithoutBounds {
        /// The name of the offending target.
        target: String,
    },

    /// Returned when the chosen bound transform is not allowed for the target mode.
    #[error(
        "bound transform {transform:?} for target '{target}' is not compatible with mode {mode:?}; allowed: {allowed:?}"
    )]
    IncompatibleTransform {
        /// The name of the offending target.
        target: String,
        /// The target's optimization mode.
        mode: crate::target::TargetMode,
        /// The rejected transform.
        transform: crate::transform::BoundTransform,
        /// The transforms permitted for this mode.
        allowed: &'static [crate::transform::BoundTransform],
    },

    /// Returned when an objective is built with no targets at all.
    #[error("an objective requires at least one target")]
    NoTargets,

    /// Returned when the target count does not fit the objective mode.
    #[error("objective mode {mode:?} cannot be built with {count} targets: {requirement}")]
    TargetCount {
        /// The objective mode.
        mode: crate::objective::ObjectiveMode,
        /// The number of targets supplied.
        count: usize,
        /// Human-readable statement of the mode's requirement.
        requirement: &'static str,
    },

    /// Returned when two targets in one objective share a name.
    #[error("duplicate target name '{name}': target names must be unique within an objective")]
    DuplicateTarget {
        /// The repeated name.
        name: String,
    },

    /// Returned when a desirability objective contains an unbounded target.
    #[error("target '{target}' has no bounds, but every target must declare bounds in DESIRABILITY mode")]
    UnboundedTarget {
        /// The name of the unbounded target.
        target: String,
    },

    /// Returned when the weight count does not match the target count.
    #[error("weight list has {weights} values but the objective defines {targets} targets")]
    WeightCount {
        /// The number of weights supplied.
        weights: usize,
        /// The number of targets defined.
        targets: usize,
    },

    /// Returned when weights are negative or sum to zero.
    #[error("invalid weights: values must be non-negative with a positive sum")]
    InvalidWeights,

    /// Returned when a column named by a target is missing from the input table.
    #[error("input table has no column named '{name}'")]
    MissingColumn {
        /// The missing column name.
        name: String,
    },

    /// Returned when a column's length does not match the table's row count.
    #[error("column '{name}' has {got} values but the table has {expected} rows")]
    ColumnLength {
        /// The offending column name.
        name: String,
        /// The table's row count.
        expected: usize,
        /// The column's value count.
        got: usize,
    },

    /// Returned when a column name is inserted twice into one table.
    #[error("table already has a column named '{name}'")]
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },

    /// Returned when a config spec carries an unrecognized target kind tag.
    #[error("unknown target kind '{0}': expected one of [\"NUM\"]")]
    UnknownTargetKind(String),

    /// Returned when a config spec carries an unrecognized mode tag.
    #[error("unknown mode '{0}': expected one of {1:?}")]
    UnknownMode(String, &'static [&'static str]),

    /// Returned when a config spec carries an unrecognized bound transform tag.
    #[error("unknown bound transform '{0}': expected one of [\"luLINEAR\", \"lmuLINEAR\", \"BELL\"]")]
    UnknownTransform(String),

    /// Returned when a config spec carries an unrecognized combine function tag.
    #[error("unknown combine function '{0}': expected one of [\"MEAN\", \"GEOM_MEAN\"]")]
    UnknownCombineFunc(String),
}

pub type Result<T> = core::result::Result<T, Error>;
