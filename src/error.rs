//! Errors
//!
//! Error type shared by the dataset, induction, and reporting layers.
use thiserror::Error;

/// Errors raised while building trees or exporting results.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DtreeError {
    /// The dataset holds no samples.
    #[error("The dataset contains no samples.")]
    EmptyDataset,
    /// The dataset declares no attributes or no classes.
    #[error("The dataset must declare at least one attribute and one class (got {0} attributes, {1} classes).")]
    EmptySchema(usize, usize),
    /// A feature row does not match the declared attribute count.
    #[error("Sample {sample} has {found} values, expected {expected}.")]
    ShapeMismatch {
        /// Offending sample.
        sample: usize,
        /// Declared attribute count.
        expected: usize,
        /// Values found in the row.
        found: usize,
    },
    /// The label vector does not hold one label per sample.
    #[error("Got {found} labels for {expected} samples.")]
    LabelCount {
        /// Number of samples.
        expected: usize,
        /// Number of labels.
        found: usize,
    },
    /// A numerical value is NaN or infinite.
    #[error("Sample {sample} has non-finite value {value} for numerical attribute {attribute}.")]
    NonFinite {
        /// Offending sample.
        sample: usize,
        /// Attribute index.
        attribute: usize,
        /// Value found.
        value: f64,
    },
    /// A label is outside `[0, n_classes)`.
    #[error("Sample {sample} has label {label}, but only {n_classes} classes are declared.")]
    LabelOutOfRange {
        /// Offending sample.
        sample: usize,
        /// Label found.
        label: usize,
        /// Declared class count.
        n_classes: usize,
    },
    /// A categorical attribute declares zero levels.
    #[error("Categorical attribute {0} declares no levels.")]
    NoLevels(usize),
    /// A categorical value is not an integral level code in range.
    #[error("Sample {sample} has value {value} for categorical attribute {attribute}, which is not a level code.")]
    InvalidLevel {
        /// Offending sample.
        sample: usize,
        /// Attribute index.
        attribute: usize,
        /// Value found.
        value: f64,
    },
    /// A representation references an attribute the dataset does not have.
    #[error("Node {node} is assigned attribute {attribute}, but the dataset has {n_attributes} attributes.")]
    UnknownAttribute {
        /// Tree position.
        node: usize,
        /// Attribute referenced.
        attribute: usize,
        /// Attributes available.
        n_attributes: usize,
    },
    /// The requested depth exceeds the supported maximum.
    #[error("Maximum depth {depth} exceeds the supported limit of {limit}.")]
    DepthTooLarge {
        /// Requested depth.
        depth: usize,
        /// Largest supported depth.
        limit: usize,
    },
    /// A representation does not match the tree capacity.
    #[error("Representation has {found} entries, expected {expected}.")]
    RepresentationLength {
        /// Tree capacity.
        expected: usize,
        /// Length provided.
        found: usize,
    },
    /// Stored accuracy disagrees with the accuracy recomputed from the tree.
    #[error("Wrong accuracy value: stored {stored}, recomputed {recomputed}.")]
    AccuracyMismatch {
        /// Accuracy carried by the solution.
        stored: f64,
        /// Accuracy recomputed from the leaves.
        recomputed: f64,
    },
    /// Invalid algorithm configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DtreeError>;
