//! Training data consumed by the inducers.
//!
//! A [`Dataset`] is read-only once built: a row-major feature matrix,
//! one class label per sample, and the kind of every attribute.
//! Categorical values are stored as level codes (`0.0`, `1.0`, ...).

use crate::error::{DtreeError, Result};

/// Kind of an attribute column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    /// Real-valued; splits send `value <= threshold` left.
    Numerical,
    /// Level codes in `[0, levels)`; splits send `value == level` left.
    Categorical {
        /// Number of distinct level codes.
        levels: usize,
    },
}

impl AttributeKind {
    /// Comparison symbol used when printing a split on this attribute.
    pub fn operator(&self) -> &'static str {
        match self {
            AttributeKind::Numerical => "<=",
            AttributeKind::Categorical { .. } => "=",
        }
    }
}

/// Validated classification dataset.
///
/// # Examples
///
/// ```
/// use u_dtree::data::{AttributeKind, Dataset};
///
/// let data = Dataset::new(
///     vec![vec![0.0], vec![0.0], vec![1.0], vec![1.0]],
///     vec![0, 0, 1, 1],
///     vec![AttributeKind::Numerical],
///     2,
/// )
/// .unwrap();
/// assert_eq!(data.n_samples(), 4);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    values: Vec<f64>,
    labels: Vec<usize>,
    attributes: Vec<AttributeKind>,
    n_classes: usize,
}

impl Dataset {
    /// Builds a dataset from one row of attribute values per sample.
    pub fn new(
        rows: Vec<Vec<f64>>,
        labels: Vec<usize>,
        attributes: Vec<AttributeKind>,
        n_classes: usize,
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(DtreeError::EmptyDataset);
        }
        if attributes.is_empty() || n_classes == 0 {
            return Err(DtreeError::EmptySchema(attributes.len(), n_classes));
        }
        if labels.len() != rows.len() {
            return Err(DtreeError::LabelCount {
                expected: rows.len(),
                found: labels.len(),
            });
        }
        for (a, kind) in attributes.iter().enumerate() {
            if let AttributeKind::Categorical { levels: 0 } = kind {
                return Err(DtreeError::NoLevels(a));
            }
        }

        let n_attributes = attributes.len();
        let mut values = Vec::with_capacity(rows.len() * n_attributes);
        for (s, row) in rows.into_iter().enumerate() {
            if row.len() != n_attributes {
                return Err(DtreeError::ShapeMismatch {
                    sample: s,
                    expected: n_attributes,
                    found: row.len(),
                });
            }
            if labels[s] >= n_classes {
                return Err(DtreeError::LabelOutOfRange {
                    sample: s,
                    label: labels[s],
                    n_classes,
                });
            }
            for (a, &value) in row.iter().enumerate() {
                match attributes[a] {
                    AttributeKind::Numerical if !value.is_finite() => {
                        return Err(DtreeError::NonFinite {
                            sample: s,
                            attribute: a,
                            value,
                        });
                    }
                    AttributeKind::Categorical { levels }
                        if !value.is_finite()
                            || value < 0.0
                            || value.fract() != 0.0
                            || value >= levels as f64 =>
                    {
                        return Err(DtreeError::InvalidLevel {
                            sample: s,
                            attribute: a,
                            value,
                        });
                    }
                    _ => {}
                }
            }
            values.extend(row);
        }

        Ok(Self {
            values,
            labels,
            attributes,
            n_classes,
        })
    }

    /// Number of samples.
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    /// Number of attribute columns.
    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Value of `attribute` for `sample`.
    #[inline]
    pub fn value(&self, sample: usize, attribute: usize) -> f64 {
        self.values[sample * self.attributes.len() + attribute]
    }

    /// Class label of `sample`.
    #[inline]
    pub fn label(&self, sample: usize) -> usize {
        self.labels[sample]
    }

    /// Kind of `attribute`.
    #[inline]
    pub fn kind(&self, attribute: usize) -> AttributeKind {
        self.attributes[attribute]
    }
}
