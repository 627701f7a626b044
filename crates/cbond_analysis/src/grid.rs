//! The solved grid handed over by the external solver.

use num_traits::Float;
use thiserror::Error;

/// Solved-grid construction errors.
///
/// The grid is validated once at the solver boundary so the classifier can
/// index it without per-access checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no time layers.
    #[error("Grid has no time layers")]
    Empty,

    /// A matrix has a different number of time layers than the time axis.
    #[error("{matrix} matrix has {actual} time layers, expected {expected}")]
    LayerCountMismatch {
        /// Name of the offending matrix
        matrix: &'static str,
        /// Number of time layers on the time axis
        expected: usize,
        /// Number of layers in the matrix
        actual: usize,
    },

    /// A matrix row is not aligned with its price row.
    #[error("{matrix} row at time index {layer} has {actual} entries, expected {expected}")]
    RowMismatch {
        /// Name of the offending matrix
        matrix: &'static str,
        /// Time index of the offending row
        layer: usize,
        /// Length of the price row at that time index
        expected: usize,
        /// Length of the matrix row
        actual: usize,
    },
}

/// Output of one backward-induction pricing run, read-only for analysis.
///
/// Holds the time axis, the price ladder per time layer, the solved value
/// matrix, and the auxiliary indicator matrix the solver recorded alongside
/// it (the continuation value before the call cap was applied, used to
/// recognise forced conversion). Everything is indexed `[time][price]`;
/// rows may differ in length across layers but each layer's three rows must
/// agree.
///
/// Most solvers reuse one price ladder for every layer; see
/// [`SolvedGrid::with_shared_prices`].
#[derive(Clone, Debug, PartialEq)]
pub struct SolvedGrid<T: Float> {
    times: Vec<T>,
    prices: Vec<Vec<T>>,
    values: Vec<Vec<T>>,
    indicator: Vec<Vec<T>>,
}

impl<T: Float> SolvedGrid<T> {
    /// Creates a validated grid from per-layer price rows.
    ///
    /// # Arguments
    ///
    /// * `times` - Ordered time axis, one entry per layer
    /// * `prices` - Price ladder per layer
    /// * `values` - Solved values, aligned with `prices`
    /// * `indicator` - Auxiliary indicator, aligned with `prices`
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] when `times` is empty, a matrix has a
    /// different layer count than `times`, or a row disagrees with its
    /// price row's length.
    pub fn new(
        times: Vec<T>,
        prices: Vec<Vec<T>>,
        values: Vec<Vec<T>>,
        indicator: Vec<Vec<T>>,
    ) -> Result<Self, GridError> {
        if times.is_empty() {
            return Err(GridError::Empty);
        }
        for (matrix, rows) in [("price", &prices), ("value", &values), ("indicator", &indicator)] {
            if rows.len() != times.len() {
                return Err(GridError::LayerCountMismatch {
                    matrix,
                    expected: times.len(),
                    actual: rows.len(),
                });
            }
        }
        for layer in 0..times.len() {
            let expected = prices[layer].len();
            for (matrix, rows) in [("value", &values), ("indicator", &indicator)] {
                if rows[layer].len() != expected {
                    return Err(GridError::RowMismatch {
                        matrix,
                        layer,
                        expected,
                        actual: rows[layer].len(),
                    });
                }
            }
        }
        Ok(Self {
            times,
            prices,
            values,
            indicator,
        })
    }

    /// Creates a grid whose every layer shares one price ladder.
    ///
    /// # Errors
    ///
    /// Same as [`SolvedGrid::new`].
    pub fn with_shared_prices(
        times: Vec<T>,
        prices: Vec<T>,
        values: Vec<Vec<T>>,
        indicator: Vec<Vec<T>>,
    ) -> Result<Self, GridError> {
        let layers = times.len();
        Self::new(times, vec![prices; layers], values, indicator)
    }

    /// Returns the time axis.
    #[inline]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Returns the number of time layers.
    #[inline]
    pub fn layers(&self) -> usize {
        self.times.len()
    }

    /// Returns the price ladder at time index `layer`.
    #[inline]
    pub fn prices_at(&self, layer: usize) -> &[T] {
        &self.prices[layer]
    }

    /// Returns the solved values at time index `layer`.
    #[inline]
    pub fn values_at(&self, layer: usize) -> &[T] {
        &self.values[layer]
    }

    /// Returns the indicator row at time index `layer`.
    #[inline]
    pub fn indicator_at(&self, layer: usize) -> &[T] {
        &self.indicator[layer]
    }
}
