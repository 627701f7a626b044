//! Decision labels and the classified output surface.

use num_traits::Float;

/// The economic decision recognised at one grid point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// The holder exercised the put at its strike.
    Put,
    /// The issuer called the instrument at its strike.
    Call,
    /// The holder converted into the underlying by choice.
    Conversion,
    /// Conversion triggered by the issuer's call rather than chosen.
    ForcedConversion,
    /// Nominal redemption at maturity.
    Redemption,
    /// No right was exercised; the continuation value was retained.
    Hold,
}

/// The price range at put-eligible dates where holding remained optimal.
///
/// Bounds are the minimum and maximum prices labelled [`Decision::Hold`]
/// across every layer inside the put's window.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuationBand<T: Float> {
    lower: T,
    upper: T,
}

impl<T: Float> ContinuationBand<T> {
    pub(crate) fn observe(band: Option<Self>, price: T) -> Self {
        match band {
            None => Self {
                lower: price,
                upper: price,
            },
            Some(band) => Self {
                lower: band.lower.min(price),
                upper: band.upper.max(price),
            },
        }
    }

    /// Returns the lowest hold price observed.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the highest hold price observed.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }
}

/// The classifier's output: one label per grid point plus the band.
///
/// Labels are indexed `[time][price]`, aligned with the solved grid the
/// surface was produced from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecisionSurface<T: Float> {
    labels: Vec<Vec<Decision>>,
    band: Option<ContinuationBand<T>>,
}

impl<T: Float> DecisionSurface<T> {
    pub(crate) fn new(labels: Vec<Vec<Decision>>, band: Option<ContinuationBand<T>>) -> Self {
        Self { labels, band }
    }

    /// Returns the label at time index `layer` and price index `position`.
    #[inline]
    pub fn label(&self, layer: usize, position: usize) -> Decision {
        self.labels[layer][position]
    }

    /// Returns the label rows, indexed `[time][price]`.
    #[inline]
    pub fn labels(&self) -> &[Vec<Decision>] {
        &self.labels
    }

    /// Returns the continuation band, when any put-eligible point held.
    #[inline]
    pub fn band(&self) -> Option<ContinuationBand<T>> {
        self.band
    }
}
