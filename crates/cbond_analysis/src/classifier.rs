//! Reconstruction of optimal decisions from a solved grid.

use crate::decision::{ContinuationBand, Decision, DecisionSurface};
use crate::grid::SolvedGrid;
use cbond_core::traits::{CouponBearing, ExerciseWindow, StrikeProvider};
use num_traits::Float;

/// Labels every grid point with the decision that produced its value.
///
/// The solver's backward induction takes maxima and minima without recording
/// which branch won; this pass recovers the winners by comparing each solved
/// value against the exercise values the put, call, and bond legs report for
/// that time. Comparisons are bit-exact: the solved value was produced from
/// the very same strike and coupon quantities, so a winning branch leaves
/// the value equal to its exercise value.
///
/// Per layer at time `t`, with `Kp = put.strike(t)` and `Kc = call.strike(t)`:
/// 1. At non-terminal coupon dates the scheduled coupon is stripped from
///    the solved value first; the solver's value includes it, the exercise
///    values do not.
/// 2. Labels resolve in priority order: `Put` when the put window is active
///    and `V == Kp`; `Call` when the call window is active and `V == Kc`;
///    `Redemption` at the redemption time; `Conversion` when `V == S`,
///    upgraded to `ForcedConversion` when the call window is active and the
///    indicator exceeds `S` (continuation was worth more, so the issuer's
///    call forced the conversion); `Hold` otherwise.
/// 3. Prices labelled `Hold` inside the put window accumulate into the
///    continuation band.
///
/// `Put` and `Call` never resolve at the redemption time itself; maturity
/// settlement is `Redemption` even where the solved value coincides with
/// the conversion value.
pub fn classify<T, P, C, B>(grid: &SolvedGrid<T>, put: &P, call: &C, bond: &B) -> DecisionSurface<T>
where
    T: Float,
    P: StrikeProvider<T> + ExerciseWindow<T>,
    C: StrikeProvider<T> + ExerciseWindow<T>,
    B: CouponBearing<T>,
{
    let redemption_time = bond.redemption_time();
    let mut labels = Vec::with_capacity(grid.layers());
    let mut band: Option<ContinuationBand<T>> = None;

    for (layer, &t) in grid.times().iter().enumerate() {
        let kp = put.strike(t);
        let kc = call.strike(t);
        let at_redemption = t == redemption_time;
        let coupon = if bond.is_coupon_time(t) && !at_redemption {
            bond.coupon(t)
        } else {
            T::zero()
        };
        let put_active = put.is_active(t) && !at_redemption;
        let call_active = call.is_active(t) && !at_redemption;

        let prices = grid.prices_at(layer);
        let values = grid.values_at(layer);
        let indicator = grid.indicator_at(layer);

        let mut row = Vec::with_capacity(prices.len());
        for position in 0..prices.len() {
            let s = prices[position];
            let v = values[position] - coupon;

            let label = if put_active && v == kp {
                Decision::Put
            } else if call_active && v == kc {
                Decision::Call
            } else if at_redemption {
                Decision::Redemption
            } else if v == s {
                if call_active && indicator[position] > s {
                    Decision::ForcedConversion
                } else {
                    Decision::Conversion
                }
            } else {
                Decision::Hold
            };

            if put.is_active(t) && label == Decision::Hold {
                band = Some(ContinuationBand::observe(band, s));
            }
            row.push(label);
        }
        labels.push(row);
    }

    DecisionSurface::new(labels, band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbond_core::traits::FixedStrike;
    use cbond_models::{Annuity, CouponSchedule, HolderPut, IssuerCall, TimeSet, Windowed};
    use std::sync::Arc;

    fn bond() -> Annuity<f64> {
        let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
        let schedule = Arc::new(CouponSchedule::new(times, 4.0, 100.0, 0.0).unwrap());
        Annuity::deferred(5.0, schedule).unwrap()
    }

    fn put() -> Windowed<f64, HolderPut<f64, FixedStrike<f64>>> {
        Windowed::new(
            HolderPut::new(5.0, FixedStrike::new(105.0)),
            TimeSet::dates(vec![3.0]),
        )
    }

    fn call() -> Windowed<f64, IssuerCall<f64, FixedStrike<f64>>> {
        Windowed::new(
            IssuerCall::new(5.0, FixedStrike::new(110.0)),
            TimeSet::spans(vec![(2.0, 5.0)]),
        )
    }

    fn two_layer_grid() -> SolvedGrid<f64> {
        // Put date at t = 3 (also a coupon date), redemption at t = 5.
        // Values at t = 3 include the coupon of 4; stripped they read
        // [109, 105, 111, 120] against prices [90, 100, 111, 120].
        SolvedGrid::with_shared_prices(
            vec![3.0, 5.0],
            vec![90.0, 100.0, 111.0, 120.0],
            vec![
                vec![113.0, 109.0, 115.0, 124.0],
                vec![90.0, 100.0, 111.0, 120.0],
            ],
            vec![vec![0.0, 0.0, 100.0, 130.0], vec![0.0, 0.0, 0.0, 0.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_put_layer_labels() {
        let surface = classify(&two_layer_grid(), &put(), &call(), &bond());
        assert_eq!(surface.label(0, 0), Decision::Hold);
        assert_eq!(surface.label(0, 1), Decision::Put);
        assert_eq!(surface.label(0, 2), Decision::Conversion);
        assert_eq!(surface.label(0, 3), Decision::ForcedConversion);
    }

    #[test]
    fn test_redemption_overrides_conversion_match_at_maturity() {
        // The terminal layer has V == S everywhere.
        let surface = classify(&two_layer_grid(), &put(), &call(), &bond());
        for position in 0..4 {
            assert_eq!(surface.label(1, position), Decision::Redemption);
        }
    }

    #[test]
    fn test_band_covers_hold_prices_at_put_dates() {
        let surface = classify(&two_layer_grid(), &put(), &call(), &bond());
        let band = surface.band().unwrap();
        assert_eq!(band.lower(), 90.0);
        assert_eq!(band.upper(), 90.0);
    }

    #[test]
    fn test_no_band_when_nothing_held_at_put_dates() {
        let grid = SolvedGrid::with_shared_prices(
            vec![5.0],
            vec![90.0, 110.0],
            vec![vec![90.0, 110.0]],
            vec![vec![0.0, 0.0]],
        )
        .unwrap();
        let surface = classify(&grid, &put(), &call(), &bond());
        assert!(surface.band().is_none());
    }

    #[test]
    fn test_call_label_when_value_matches_call_strike() {
        // t = 4.25 is inside the call span, off the coupon schedule and
        // away from the put date. A solved value equal to the call strike
        // marks an issuer call.
        let grid = SolvedGrid::with_shared_prices(
            vec![4.25],
            vec![95.0, 105.0],
            vec![vec![108.0, 110.0]],
            vec![vec![0.0, 0.0]],
        )
        .unwrap();
        let surface = classify(&grid, &put(), &call(), &bond());
        assert_eq!(surface.label(0, 0), Decision::Hold);
        assert_eq!(surface.label(0, 1), Decision::Call);
    }

    #[test]
    fn test_conversion_outside_call_window_is_never_forced() {
        // t = 1.75 precedes the call span; the indicator would flag a
        // forced conversion if the window were open.
        let grid = SolvedGrid::with_shared_prices(
            vec![1.75],
            vec![120.0],
            vec![vec![120.0]],
            vec![vec![150.0]],
        )
        .unwrap();
        let surface = classify(&grid, &put(), &call(), &bond());
        assert_eq!(surface.label(0, 0), Decision::Conversion);
    }
}
