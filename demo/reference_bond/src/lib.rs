//! The reference convertible bond used throughout the workspace examples:
//! a 5 year, nominal 100 bond paying a semi-annual coupon of 4, puttable at
//! 105 on the year-3 coupon date, callable at 110 from year 2 onwards, and
//! convertible into one share at any time. Put and call strikes are quoted
//! clean and accrue interest between coupons.
//!
//! The crate only assembles instruments from `cbond_models`; pricing is the
//! job of an external backward-induction solver driving the assembled
//! [`Stack`] through the payoff protocol.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

use std::sync::Arc;

use cbond_models::{
    AmericanCall, Annuity, CouponSchedule, DirtyStrike, HolderPut, IssuerCall, ScheduleError,
    Stack, TimeSet, Windowed,
};

/// A put leg with a dirty strike, restricted to its exercise dates.
pub type DirtyPut = Windowed<f64, HolderPut<f64, DirtyStrike<f64>>>;

/// A call leg with a dirty strike, restricted to its exercise spans.
pub type DirtyCall = Windowed<f64, IssuerCall<f64, DirtyStrike<f64>>>;

/// Contractual terms of a puttable, callable convertible bond.
///
/// [`ConvertibleTerms::default`] yields the reference bond.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertibleTerms {
    /// Maturity in years.
    pub maturity: f64,
    /// Coupon payment times.
    pub coupon_times: Vec<f64>,
    /// Coupon amount per payment.
    pub coupon: f64,
    /// Nominal redeemed at maturity.
    pub nominal: f64,
    /// Recovery fraction of the nominal on default.
    pub recovery: f64,
    /// Clean put strike.
    pub put_strike: f64,
    /// Dates on which the holder may put.
    pub put_dates: Vec<f64>,
    /// Clean call strike.
    pub call_strike: f64,
    /// Spans during which the issuer may call.
    pub call_spans: Vec<(f64, f64)>,
}

impl Default for ConvertibleTerms {
    fn default() -> Self {
        Self {
            maturity: 5.0,
            coupon_times: (1..=10).map(|i| i as f64 * 0.5).collect(),
            coupon: 4.0,
            nominal: 100.0,
            recovery: 0.0,
            put_strike: 105.0,
            put_dates: vec![3.0],
            call_strike: 110.0,
            call_spans: vec![(2.0, 5.0)],
        }
    }
}

/// The assembled convertible: individual legs plus the composed payoff.
///
/// The legs are kept alongside the [`Stack`] because the decision classifier
/// needs to query the put and call strikes and windows, and the bond leg's
/// coupon schedule, after the solver has produced its grid.
pub struct ConvertibleBond {
    bond: Annuity<f64>,
    put: DirtyPut,
    call: DirtyCall,
    conversion: AmericanCall<f64>,
    payoff: Stack<f64>,
}

impl std::fmt::Debug for ConvertibleBond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvertibleBond").finish_non_exhaustive()
    }
}

impl ConvertibleBond {
    /// Assembles a convertible bond from its terms.
    ///
    /// The final coupon is deferred into the terminal value, and put and
    /// call strikes share the bond's coupon schedule for accrual.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] when the coupon schedule is invalid or
    /// extends past the maturity.
    pub fn new(terms: ConvertibleTerms) -> Result<Self, ScheduleError> {
        let schedule = Arc::new(CouponSchedule::new(
            terms.coupon_times,
            terms.coupon,
            terms.nominal,
            terms.recovery,
        )?);
        let bond = Annuity::deferred(terms.maturity, Arc::clone(&schedule))?;
        let put = Windowed::new(
            HolderPut::new(
                terms.maturity,
                DirtyStrike::new(terms.put_strike, Arc::clone(&schedule)),
            ),
            TimeSet::dates(terms.put_dates),
        );
        let call = Windowed::new(
            IssuerCall::new(
                terms.maturity,
                DirtyStrike::new(terms.call_strike, Arc::clone(&schedule)),
            ),
            TimeSet::spans(terms.call_spans),
        );
        let conversion = AmericanCall::new(terms.maturity, 0.0);

        // Leg order fixes the transient fold: coupon first, then the put
        // floor, the call cap, and last the conversion floor the cap must
        // not cut through.
        let payoff = Stack::new(vec![
            Box::new(bond.clone()),
            Box::new(put.clone()),
            Box::new(call.clone()),
            Box::new(conversion),
        ]);

        Ok(Self {
            bond,
            put,
            call,
            conversion,
            payoff,
        })
    }

    /// Returns the coupon-bearing bond leg.
    #[inline]
    pub fn bond(&self) -> &Annuity<f64> {
        &self.bond
    }

    /// Returns the put leg.
    #[inline]
    pub fn put(&self) -> &DirtyPut {
        &self.put
    }

    /// Returns the call leg.
    #[inline]
    pub fn call(&self) -> &DirtyCall {
        &self.call
    }

    /// Returns the conversion leg.
    #[inline]
    pub fn conversion(&self) -> &AmericanCall<f64> {
        &self.conversion
    }

    /// Returns the composed payoff handed to the solver.
    #[inline]
    pub fn payoff(&self) -> &Stack<f64> {
        &self.payoff
    }
}
