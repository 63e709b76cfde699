//! Module `pricing::payoff`.
//!
//! Expiration payoff evaluation for multi-leg option strategies: sweeps a
//! price grid and accumulates per-leg intrinsic value into a portfolio value
//! curve.
//!
//! References: Hull (11th ed.) for payoff identities and long/short sign
//! conventions.
//!
//! Primary API surface: free functions [`evaluate`] and [`evaluate_per_leg`]
//! (plus [`evaluate_parallel`] behind the `parallel` feature).
//!
//! Numerical considerations: summation runs in input leg order so output
//! rounding is reproducible; grid generation is index-based
//! (`min + i * step`) rather than accumulative, keeping long fine-stepped
//! sweeps free of drift.

use crate::core::types::round2;
use crate::core::{OptionLeg, PriceSweep, ProfileError, ValuePoint};

fn validate_inputs(legs: &[OptionLeg], sweep: &PriceSweep) -> Result<(), ProfileError> {
    if legs.is_empty() {
        return Err(ProfileError::InvalidInput(
            "leg list cannot be empty".to_string(),
        ));
    }
    for leg in legs {
        leg.validate()?;
    }
    sweep.validate()
}

fn value_point_at(legs: &[OptionLeg], price: f64) -> ValuePoint {
    let total: f64 = legs.iter().map(|leg| leg.value_at(price)).sum();
    ValuePoint {
        closing_price: round2(price),
        total_intrinsic_value: round2(total),
    }
}

/// Portfolio intrinsic value at expiration for every price of the sweep.
///
/// Returns one [`ValuePoint`] per swept price in strictly increasing price
/// order, values rounded to two decimals. Legs are summed in input order;
/// duplicate `(type, strike)` legs combine additively and never error. Pure
/// function of its inputs.
///
/// # Errors
/// Returns [`ProfileError::InvalidInput`] when `legs` is empty, any leg
/// violates its invariants, or the sweep is degenerate. No partial curve is
/// returned.
///
/// # Examples
/// ```
/// use payoffcurve::core::{OptionLeg, PriceSweep};
/// use payoffcurve::pricing::payoff::evaluate;
///
/// let legs = [OptionLeg::call(100.0, 1)];
/// let sweep = PriceSweep::new(90.0, 110.0, 10.0);
/// let curve = evaluate(&legs, &sweep).unwrap();
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve[2].closing_price, 110.0);
/// assert_eq!(curve[2].total_intrinsic_value, 1000.0);
/// ```
pub fn evaluate(legs: &[OptionLeg], sweep: &PriceSweep) -> Result<Vec<ValuePoint>, ProfileError> {
    validate_inputs(legs, sweep)?;
    Ok(sweep.prices().map(|p| value_point_at(legs, p)).collect())
}

/// Like [`evaluate`], but returns one curve per leg in input order.
///
/// Renderers use this to draw individual leg lines alongside the combined
/// strategy. Summing the per-leg curves point-wise reproduces [`evaluate`]
/// up to output rounding.
///
/// # Errors
/// Same preconditions as [`evaluate`].
pub fn evaluate_per_leg(
    legs: &[OptionLeg],
    sweep: &PriceSweep,
) -> Result<Vec<Vec<ValuePoint>>, ProfileError> {
    validate_inputs(legs, sweep)?;
    Ok(legs
        .iter()
        .map(|leg| {
            sweep
                .prices()
                .map(|p| ValuePoint {
                    closing_price: round2(p),
                    total_intrinsic_value: round2(leg.value_at(p)),
                })
                .collect()
        })
        .collect())
}

/// Parallel variant of [`evaluate`] for wide, fine-stepped grids.
///
/// Swept points are independent, so the output is identical to the serial
/// evaluator: per-point leg order is unchanged and points are collected in
/// grid order.
///
/// # Errors
/// Same preconditions as [`evaluate`].
#[cfg(feature = "parallel")]
pub fn evaluate_parallel(
    legs: &[OptionLeg],
    sweep: &PriceSweep,
) -> Result<Vec<ValuePoint>, ProfileError> {
    use rayon::prelude::*;

    validate_inputs(legs, sweep)?;
    let prices: Vec<f64> = sweep.prices().collect();
    Ok(prices
        .par_iter()
        .map(|&p| value_point_at(legs, p))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionLeg;

    #[test]
    fn long_call_curve() {
        let legs = [OptionLeg::call(100.0, 1)];
        let sweep = PriceSweep::new(90.0, 120.0, 10.0);
        let curve = evaluate(&legs, &sweep).unwrap();
        let values: Vec<f64> = curve.iter().map(|p| p.total_intrinsic_value).collect();
        assert_eq!(values, vec![0.0, 0.0, 1000.0, 2000.0]);
    }

    #[test]
    fn long_put_curve() {
        let legs = [OptionLeg::put(100.0, 1)];
        let sweep = PriceSweep::new(80.0, 110.0, 10.0);
        let curve = evaluate(&legs, &sweep).unwrap();
        let values: Vec<f64> = curve.iter().map(|p| p.total_intrinsic_value).collect();
        assert_eq!(values, vec![2000.0, 1000.0, 0.0, 0.0]);
    }

    #[test]
    fn bull_call_spread_caps_value() {
        // Buy the 100 call, sell the 110 call.
        let legs = [OptionLeg::call(100.0, 1), OptionLeg::call(110.0, -1)];
        let sweep = PriceSweep::new(90.0, 130.0, 10.0);
        let curve = evaluate(&legs, &sweep).unwrap();
        let values: Vec<f64> = curve.iter().map(|p| p.total_intrinsic_value).collect();
        assert_eq!(values, vec![0.0, 0.0, 1000.0, 1000.0, 1000.0]);
    }

    #[test]
    fn short_legs_flip_sign() {
        let long = evaluate(
            &[OptionLeg::call(100.0, 2)],
            &PriceSweep::new(90.0, 120.0, 10.0),
        )
        .unwrap();
        let short = evaluate(
            &[OptionLeg::call(100.0, -2)],
            &PriceSweep::new(90.0, 120.0, 10.0),
        )
        .unwrap();
        for (l, s) in long.iter().zip(&short) {
            assert_eq!(l.total_intrinsic_value, -s.total_intrinsic_value);
        }
    }

    #[test]
    fn duplicate_legs_sum_additively() {
        let sweep = PriceSweep::new(80.0, 130.0, 5.0);
        let doubled = evaluate(&[OptionLeg::call(100.0, 2)], &sweep).unwrap();
        let split = evaluate(
            &[OptionLeg::call(100.0, 1), OptionLeg::call(100.0, 1)],
            &sweep,
        )
        .unwrap();
        assert_eq!(doubled, split);
    }

    #[test]
    fn per_leg_curves_sum_to_total() {
        let legs = [
            OptionLeg::call(720.0, 1),
            OptionLeg::call(740.0, 1),
            OptionLeg::put(860.0, -1),
            OptionLeg::put(820.0, -1),
        ];
        let sweep = PriceSweep::new(700.0, 900.0, 50.0);
        let total = evaluate(&legs, &sweep).unwrap();
        let per_leg = evaluate_per_leg(&legs, &sweep).unwrap();
        assert_eq!(per_leg.len(), legs.len());
        for (i, point) in total.iter().enumerate() {
            let sum: f64 = per_leg.iter().map(|c| c[i].total_intrinsic_value).sum();
            assert_eq!(sum, point.total_intrinsic_value);
        }
    }

    #[test]
    fn rejects_empty_leg_list() {
        let sweep = PriceSweep::new(90.0, 110.0, 10.0);
        assert!(matches!(
            evaluate(&[], &sweep),
            Err(ProfileError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_zero_quantity_leg() {
        let sweep = PriceSweep::new(90.0, 110.0, 10.0);
        let legs = [OptionLeg::call(100.0, 1), OptionLeg::call(105.0, 0)];
        assert!(evaluate(&legs, &sweep).is_err());
    }

    #[test]
    fn rejects_inverted_sweep_and_bad_step() {
        let legs = [OptionLeg::call(100.0, 1)];
        assert!(evaluate(&legs, &PriceSweep::new(110.0, 90.0, 10.0)).is_err());
        assert!(evaluate(&legs, &PriceSweep::new(90.0, 90.0, 10.0)).is_err());
        assert!(evaluate(&legs, &PriceSweep::new(90.0, 110.0, 0.0)).is_err());
        assert!(evaluate(&legs, &PriceSweep::new(90.0, 110.0, -1.0)).is_err());
    }

    #[test]
    fn fractional_inputs_round_to_cents() {
        let legs = [OptionLeg::call(100.0, 1).with_multiplier(1.0)];
        let sweep = PriceSweep::new(100.0, 100.334, 0.111);
        let curve = evaluate(&legs, &sweep).unwrap();
        assert_eq!(curve.len(), 4);
        assert_eq!(curve[1].closing_price, 100.11);
        assert_eq!(curve[1].total_intrinsic_value, 0.11);
        assert_eq!(curve[3].closing_price, 100.33);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        let legs = [
            OptionLeg::call(95.0, 2),
            OptionLeg::put(105.0, -1),
            OptionLeg::put(90.0, 3),
        ];
        let sweep = PriceSweep::new(50.0, 150.0, 0.25);
        assert_eq!(
            evaluate(&legs, &sweep).unwrap(),
            evaluate_parallel(&legs, &sweep).unwrap()
        );
    }
}
