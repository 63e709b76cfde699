//! Domain types shared by the evaluator and the analyzer: option side,
//! strategy legs, the price grid specification, and curve points.

use crate::core::ProfileError;

/// Shares per contract when a leg does not specify its own multiplier.
pub const DEFAULT_CONTRACT_MULTIPLIER: f64 = 100.0;

/// Absolute slack applied to the grid-count ratio so a step that divides the
/// range exactly in real arithmetic is not lost to floating-point shortfall.
const GRID_EPS: f64 = 1e-9;

#[inline]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }

    /// Per-share intrinsic value at expiration: `max(0, S - K)` for calls,
    /// `max(0, K - S)` for puts.
    ///
    /// # Examples
    /// ```
    /// use payoffcurve::core::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        (self.sign() * (spot - strike)).max(0.0)
    }
}

/// One option position within a multi-leg strategy.
///
/// `quantity` is signed: positive for long, negative for short; its magnitude
/// is the number of contracts. `contract_multiplier` converts per-share
/// intrinsic value into position value (100 shares per contract for standard
/// US equity options).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptionLeg {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level.
    pub strike: f64,
    /// Signed contract count (+long, -short). Never zero.
    pub quantity: i32,
    /// Shares per contract.
    pub contract_multiplier: f64,
}

impl OptionLeg {
    /// Builds a call leg with the default contract multiplier.
    ///
    /// # Examples
    /// ```
    /// use payoffcurve::core::{OptionLeg, OptionType};
    ///
    /// let leg = OptionLeg::call(620.0, 1);
    /// assert_eq!(leg.option_type, OptionType::Call);
    /// assert_eq!(leg.contract_multiplier, 100.0);
    /// ```
    pub fn call(strike: f64, quantity: i32) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            quantity,
            contract_multiplier: DEFAULT_CONTRACT_MULTIPLIER,
        }
    }

    /// Builds a put leg with the default contract multiplier.
    pub fn put(strike: f64, quantity: i32) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            quantity,
            contract_multiplier: DEFAULT_CONTRACT_MULTIPLIER,
        }
    }

    /// Replaces the contract multiplier (e.g. for mini or deliverable-adjusted
    /// contracts).
    pub fn with_multiplier(mut self, contract_multiplier: f64) -> Self {
        self.contract_multiplier = contract_multiplier;
        self
    }

    /// Validates leg fields.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidInput`] when:
    /// - `strike` is not a positive finite number
    /// - `quantity == 0` (a zero-quantity leg carries no economic meaning)
    /// - `contract_multiplier` is not a positive finite number
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(self.strike > 0.0) || !self.strike.is_finite() {
            return Err(ProfileError::InvalidInput(
                "leg strike must be positive and finite".to_string(),
            ));
        }
        if self.quantity == 0 {
            return Err(ProfileError::InvalidInput(
                "leg quantity must be non-zero".to_string(),
            ));
        }
        if !(self.contract_multiplier > 0.0) || !self.contract_multiplier.is_finite() {
            return Err(ProfileError::InvalidInput(
                "contract multiplier must be positive and finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Signed contribution of this leg to portfolio value when the underlying
    /// settles at `price`. A short leg's contribution is negative when the leg
    /// is in the money.
    #[inline]
    pub fn value_at(&self, price: f64) -> f64 {
        self.option_type.intrinsic(price, self.strike)
            * self.contract_multiplier
            * f64::from(self.quantity)
    }
}

/// Merges legs that share `(option_type, strike, contract_multiplier)` by
/// summing quantities, preserving first-seen order. Keys that net to zero
/// quantity are dropped entirely.
///
/// The evaluator tolerates duplicate keys without this helper; combining is
/// only needed by callers that want one row per contract for display.
pub fn combine_legs(legs: &[OptionLeg]) -> Vec<OptionLeg> {
    let mut combined: Vec<OptionLeg> = Vec::with_capacity(legs.len());
    for leg in legs {
        let key = combined.iter().position(|c| {
            c.option_type == leg.option_type
                && c.strike == leg.strike
                && c.contract_multiplier == leg.contract_multiplier
        });
        match key {
            Some(idx) => combined[idx].quantity += leg.quantity,
            None => combined.push(*leg),
        }
    }
    combined.retain(|leg| leg.quantity != 0);
    combined
}

/// Inclusive evaluation grid over underlying price.
///
/// The swept prices are `min_price, min_price + price_step, …` up to and
/// including the last value `<= max_price`; `max_price` itself is only swept
/// when the step divides the range evenly.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PriceSweep {
    /// First swept price.
    pub min_price: f64,
    /// Upper bound of the sweep (not necessarily swept itself).
    pub max_price: f64,
    /// Grid spacing.
    pub price_step: f64,
}

impl PriceSweep {
    pub fn new(min_price: f64, max_price: f64, price_step: f64) -> Self {
        Self {
            min_price,
            max_price,
            price_step,
        }
    }

    /// Derives a sweep that spans every strike in `legs` with `margin` of
    /// room on each side, floored at zero on the downside.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidInput`] when `legs` is empty, any leg
    /// is invalid, or the derived bounds fail [`PriceSweep::validate`] (e.g.
    /// a zero margin around a single strike).
    pub fn spanning_strikes(
        legs: &[OptionLeg],
        margin: f64,
        price_step: f64,
    ) -> Result<Self, ProfileError> {
        if legs.is_empty() {
            return Err(ProfileError::InvalidInput(
                "leg list cannot be empty".to_string(),
            ));
        }
        if !(margin >= 0.0) || !margin.is_finite() {
            return Err(ProfileError::InvalidInput(
                "margin must be non-negative and finite".to_string(),
            ));
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for leg in legs {
            leg.validate()?;
            lo = lo.min(leg.strike);
            hi = hi.max(leg.strike);
        }
        let sweep = Self::new((lo - margin).max(0.0), hi + margin, price_step);
        sweep.validate()?;
        Ok(sweep)
    }

    /// Validates the grid specification.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidInput`] when bounds are non-finite,
    /// `min_price >= max_price`, or `price_step` is not a positive finite
    /// number.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.min_price.is_finite() || !self.max_price.is_finite() {
            return Err(ProfileError::InvalidInput(
                "sweep prices must be finite".to_string(),
            ));
        }
        if self.min_price >= self.max_price {
            return Err(ProfileError::InvalidInput(
                "sweep requires min_price < max_price".to_string(),
            ));
        }
        if !(self.price_step > 0.0) || !self.price_step.is_finite() {
            return Err(ProfileError::InvalidInput(
                "price step must be positive and finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of swept prices: `floor((max - min) / step) + 1`.
    ///
    /// Assumes a sweep that passes [`PriceSweep::validate`].
    pub fn point_count(&self) -> usize {
        let ratio = (self.max_price - self.min_price) / self.price_step;
        (ratio + GRID_EPS).floor() as usize + 1
    }

    /// Iterator over the swept prices in ascending order.
    pub fn prices(&self) -> impl Iterator<Item = f64> {
        let min = self.min_price;
        let step = self.price_step;
        (0..self.point_count()).map(move |i| min + i as f64 * step)
    }
}

/// One point of the discretized value curve. Both fields are rounded to two
/// decimals by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValuePoint {
    /// Underlying settlement price.
    pub closing_price: f64,
    /// Total portfolio intrinsic value at that price.
    pub total_intrinsic_value: f64,
}
