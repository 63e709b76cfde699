//! Canonical profile payload for persistence and rendering layers.
//!
//! [`ProfileReport`] is the stable serde shape handed to chart renderers and
//! saved by persistence callers: the legs as evaluated, the cost basis, and
//! the two computed outputs (value curve, key points).
//!
//! # Examples
//! ```rust
//! use payoffcurve::core::serialization::{from_json, to_json_pretty, ProfileReport};
//! use payoffcurve::core::{OptionLeg, PriceSweep};
//!
//! let legs = [OptionLeg::call(100.0, 1), OptionLeg::call(110.0, -1)];
//! let sweep = PriceSweep::new(90.0, 130.0, 10.0);
//! let report = ProfileReport::build(&legs, &sweep, 300.0).unwrap();
//!
//! let json = to_json_pretty(&report).expect("json serialization");
//! let decoded: ProfileReport = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, report);
//! ```

use serde::de::DeserializeOwned;

use crate::analysis::key_points::{find_key_points, KeyPoint};
use crate::core::{OptionLeg, PriceSweep, ProfileError, ValuePoint};
use crate::pricing::payoff::evaluate;

/// Evaluated payoff profile of one strategy, ready for transport.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProfileReport {
    /// Legs as passed to the evaluator.
    pub legs: Vec<OptionLeg>,
    /// Net premium paid (positive) or received (negative).
    pub cost_basis: f64,
    /// Discretized value curve.
    pub curve: Vec<ValuePoint>,
    /// Classified key points of the curve against the cost basis.
    pub key_points: Vec<KeyPoint>,
}

impl ProfileReport {
    /// Runs the evaluator and the analyzer in one step.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidInput`] under the same preconditions as
    /// [`evaluate`].
    pub fn build(
        legs: &[OptionLeg],
        sweep: &PriceSweep,
        cost_basis: f64,
    ) -> Result<Self, ProfileError> {
        let curve = evaluate(legs, sweep)?;
        let key_points = find_key_points(&curve, cost_basis);
        Ok(Self {
            legs: legs.to_vec(),
            cost_basis,
            curve,
            key_points,
        })
    }
}

/// Serializes any library payload as pretty-printed JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a library payload from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(json)
}
