//! Payoffcurve computes and annotates the expiration payoff profile of a
//! multi-leg options portfolio: a discretized value curve over underlying
//! price plus a classification of the curve's structurally significant points
//! (break-evens, local extrema, open endpoints) relative to a cost basis.
//!
//! Only intrinsic value at expiration is modeled; there is no time value,
//! volatility, or Greeks. Parsing leg notations, persistence, and chart
//! rendering are collaborators that call into this crate with validated
//! numeric legs and consume its two outputs.
//!
//! References: Hull, *Options, Futures, and Other Derivatives* (11th ed.),
//! Ch. 10-12 for payoff profiles and long/short conventions.
//!
//! Numerical considerations:
//! - The price grid is generated by index (`min + i * step`), never by
//!   accumulation, and a small epsilon guards the point count against
//!   floating-point shortfall when the step divides the range exactly.
//! - Curve output is rounded to two decimals; leg summation order is the
//!   input order, so rounding is reproducible.
//! - Break-even prices are linearly interpolated between grid points, which
//!   is exact on an expiration payoff except where a strike lands between
//!   grid nodes.
//!
//! Both entry points are pure, synchronous functions with no shared state;
//! they are safe to call concurrently and complete in time proportional to
//! `grid points x legs` (evaluator) or `grid points` (analyzer).
//!
//! # Feature Flags
//! - `parallel`: enables the Rayon-powered [`pricing::payoff::evaluate_parallel`]
//!   for wide, fine-stepped grids.
//!
//! # Quick Start
//! Evaluate a four-leg strategy:
//! ```rust
//! use payoffcurve::core::{OptionLeg, PriceSweep};
//! use payoffcurve::pricing::payoff::evaluate;
//!
//! let legs = [
//!     OptionLeg::call(720.0, 1),
//!     OptionLeg::call(740.0, 1),
//!     OptionLeg::put(860.0, -1),
//!     OptionLeg::put(820.0, -1),
//! ];
//! let sweep = PriceSweep::new(700.0, 900.0, 50.0);
//! let curve = evaluate(&legs, &sweep).unwrap();
//! assert_eq!(curve.len(), 5);
//! assert_eq!(curve[4].total_intrinsic_value, 34_000.0);
//! ```
//!
//! Classify key points against a cost basis:
//! ```rust
//! use payoffcurve::analysis::{find_key_points, KeyPointKind};
//! use payoffcurve::core::{OptionLeg, PriceSweep};
//! use payoffcurve::pricing::payoff::evaluate;
//!
//! let legs = [OptionLeg::call(100.0, 1), OptionLeg::put(100.0, 1)];
//! let curve = evaluate(&legs, &PriceSweep::new(80.0, 120.0, 10.0)).unwrap();
//! let points = find_key_points(&curve, 800.0);
//! assert!(points
//!     .iter()
//!     .any(|p| p.kind == KeyPointKind::LowPoint && p.closing_price == 100.0));
//! ```
//!
//! Summarize for a reporting layer:
//! ```rust
//! use payoffcurve::analysis::{find_key_points, ProfileSummary};
//! use payoffcurve::core::{OptionLeg, PriceSweep};
//! use payoffcurve::pricing::payoff::evaluate;
//!
//! let legs = [OptionLeg::call(100.0, 1), OptionLeg::put(100.0, 1)];
//! let curve = evaluate(&legs, &PriceSweep::new(80.0, 120.0, 10.0)).unwrap();
//! let points = find_key_points(&curve, 800.0);
//! let summary = ProfileSummary::from_curve(&curve, 800.0, &points).unwrap();
//! assert_eq!(summary.break_evens, vec![92.0, 108.0]);
//! assert_eq!(summary.max_loss, -800.0);
//! ```

pub mod analysis;
pub mod core;
pub mod pricing;

/// Common imports for ergonomic usage.
#[allow(ambiguous_glob_reexports)]
pub mod prelude {
    pub use crate::analysis::*;
    pub use crate::core::*;
    pub use crate::pricing::*;
}
