//! Module `analysis::key_points`.
//!
//! Classifies the structurally significant points of a discretized payoff
//! curve relative to a cost basis: break-even crossings, local extrema, and
//! open curve endpoints.
//!
//! The walk is a small trend state machine over consecutive segments. Trend
//! direction is taken from raw value deltas (the cost basis is a constant
//! offset, so profit/loss trends identically), while break-even detection
//! works on profit/loss signs with linear interpolation between grid points.
//! Interpolation is exact for an expiration payoff, which is piecewise linear
//! except where a strike lands between grid nodes.

use crate::core::types::round2;
use crate::core::ValuePoint;

/// Classification of a key point on the payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum KeyPointKind {
    /// Local minimum of profit/loss (trough, or a flat valley floor).
    LowPoint,
    /// Local maximum of profit/loss (peak, or a flat plateau top).
    HighPoint,
    /// Break-even: profit/loss changes sign or touches zero.
    ZeroCrossing,
    /// Curve still changing at the sweep boundary; the range may be clipping
    /// a real extremum.
    CurveEndpoint,
}

impl KeyPointKind {
    /// Human-readable label for the kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::LowPoint => "Low point",
            Self::HighPoint => "High point",
            Self::ZeroCrossing => "Break-even",
            Self::CurveEndpoint => "Curve endpoint",
        }
    }
}

impl std::fmt::Display for KeyPointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified point on the payoff curve.
///
/// Extrema and endpoints coincide with grid points; break-even crossings are
/// linearly interpolated and may fall between grid nodes.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyPoint {
    /// Point classification.
    pub kind: KeyPointKind,
    /// Underlying price of the point.
    pub closing_price: f64,
    /// Portfolio intrinsic value at the point.
    pub total_intrinsic_value: f64,
}

impl KeyPoint {
    fn at(kind: KeyPointKind, point: ValuePoint) -> Self {
        Self {
            kind,
            closing_price: point.closing_price,
            total_intrinsic_value: point.total_intrinsic_value,
        }
    }

    /// Human-readable label for the point's kind.
    pub fn description(&self) -> &'static str {
        self.kind.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    Up,
    Down,
    Flat,
}

fn trend_between(prev: f64, next: f64) -> Trend {
    if next > prev {
        Trend::Up
    } else if next < prev {
        Trend::Down
    } else {
        Trend::Flat
    }
}

/// Break-even on the segment, if any: profit/loss signs strictly oppose, or
/// either endpoint sits exactly at zero. Equal values carry no crossing and
/// guard the interpolation denominator.
fn crossing_between(prev: ValuePoint, next: ValuePoint, cost: f64) -> Option<KeyPoint> {
    let a = prev.total_intrinsic_value - cost;
    let b = next.total_intrinsic_value - cost;
    if a == b {
        return None;
    }
    let crosses = (a < 0.0) != (b < 0.0) || a == 0.0 || b == 0.0;
    if !crosses {
        return None;
    }
    let price =
        prev.closing_price + (next.closing_price - prev.closing_price) * a.abs() / (b - a).abs();
    Some(KeyPoint {
        kind: KeyPointKind::ZeroCrossing,
        closing_price: round2(price),
        total_intrinsic_value: cost,
    })
}

/// Detects and classifies the key points of a value curve against `cost`.
///
/// Walks every consecutive segment of the curve tracking the running trend:
/// a turn to rising emits a [`KeyPointKind::LowPoint`], a turn to falling a
/// [`KeyPointKind::HighPoint`], in both cases at the point where the previous
/// trend ended. A flat run is treated as a single extremum anchored to the
/// last point before the run began, emitted when the run exits. Break-even
/// crossings are checked per segment independently of the trend logic, and a
/// [`KeyPointKind::CurveEndpoint`] marks each boundary whose neighboring
/// value still differs (the sweep is clipping a live slope).
///
/// Curves shorter than three points have no interior structure and return an
/// empty vector; this is a valid terminal case, not an error. The result is
/// sorted by ascending price (stable for ties), and a point may legitimately
/// appear once per rule that selected it; there is no cross-kind
/// deduplication.
///
/// # Examples
/// ```
/// use payoffcurve::analysis::key_points::{find_key_points, KeyPointKind};
/// use payoffcurve::core::{OptionLeg, PriceSweep};
/// use payoffcurve::pricing::payoff::evaluate;
///
/// // Long 100 call for a 500 debit: breaks even at 105.
/// let curve = evaluate(
///     &[OptionLeg::call(100.0, 1)],
///     &PriceSweep::new(90.0, 110.0, 10.0),
/// )
/// .unwrap();
/// let points = find_key_points(&curve, 500.0);
/// let be = points
///     .iter()
///     .find(|p| p.kind == KeyPointKind::ZeroCrossing)
///     .unwrap();
/// assert_eq!(be.closing_price, 105.0);
/// assert_eq!(be.total_intrinsic_value, 500.0);
/// ```
pub fn find_key_points(curve: &[ValuePoint], cost: f64) -> Vec<KeyPoint> {
    if curve.len() < 3 {
        return Vec::new();
    }

    let mut points = Vec::new();
    let mut current: Option<Trend> = None;
    let mut last_non_flat: Option<ValuePoint> = None;

    for i in 1..curve.len() {
        let prev = curve[i - 1];
        let next = curve[i];
        let trend = trend_between(prev.total_intrinsic_value, next.total_intrinsic_value);

        if current != Some(trend) {
            if let Some(active) = current {
                let anchor = match (active, last_non_flat) {
                    (Trend::Flat, Some(point)) => point,
                    _ => prev,
                };
                match trend {
                    Trend::Up => points.push(KeyPoint::at(KeyPointKind::LowPoint, anchor)),
                    Trend::Down => points.push(KeyPoint::at(KeyPointKind::HighPoint, anchor)),
                    // Entering a plateau emits nothing; its extremum is
                    // classified when the run exits.
                    Trend::Flat => {}
                }
            }
            current = Some(trend);
        }

        if let Some(crossing) = crossing_between(prev, next, cost) {
            points.push(crossing);
        }

        if trend != Trend::Flat {
            last_non_flat = Some(next);
        }
    }

    let last = curve.len() - 1;
    if curve[0].total_intrinsic_value != curve[1].total_intrinsic_value {
        points.push(KeyPoint::at(KeyPointKind::CurveEndpoint, curve[0]));
    }
    if curve[last].total_intrinsic_value != curve[last - 1].total_intrinsic_value {
        points.push(KeyPoint::at(KeyPointKind::CurveEndpoint, curve[last]));
    }

    points.sort_by(|a, b| {
        a.closing_price
            .partial_cmp(&b.closing_price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    points
}
