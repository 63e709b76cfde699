//! Headline figures for a payoff profile: best and worst outcomes over the
//! swept range, break-even prices, and whether the sweep boundaries clip a
//! still-moving curve.

use crate::core::ValuePoint;

use super::key_points::{KeyPoint, KeyPointKind};

/// Condensed profile of a value curve against a cost basis.
///
/// `max_profit` and `max_loss` are the extreme profit/loss values observed on
/// the swept grid (`max_loss` may be positive when every outcome is
/// profitable). When `open_left`/`open_right` is set, the curve is still
/// changing at that boundary and the true extreme may lie outside the sweep,
/// e.g. the unbounded upside of a long call.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProfileSummary {
    /// Highest profit/loss on the grid.
    pub max_profit: f64,
    /// First price attaining `max_profit`.
    pub max_profit_price: f64,
    /// Lowest profit/loss on the grid.
    pub max_loss: f64,
    /// First price attaining `max_loss`.
    pub max_loss_price: f64,
    /// Break-even prices, ascending.
    pub break_evens: Vec<f64>,
    /// Value still changing at the lower sweep boundary.
    pub open_left: bool,
    /// Value still changing at the upper sweep boundary.
    pub open_right: bool,
}

impl ProfileSummary {
    /// Summarizes `curve` against `cost`, pulling break-evens from
    /// `key_points` (as produced by
    /// [`find_key_points`](super::key_points::find_key_points) for the same
    /// curve and cost). Returns `None` for an empty curve.
    pub fn from_curve(curve: &[ValuePoint], cost: f64, key_points: &[KeyPoint]) -> Option<Self> {
        let first = curve.first()?;

        let mut max_profit = first.total_intrinsic_value - cost;
        let mut max_profit_price = first.closing_price;
        let mut max_loss = max_profit;
        let mut max_loss_price = first.closing_price;
        for point in &curve[1..] {
            let pl = point.total_intrinsic_value - cost;
            if pl > max_profit {
                max_profit = pl;
                max_profit_price = point.closing_price;
            }
            if pl < max_loss {
                max_loss = pl;
                max_loss_price = point.closing_price;
            }
        }

        let break_evens = key_points
            .iter()
            .filter(|p| p.kind == KeyPointKind::ZeroCrossing)
            .map(|p| p.closing_price)
            .collect();

        let last = curve.len() - 1;
        let open_left = curve.len() > 1
            && curve[0].total_intrinsic_value != curve[1].total_intrinsic_value;
        let open_right = curve.len() > 1
            && curve[last].total_intrinsic_value != curve[last - 1].total_intrinsic_value;

        Some(Self {
            max_profit,
            max_profit_price,
            max_loss,
            max_loss_price,
            break_evens,
            open_left,
            open_right,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::key_points::find_key_points;
    use crate::core::{OptionLeg, PriceSweep};
    use crate::pricing::payoff::evaluate;

    #[test]
    fn empty_curve_has_no_summary() {
        assert!(ProfileSummary::from_curve(&[], 0.0, &[]).is_none());
    }

    #[test]
    fn long_straddle_summary() {
        let legs = [OptionLeg::call(100.0, 1), OptionLeg::put(100.0, 1)];
        let sweep = PriceSweep::new(80.0, 120.0, 10.0);
        let curve = evaluate(&legs, &sweep).unwrap();
        let key_points = find_key_points(&curve, 800.0);
        let summary = ProfileSummary::from_curve(&curve, 800.0, &key_points).unwrap();

        assert_eq!(summary.max_loss, -800.0);
        assert_eq!(summary.max_loss_price, 100.0);
        assert_eq!(summary.max_profit, 1200.0);
        assert_eq!(summary.max_profit_price, 80.0);
        assert_eq!(summary.break_evens, vec![92.0, 108.0]);
        assert!(summary.open_left);
        assert!(summary.open_right);
    }

    #[test]
    fn capped_spread_is_closed_at_the_flat_end() {
        let legs = [OptionLeg::call(100.0, 1), OptionLeg::call(110.0, -1)];
        let sweep = PriceSweep::new(90.0, 130.0, 10.0);
        let curve = evaluate(&legs, &sweep).unwrap();
        let key_points = find_key_points(&curve, 300.0);
        let summary = ProfileSummary::from_curve(&curve, 300.0, &key_points).unwrap();

        assert_eq!(summary.max_profit, 700.0);
        assert_eq!(summary.max_loss, -300.0);
        assert_eq!(summary.break_evens, vec![103.0]);
        assert!(!summary.open_left);
        assert!(!summary.open_right);
    }
}
