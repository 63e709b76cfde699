pub mod payoff;

pub use crate::core::types::OptionType;
pub use payoff::{evaluate, evaluate_per_leg};

#[cfg(feature = "parallel")]
pub use payoff::evaluate_parallel;
