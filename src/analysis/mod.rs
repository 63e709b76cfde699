pub mod key_points;
pub mod summary;

pub use key_points::{find_key_points, KeyPoint, KeyPointKind};
pub use summary::ProfileSummary;
