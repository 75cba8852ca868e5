pub mod budget;
pub mod ranking;
pub mod scoring;
pub mod weights;

use thiserror::Error;

pub use ranking::{RankPolicy, RankedTalent, rank};
pub use scoring::{MatchCriteria, MatchingEngine, rank_talents_for_gig, rank_talents_for_query};
pub use weights::{DEFAULT_WEIGHTS, ScoreWeights};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("gig not found: {0}")]
    GigNotFound(String),
}
