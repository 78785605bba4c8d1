pub mod advisor;
pub mod config;
pub mod evaluation;
pub mod search;
pub mod status;

pub use advisor::{Advisor, Recommendation};
pub use config::{EngineConfig, Roles};
pub use evaluation::{evaluate, WIN_SCORE};
pub use search::{best_move, score_moves, search};
pub use status::{status, GameStatus};
