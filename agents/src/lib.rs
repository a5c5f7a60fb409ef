pub mod greedy;
pub mod minimax;
pub mod random;
pub mod selection;

use minimax_core::{Node, Score};

/// Core trait for move-selection agents
pub trait Agent<P, S: Score> {
    /// Pick a move from the candidates, or `None` when there are none.
    ///
    /// Agents may rewrite candidate scores; see each implementation.
    fn best_move(&mut self, candidates: &mut [Node<P, S>]) -> Option<P>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use greedy::GreedyAgent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use selection::*;
