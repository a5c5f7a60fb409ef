use crate::{selection::select_best, Agent};
use minimax_core::{Node, Score};

/// Looks one reply ahead: each candidate is penalized by the opponent's
/// best answer before the highest one is taken.
///
/// Scores of candidates with replies are overwritten with their adjusted
/// value.
pub struct MinimaxAgent {
    name: String,
}

impl MinimaxAgent {
    pub fn new() -> Self {
        MinimaxAgent {
            name: "Minimax(depth=2)".to_string(),
        }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone, S: Score> Agent<P, S> for MinimaxAgent {
    fn best_move(&mut self, candidates: &mut [Node<P, S>]) -> Option<P> {
        select_best(candidates).cloned()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
