use crate::Agent;
use minimax_core::{Node, Score};

/// Takes the highest raw score and ignores replies. Earliest candidate wins
/// ties. Never modifies the candidates.
pub struct GreedyAgent {
    name: String,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            name: "Greedy".to_string(),
        }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone, S: Score> Agent<P, S> for GreedyAgent {
    fn best_move(&mut self, candidates: &mut [Node<P, S>]) -> Option<P> {
        let mut best = candidates.first()?;
        for node in &candidates[1..] {
            if node.score > best.score {
                best = node;
            }
        }
        log::debug!("greedy pick with raw score {:?}", best.score);
        Some(best.position.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
