use crate::Agent;
use minimax_core::{Node, Score};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks a candidate uniformly at random. Never modifies the candidates.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible picks for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            name: format!("Random(seed={})", seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone, S: Score> Agent<P, S> for RandomAgent {
    fn best_move(&mut self, candidates: &mut [Node<P, S>]) -> Option<P> {
        candidates
            .choose(&mut self.rng)
            .map(|node| node.position.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
