use num_traits::{SaturatingAdd, SaturatingSub, Signed};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Heuristic value attached to a node.
///
/// Scores must be totally ordered, so NaN-like values cannot be expressed.
/// Every signed primitive integer qualifies.
pub trait Score: Copy + Ord + Debug + Signed + SaturatingAdd + SaturatingSub {}

impl<T> Score for T where T: Copy + Ord + Debug + Signed + SaturatingAdd + SaturatingSub {}

/// Fixed penalty subtracted from the best reply when a candidate is adjusted.
pub fn reply_penalty<S: Score>() -> S {
    S::one()
}

/// One position in a two-ply decision tree.
///
/// Top-level nodes are the candidate moves; their `children` are the
/// opponent's replies. Nothing below the replies is ever read by selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<P, S> {
    pub position: P,
    pub score: S,
    pub children: Vec<Node<P, S>>,
}

impl<P, S> Node<P, S> {
    pub fn new(position: P, score: S, children: Vec<Node<P, S>>) -> Self {
        Node {
            position,
            score,
            children,
        }
    }

    /// A node with no replies.
    pub fn leaf(position: P, score: S) -> Self {
        Node::new(position, score, Vec::new())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<P, S: Score> Node<P, S> {
    /// The opponent's strongest reply: the lowest-scored child, first one
    /// wins on ties.
    pub fn best_reply(&self) -> Option<&Node<P, S>> {
        self.children.iter().min_by_key(|child| child.score)
    }
}
