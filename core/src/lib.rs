pub mod node;
pub mod tree;

pub use node::{reply_penalty, Node, Score};
pub use tree::{Tree, TreeError};
