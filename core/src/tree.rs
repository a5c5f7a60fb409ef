use crate::node::Node;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Tree documents: a JSON array of nodes, each with `position`, `score` and
/// `children`. A node missing any of the three fields is rejected.
pub type Tree<P, S> = Vec<Node<P, S>>;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("failed to read tree from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tree document: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_json_str<P, S>(json: &str) -> Result<Tree<P, S>, TreeError>
where
    P: DeserializeOwned,
    S: DeserializeOwned,
{
    Ok(serde_json::from_str(json)?)
}

pub fn from_reader<R, P, S>(reader: R) -> Result<Tree<P, S>, TreeError>
where
    R: Read,
    P: DeserializeOwned,
    S: DeserializeOwned,
{
    Ok(serde_json::from_reader(reader)?)
}

pub fn load<P, S>(path: impl AsRef<Path>) -> Result<Tree<P, S>, TreeError>
where
    P: DeserializeOwned,
    S: DeserializeOwned,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(BufReader::new(file))
}

/// Renders a tree as pretty-printed JSON.
pub fn to_json_string<P, S>(tree: &[Node<P, S>]) -> Result<String, TreeError>
where
    P: Serialize,
    S: Serialize,
{
    Ok(serde_json::to_string_pretty(tree)?)
}
