use minimax_agents::Selection;
use minimax_core::Node;
use serde_json::Value;
use std::io::{self, Write};

/// One row per candidate, chosen row marked with `*`.
pub fn write_selection<W: Write>(
    out: &mut W,
    candidates: &[Node<Value, i64>],
    selection: &Selection<'_, Value, i64>,
) -> io::Result<()> {
    writeln!(
        out,
        "  {:>3}  {:<16} {:>8} {:>10} {:>9}",
        "#", "position", "score", "best reply", "adjusted"
    )?;

    for candidate in &selection.candidates {
        let marker = if candidate.index == selection.index { '*' } else { ' ' };
        let best_reply = match candidate.best_reply {
            Some(score) => score.to_string(),
            None => "-".to_string(),
        };
        writeln!(
            out,
            "{} {:>3}  {:<16} {:>8} {:>10} {:>9}",
            marker,
            candidate.index,
            candidates[candidate.index].position.to_string(),
            candidate.score,
            best_reply,
            candidate.adjusted
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Best move: {} (score {})",
        selection.position, selection.score
    )
}
