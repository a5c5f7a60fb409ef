use minimax_core::{reply_penalty, Node, Score};

/// How one candidate scored during selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<S> {
    pub index: usize,
    /// Score as supplied, before adjustment.
    pub score: S,
    /// Lowest reply score, `None` for a leaf.
    pub best_reply: Option<S>,
    /// Score compared during selection.
    pub adjusted: S,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a, P, S> {
    pub index: usize,
    pub position: &'a P,
    pub score: S,
    pub candidates: Vec<Candidate<S>>,
}

/// Score of a candidate after its immediate replies are taken into account:
/// `score + (min_reply - 1)`, or `score` unchanged for a leaf.
///
/// Saturates at the bounds of `S` only when the exact result is out of
/// range. Grandchildren are not read.
pub fn adjusted_score<P, S: Score>(node: &Node<P, S>) -> S {
    let reply = match node.best_reply() {
        Some(reply) => reply.score,
        None => return node.score,
    };

    // `reply - 1` cannot overflow for a positive reply; otherwise apply the
    // penalty to the candidate first so only the final sum can saturate.
    if reply > S::zero() {
        node.score.saturating_add(&(reply - reply_penalty()))
    } else {
        node.score
            .saturating_sub(&reply_penalty())
            .saturating_add(&reply)
    }
}

/// Picks the best candidate and returns its position, or `None` when there
/// are no candidates.
///
/// Candidates are scanned once, in order. Every candidate with replies has
/// its `score` overwritten with [`adjusted_score`] and the overwrite stays
/// visible after the call. A later candidate replaces the current best only
/// when its adjusted score is strictly greater, so the earliest of equal
/// candidates wins.
///
/// Use [`select`] to get the same choice without touching the input.
pub fn select_best<P, S: Score>(candidates: &mut [Node<P, S>]) -> Option<&P> {
    if candidates.is_empty() {
        return None;
    }

    let mut best = 0;
    for index in 0..candidates.len() {
        let node = &mut candidates[index];
        if !node.is_leaf() {
            let adjusted = adjusted_score(node);
            log::trace!(
                "candidate {}: score {:?} adjusted to {:?}",
                index,
                node.score,
                adjusted
            );
            node.score = adjusted;
        }

        if index != best && candidates[index].score > candidates[best].score {
            best = index;
        }
    }

    log::debug!(
        "selected candidate {} of {} with score {:?}",
        best,
        candidates.len(),
        candidates[best].score
    );
    Some(&candidates[best].position)
}

/// Scores every candidate without modifying it.
pub fn evaluate<P, S: Score>(candidates: &[Node<P, S>]) -> Vec<Candidate<S>> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, node)| Candidate {
            index,
            score: node.score,
            best_reply: node.best_reply().map(|reply| reply.score),
            adjusted: adjusted_score(node),
        })
        .collect()
}

/// Non-mutating counterpart of [`select_best`]. Chooses the same candidate
/// and reports the adjusted score of every candidate instead of writing it
/// back.
pub fn select<P, S: Score>(candidates: &[Node<P, S>]) -> Option<Selection<'_, P, S>> {
    let report = evaluate(candidates);
    let mut best = *report.first()?;
    for candidate in &report[1..] {
        if candidate.adjusted > best.adjusted {
            best = *candidate;
        }
    }

    log::debug!(
        "selected candidate {} of {} with score {:?}",
        best.index,
        report.len(),
        best.adjusted
    );
    Some(Selection {
        index: best.index,
        position: &candidates[best.index].position,
        score: best.adjusted,
        candidates: report,
    })
}
