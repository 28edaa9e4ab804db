use std::fmt::{Display, Formatter};

use serde::Serialize;

/// A step in a global (Needleman-Wunsch) traceback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SimpleTraceStep {
    #[default]
    Stop,
    /// Consume a residue from both sequences
    Diagonal,
    /// Consume a residue from the first sequence; gap in the second
    Up,
    /// Consume a residue from the second sequence; gap in the first
    Left,
}

pub type SimpleTrace = Vec<SimpleTraceStep>;

/// A step in a local (Smith-Waterman) traceback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum LocalTraceStep {
    #[default]
    Stop,
    /// Consume a residue from the first sequence (row index decremented)
    GapInSeq2,
    /// Consume a residue from the second sequence (column index decremented)
    GapInSeq1,
    /// Consume a residue from both sequences
    Diagonal,
}

/// A step in a profile-profile traceback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ProfileTraceStep {
    #[default]
    Stop,
    /// Consume a column from both profiles
    Diagonal,
    /// Consume a column from the second profile; gaps in every first profile member
    Horizontal,
    /// Consume a column from the first profile; gaps in every second profile member
    Vertical,
}

impl Display for SimpleTraceStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SimpleTraceStep::Stop => write!(f, "*"),
            SimpleTraceStep::Diagonal => write!(f, "D"),
            SimpleTraceStep::Up => write!(f, "U"),
            SimpleTraceStep::Left => write!(f, "L"),
        }
    }
}

impl Display for LocalTraceStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalTraceStep::Stop => write!(f, "*"),
            LocalTraceStep::GapInSeq2 => write!(f, "U"),
            LocalTraceStep::GapInSeq1 => write!(f, "L"),
            LocalTraceStep::Diagonal => write!(f, "D"),
        }
    }
}

impl Display for ProfileTraceStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileTraceStep::Stop => write!(f, "*"),
            ProfileTraceStep::Diagonal => write!(f, "d"),
            ProfileTraceStep::Horizontal => write!(f, "h"),
            ProfileTraceStep::Vertical => write!(f, "v"),
        }
    }
}

/// Select the traceback step for a cell.
///
/// The `candidates` are checked in order and every candidate whose score equals
/// the cell `score` overwrites the previous choice, so the *last* match wins.
/// If nothing matches, `default` is returned.
#[inline]
pub fn select_step<S: Copy>(score: isize, candidates: &[(S, isize)], default: S) -> S {
    candidates
        .iter()
        .rev()
        .find(|(_, candidate)| *candidate == score)
        .map(|(step, _)| *step)
        .unwrap_or(default)
}

/// Render a trace as one character per step, e.g. `DDDULD`.
pub fn trace_string(trace: &SimpleTrace) -> String {
    trace.iter().map(|step| step.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_step_last_match_wins() {
        use SimpleTraceStep::*;

        // everything ties: the last candidate is chosen
        assert_eq!(select_step(5, &[(Up, 5), (Diagonal, 5)], Left), Diagonal);
        // only the first candidate matches
        assert_eq!(select_step(5, &[(Up, 5), (Diagonal, 4)], Left), Up);
        // nothing matches: fall back to the default
        assert_eq!(select_step(5, &[(Up, 3), (Diagonal, 4)], Left), Left);
    }

    #[test]
    fn test_trace_string() {
        use SimpleTraceStep::*;
        assert_eq!(trace_string(&vec![Diagonal, Diagonal, Up, Left]), "DDUL");
        assert_eq!(trace_string(&vec![]), "");
    }

    #[test]
    fn test_select_step_local_order() {
        use LocalTraceStep::*;

        let order = |score, left, up, diagonal| {
            select_step(
                score,
                &[(GapInSeq2, left), (GapInSeq1, up), (Diagonal, diagonal)],
                Stop,
            )
        };

        assert_eq!(order(0, -5, -5, -5), Stop);
        assert_eq!(order(10, 10, -5, -5), GapInSeq2);
        assert_eq!(order(10, 10, 10, -5), GapInSeq1);
        assert_eq!(order(10, 10, 10, 10), Diagonal);
        // a zero cell can still point somewhere if a predecessor reached zero
        assert_eq!(order(0, -5, -5, 0), Diagonal);
    }
}
