mod alignment;
pub use alignment::{GlobalAlignment, LocalAlignment, LocalBounds};

mod dp_matrix;
pub use dp_matrix::{DpMatrix, ScoreMatrix};

mod trace;
pub use trace::{
    select_step, trace_string, LocalTraceStep, ProfileTraceStep, SimpleTrace, SimpleTraceStep,
};
