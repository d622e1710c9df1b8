//! Request-scoped evaluation over a process-wide application context.
//!
//! [`AppContext`] owns the collaborators, the scoring policy and the
//! precomputed [`CorpusIndex`]. Each request calls
//! [`AppContext::evaluate_document`], which extracts the text, runs the four
//! scorers and aggregates the verdict under a timeout.

mod context;
mod error;
mod evaluate;
mod index;


pub use context::{AppContext, Collaborators};
pub use error::PipelineError;
pub use evaluate::{Assessment, Evaluation, UnreadableDocument};
pub use index::CorpusIndex;
