//! The step trace protocol.
//!
//! Every algorithm answers with an [`AlgorithmResult`]: a typed [`Outcome`] plus the ordered
//! list of [`AlgorithmStep`]s that led to it and one log line per step. The steps are the
//! contract with whatever replays the run (an animation timer, a CLI table, a test); the
//! engine itself has no notion of a "current step".
//!
//! Steps hold owned copies of their cumulative fields. Nothing recorded earlier can be
//! changed by what the algorithm does afterwards.

mod recorder;
mod result;
mod step;

pub(crate) use recorder::Trace;
pub use result::{
    AlgorithmResult, Bipartition, EdgeFlow, EulerianWalk, Infeasibility, MaxFlow,
    NodeDistance, Outcome, Route, ShortestPaths, SpanningTree, Traversal, WalkShape,
};
pub use step::{AlgorithmStep, LinkRef, ZoneSets};
