//! Logic behind the handwriting practice games: scoring traced letters against their guides,
//! running a tracing session, and matching spoken words in the reading game.

pub mod geom;
pub mod shape;

mod config;
pub use config::*;

mod letters;
pub use letters::*;

mod evaluator;
pub use evaluator::*;

mod gesture;
pub use gesture::*;

pub mod session;
pub use session::{NextOutcome, TraceOutcome, TracingSession};

pub mod reading;
