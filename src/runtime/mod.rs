// Runtime execution engine.

pub mod engine;
mod executor;
pub mod report;

pub use executor::FlowExecutor;
