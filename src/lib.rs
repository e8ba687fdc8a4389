pub mod classify;
pub mod cli;
pub mod errors;
pub mod git;
pub mod orchestrator;
pub mod plan;
pub mod utils;
