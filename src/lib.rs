//! Candidate fit evaluation for hiring pipelines: deterministic scoring,
//! recommendation tiers, and cohort ranking against job descriptions.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod intake;
pub mod telemetry;

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

pub use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
