//! branch-sweep: delete GitHub branches by name, by pull request, or by last-commit age.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{RunnerSettings, sweep};
pub use domain::{
    AppError, BranchAction, BranchReport, InvocationContext, RunStatus, SweepInputs, SweepOutcome,
};
