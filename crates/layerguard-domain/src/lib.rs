//! Pure policy evaluation (no IO).
//!
//! Input: an import edge plus an immutable policy config and alias map
//! constructed elsewhere. Output: a permit/deny verdict per edge.

#![forbid(unsafe_code)]

pub mod classify;
pub mod model;
pub mod resolve;

mod engine;

#[cfg(test)]
mod proptest;

pub use engine::{evaluate, DenyReason, EvalError, Verdict};
