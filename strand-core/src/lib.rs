//! Shared primitives for the strand sequence toolkit.
//!
//! `strand-core` is the foundation the other strand crates build on:
//!
//! - **Error types** — [`StrandError`] and [`Result`] for every fallible operation
//! - **Traits** — [`Sequence`] and [`Summarizable`], implemented by sequence types

pub mod error;
pub mod traits;

pub use error::{Result, StrandError};
pub use traits::*;
