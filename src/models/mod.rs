//! CPU scheduling domain models.
//!
//! Provides the plain data types exchanged between the policies, the
//! simulator and the metrics reporter.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Input pair (arrival, burst) |
//! | `ProcessRecord` | Mutable per-run process state |
//! | `Timeline` / `Slice` | Ordered execution record |

mod process;
mod timeline;

pub use process::{ProcessRecord, ProcessSpec};
pub use timeline::{Slice, Timeline};
