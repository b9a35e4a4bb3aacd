//! Failing stubs for capability records
//!
//! A capability record is a struct of swappable operation [`Slot`]s standing
//! in for some external API. This crate builds the "unimplemented" version of
//! each slot: calling it reports one failure through an injected [`Reporter`]
//! and then returns a placeholder, so a test keeps running deterministically
//! and still learns which capability it forgot to configure.
//!
//! ```text
//! test                  Slot (stub)                 Reporter
//!  │  client.heading(id)    │                           │
//!  ├───────────────────────►│ UnconfiguredOperation     │
//!  │                        ├──────────────────────────►│ record / panic / log
//!  │◄───────────────────────┤ placeholder (None)        │
//! ```
//!
//! Stub flavours:
//! - [`query`]: returns a clone of a typed placeholder
//! - [`command`]: returns an already-complete effect
//! - [`fallible_command`]: returns an effect resolving `Ok(())`
//! - [`stream`]: returns a stream that never yields and never ends

pub mod error;
pub mod reporter;
pub mod slot;

pub use error::{Error, Result};
pub use reporter::{Recorder, ReportFailure, Reporter};
pub use slot::{command, fallible_command, query, stream, Slot};
