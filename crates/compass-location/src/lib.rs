//! compass location - testable location services client
//!
//! The platform location manager seen as a capability: a record of
//! swappable operations that features receive by injection instead of
//! reaching for the platform singleton.
//!
//! ```text
//! Feature (Tracker)          LocationClient                 platform / test
//!    │  authorization_status()   │                                │
//!    ├──────────────────────────►│ query, answered synchronously  │
//!    │  request_location(id)     │                                │
//!    ├──────────────────────────►│ Command, run by the caller ───►│
//!    │  delegate(id)             │                                │
//!    ├──────────────────────────►│ EventStream<Action> ◄──────────┤ callbacks
//!    │◄──────────────────────────┤ until Subscriptions::cancel(id)│
//! ```
//!
//! Tests build [`LocationClient::failing`]: every operation reports an
//! unconfigured call through the injected reporter and returns an inert
//! placeholder, and the test overrides just the operations it expects.

pub mod action;
pub mod client;
pub mod effect;
pub mod error;
pub mod failing;
pub mod id;
pub mod manager;
pub mod model;
pub mod operation;
pub mod tracker;

#[cfg(debug_assertions)]
pub mod legacy;

pub use action::Action;
pub use client::LocationClient;
pub use effect::{Cancellation, Command, Effect, EventStream, FallibleCommand, Subscriptions};
pub use error::{Error, LocationError, Result};
pub use id::ManagerId;
pub use manager::LocationManager;
pub use model::{
    AccuracyAuthorization, ActivityType, AuthorizationStatus, Coordinate, DeviceOrientation,
    Distance, Heading, Location, Properties, Region, RegionKind, RegionState, Visit,
};
pub use tracker::Tracker;

pub use compass_unimplemented::{Recorder, Reporter, Slot};
