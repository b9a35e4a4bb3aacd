//! error types for location services

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use compass_unimplemented::Error;

/// failures delivered by the platform manager
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LocationError {
    #[error("location is currently unknown")]
    LocationUnknown,

    #[error("access to location services denied")]
    Denied,

    #[error("network error")]
    Network,

    #[error("heading could not be determined")]
    HeadingFailure,

    #[error("region monitoring denied")]
    RegionMonitoringDenied,

    #[error("region monitoring failed")]
    RegionMonitoringFailure,

    #[error("region monitoring setup delayed")]
    RegionMonitoringSetupDelayed,

    #[error("region monitoring response delayed")]
    RegionMonitoringResponseDelayed,

    #[error("deferred updates failed")]
    DeferredFailed,

    #[error("authorization prompt declined")]
    PromptDeclined,

    #[error("location error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
