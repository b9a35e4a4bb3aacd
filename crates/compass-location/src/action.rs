//! delegate callback events

use serde::{Deserialize, Serialize};

use crate::error::LocationError;
use crate::model::{AuthorizationStatus, Heading, Location, Region, RegionState, Visit};

/// events delivered on a manager's `delegate` stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    // Authorization
    DidChangeAuthorization(AuthorizationStatus),

    // Location
    DidUpdateLocations(Vec<Location>),
    DidFailWithError(LocationError),
    DidFinishDeferredUpdates(Option<LocationError>),
    DidPauseLocationUpdates,
    DidResumeLocationUpdates,

    // Heading
    DidUpdateHeading(Heading),

    // Regions
    DidDetermineState { state: RegionState, region: Region },
    DidEnterRegion(Region),
    DidExitRegion(Region),
    DidStartMonitoring(Region),
    MonitoringDidFail { region: Option<Region>, error: LocationError },

    // Visits
    DidVisit(Visit),
}

impl Action {
    /// the error carried by failure callbacks
    pub fn error(&self) -> Option<&LocationError> {
        match self {
            Action::DidFailWithError(error) | Action::MonitoringDidFail { error, .. } => {
                Some(error)
            }
            Action::DidFinishDeferredUpdates(error) => error.as_ref(),
            _ => None,
        }
    }

    /// the region a region callback refers to
    pub fn region(&self) -> Option<&Region> {
        match self {
            Action::DidDetermineState { region, .. }
            | Action::DidEnterRegion(region)
            | Action::DidExitRegion(region)
            | Action::DidStartMonitoring(region) => Some(region),
            Action::MonitoringDidFail { region, .. } => region.as_ref(),
            _ => None,
        }
    }
}
