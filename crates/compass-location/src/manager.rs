//! location manager capability
//!
//! the full surface a feature may use to talk to the platform location
//! manager. three kinds of operations:
//! - queries: answered synchronously on the caller's thread
//! - commands: deferred effects that complete at most once and never fail
//! - delegate: the stream of platform callbacks for one manager id
//!
//! implementations:
//! - [`LocationClient`](crate::LocationClient): record of swappable slots,
//!   use [`LocationClient::failing`](crate::LocationClient::failing) in tests
//!   and override only what the test needs

use std::collections::HashSet;

use crate::action::Action;
use crate::effect::{Command, EventStream, FallibleCommand};
use crate::model::{
    AccuracyAuthorization, AuthorizationStatus, Distance, Heading, Location, Properties, Region,
};
use crate::ManagerId;

pub trait LocationManager: Send + Sync {
    /// accuracy granted to the app, `None` before authorization
    fn accuracy_authorization(&self, id: ManagerId) -> Option<AccuracyAuthorization>;

    fn authorization_status(&self) -> AuthorizationStatus;

    /// callbacks for `id`, runs until cancelled
    fn delegate(&self, id: ManagerId) -> EventStream<Action>;

    fn dismiss_heading_calibration_display(&self, id: ManagerId) -> Command;

    /// most recent heading, if any
    fn heading(&self, id: ManagerId) -> Option<Heading>;

    fn heading_available(&self) -> bool;

    fn is_ranging_available(&self) -> bool;

    /// most recent location fix, if any
    fn location(&self, id: ManagerId) -> Option<Location>;

    fn location_services_enabled(&self) -> bool;

    fn maximum_region_monitoring_distance(&self, id: ManagerId) -> Distance;

    fn monitored_regions(&self, id: ManagerId) -> HashSet<Region>;

    fn request_always_authorization(&self, id: ManagerId) -> Command;

    /// one-shot fix, delivered through the delegate
    fn request_location(&self, id: ManagerId) -> Command;

    /// ask for full accuracy once, `purpose_key` names the usage description
    fn request_temporary_full_accuracy_authorization(
        &self,
        id: ManagerId,
        purpose_key: String,
    ) -> FallibleCommand;

    fn request_when_in_use_authorization(&self, id: ManagerId) -> Command;

    fn set(&self, id: ManagerId, properties: Properties) -> Command;

    fn significant_location_change_monitoring_available(&self) -> bool;

    fn start_monitoring_for_region(&self, id: ManagerId, region: Region) -> Command;

    fn start_monitoring_significant_location_changes(&self, id: ManagerId) -> Command;

    fn start_monitoring_visits(&self, id: ManagerId) -> Command;

    fn start_updating_heading(&self, id: ManagerId) -> Command;

    fn start_updating_location(&self, id: ManagerId) -> Command;

    fn stop_monitoring_for_region(&self, id: ManagerId, region: Region) -> Command;

    fn stop_monitoring_significant_location_changes(&self, id: ManagerId) -> Command;

    fn stop_monitoring_visits(&self, id: ManagerId) -> Command;

    fn stop_updating_heading(&self, id: ManagerId) -> Command;

    fn stop_updating_location(&self, id: ManagerId) -> Command;
}
