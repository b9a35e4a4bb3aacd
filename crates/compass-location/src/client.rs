//! record-of-slots location client

use std::collections::HashSet;

use compass_unimplemented::Slot;

use crate::action::Action;
use crate::effect::{Command, EventStream, FallibleCommand};
use crate::manager::LocationManager;
use crate::model::{
    AccuracyAuthorization, AuthorizationStatus, Distance, Heading, Location, Properties, Region,
};
use crate::ManagerId;

/// location manager as a record of swappable operations
///
/// every field is one [`Slot`]. tests start from
/// [`LocationClient::failing`] and replace just the slots they exercise,
/// either by assigning a field or through the `with_*` builders. cloning is
/// cheap and a clone's overrides never leak back into the original.
#[derive(Clone, Debug)]
pub struct LocationClient {
    pub accuracy_authorization: Slot<ManagerId, Option<AccuracyAuthorization>>,
    pub authorization_status: Slot<(), AuthorizationStatus>,
    pub delegate: Slot<ManagerId, EventStream<Action>>,
    pub dismiss_heading_calibration_display: Slot<ManagerId, Command>,
    pub heading: Slot<ManagerId, Option<Heading>>,
    pub heading_available: Slot<(), bool>,
    pub is_ranging_available: Slot<(), bool>,
    pub location: Slot<ManagerId, Option<Location>>,
    pub location_services_enabled: Slot<(), bool>,
    pub maximum_region_monitoring_distance: Slot<ManagerId, Distance>,
    pub monitored_regions: Slot<ManagerId, HashSet<Region>>,
    pub request_always_authorization: Slot<ManagerId, Command>,
    pub request_location: Slot<ManagerId, Command>,
    pub request_temporary_full_accuracy_authorization: Slot<(ManagerId, String), FallibleCommand>,
    pub request_when_in_use_authorization: Slot<ManagerId, Command>,
    pub set: Slot<(ManagerId, Properties), Command>,
    pub significant_location_change_monitoring_available: Slot<(), bool>,
    pub start_monitoring_for_region: Slot<(ManagerId, Region), Command>,
    pub start_monitoring_significant_location_changes: Slot<ManagerId, Command>,
    pub start_monitoring_visits: Slot<ManagerId, Command>,
    pub start_updating_heading: Slot<ManagerId, Command>,
    pub start_updating_location: Slot<ManagerId, Command>,
    pub stop_monitoring_for_region: Slot<(ManagerId, Region), Command>,
    pub stop_monitoring_significant_location_changes: Slot<ManagerId, Command>,
    pub stop_monitoring_visits: Slot<ManagerId, Command>,
    pub stop_updating_heading: Slot<ManagerId, Command>,
    pub stop_updating_location: Slot<ManagerId, Command>,
}

impl LocationClient {
    /// slots still left as stubs, by operation label
    pub fn unimplemented_operations(&self) -> Vec<&'static str> {
        [
            self.accuracy_authorization.operation(),
            self.authorization_status.operation(),
            self.delegate.operation(),
            self.dismiss_heading_calibration_display.operation(),
            self.heading.operation(),
            self.heading_available.operation(),
            self.is_ranging_available.operation(),
            self.location.operation(),
            self.location_services_enabled.operation(),
            self.maximum_region_monitoring_distance.operation(),
            self.monitored_regions.operation(),
            self.request_always_authorization.operation(),
            self.request_location.operation(),
            self.request_temporary_full_accuracy_authorization.operation(),
            self.request_when_in_use_authorization.operation(),
            self.set.operation(),
            self.significant_location_change_monitoring_available.operation(),
            self.start_monitoring_for_region.operation(),
            self.start_monitoring_significant_location_changes.operation(),
            self.start_monitoring_visits.operation(),
            self.start_updating_heading.operation(),
            self.start_updating_location.operation(),
            self.stop_monitoring_for_region.operation(),
            self.stop_monitoring_significant_location_changes.operation(),
            self.stop_monitoring_visits.operation(),
            self.stop_updating_heading.operation(),
            self.stop_updating_location.operation(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    // Queries

    pub fn with_accuracy_authorization(
        mut self,
        f: impl Fn(ManagerId) -> Option<AccuracyAuthorization> + Send + Sync + 'static,
    ) -> Self {
        self.accuracy_authorization = Slot::new(f);
        self
    }

    pub fn with_authorization_status(
        mut self,
        f: impl Fn() -> AuthorizationStatus + Send + Sync + 'static,
    ) -> Self {
        self.authorization_status = Slot::new(move |()| f());
        self
    }

    pub fn with_heading(
        mut self,
        f: impl Fn(ManagerId) -> Option<Heading> + Send + Sync + 'static,
    ) -> Self {
        self.heading = Slot::new(f);
        self
    }

    pub fn with_heading_available(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.heading_available = Slot::new(move |()| f());
        self
    }

    pub fn with_is_ranging_available(
        mut self,
        f: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_ranging_available = Slot::new(move |()| f());
        self
    }

    pub fn with_location(
        mut self,
        f: impl Fn(ManagerId) -> Option<Location> + Send + Sync + 'static,
    ) -> Self {
        self.location = Slot::new(f);
        self
    }

    pub fn with_location_services_enabled(
        mut self,
        f: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.location_services_enabled = Slot::new(move |()| f());
        self
    }

    pub fn with_maximum_region_monitoring_distance(
        mut self,
        f: impl Fn(ManagerId) -> Distance + Send + Sync + 'static,
    ) -> Self {
        self.maximum_region_monitoring_distance = Slot::new(f);
        self
    }

    pub fn with_monitored_regions(
        mut self,
        f: impl Fn(ManagerId) -> HashSet<Region> + Send + Sync + 'static,
    ) -> Self {
        self.monitored_regions = Slot::new(f);
        self
    }

    pub fn with_significant_location_change_monitoring_available(
        mut self,
        f: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.significant_location_change_monitoring_available = Slot::new(move |()| f());
        self
    }

    // Delegate

    pub fn with_delegate(
        mut self,
        f: impl Fn(ManagerId) -> EventStream<Action> + Send + Sync + 'static,
    ) -> Self {
        self.delegate = Slot::new(f);
        self
    }

    // Commands

    pub fn with_dismiss_heading_calibration_display(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.dismiss_heading_calibration_display = Slot::new(f);
        self
    }

    pub fn with_request_always_authorization(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.request_always_authorization = Slot::new(f);
        self
    }

    pub fn with_request_location(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.request_location = Slot::new(f);
        self
    }

    pub fn with_request_temporary_full_accuracy_authorization(
        mut self,
        f: impl Fn(ManagerId, String) -> FallibleCommand + Send + Sync + 'static,
    ) -> Self {
        self.request_temporary_full_accuracy_authorization =
            Slot::new(move |(id, purpose_key)| f(id, purpose_key));
        self
    }

    pub fn with_request_when_in_use_authorization(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.request_when_in_use_authorization = Slot::new(f);
        self
    }

    pub fn with_set(
        mut self,
        f: impl Fn(ManagerId, Properties) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.set = Slot::new(move |(id, properties)| f(id, properties));
        self
    }

    pub fn with_start_monitoring_for_region(
        mut self,
        f: impl Fn(ManagerId, Region) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.start_monitoring_for_region = Slot::new(move |(id, region)| f(id, region));
        self
    }

    pub fn with_start_monitoring_significant_location_changes(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.start_monitoring_significant_location_changes = Slot::new(f);
        self
    }

    pub fn with_start_monitoring_visits(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.start_monitoring_visits = Slot::new(f);
        self
    }

    pub fn with_start_updating_heading(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.start_updating_heading = Slot::new(f);
        self
    }

    pub fn with_start_updating_location(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.start_updating_location = Slot::new(f);
        self
    }

    pub fn with_stop_monitoring_for_region(
        mut self,
        f: impl Fn(ManagerId, Region) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.stop_monitoring_for_region = Slot::new(move |(id, region)| f(id, region));
        self
    }

    pub fn with_stop_monitoring_significant_location_changes(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.stop_monitoring_significant_location_changes = Slot::new(f);
        self
    }

    pub fn with_stop_monitoring_visits(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.stop_monitoring_visits = Slot::new(f);
        self
    }

    pub fn with_stop_updating_heading(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.stop_updating_heading = Slot::new(f);
        self
    }

    pub fn with_stop_updating_location(
        mut self,
        f: impl Fn(ManagerId) -> Command + Send + Sync + 'static,
    ) -> Self {
        self.stop_updating_location = Slot::new(f);
        self
    }
}

impl LocationManager for LocationClient {
    #[track_caller]
    fn accuracy_authorization(&self, id: ManagerId) -> Option<AccuracyAuthorization> {
        self.accuracy_authorization.call(id)
    }

    #[track_caller]
    fn authorization_status(&self) -> AuthorizationStatus {
        self.authorization_status.call(())
    }

    #[track_caller]
    fn delegate(&self, id: ManagerId) -> EventStream<Action> {
        self.delegate.call(id)
    }

    #[track_caller]
    fn dismiss_heading_calibration_display(&self, id: ManagerId) -> Command {
        self.dismiss_heading_calibration_display.call(id)
    }

    #[track_caller]
    fn heading(&self, id: ManagerId) -> Option<Heading> {
        self.heading.call(id)
    }

    #[track_caller]
    fn heading_available(&self) -> bool {
        self.heading_available.call(())
    }

    #[track_caller]
    fn is_ranging_available(&self) -> bool {
        self.is_ranging_available.call(())
    }

    #[track_caller]
    fn location(&self, id: ManagerId) -> Option<Location> {
        self.location.call(id)
    }

    #[track_caller]
    fn location_services_enabled(&self) -> bool {
        self.location_services_enabled.call(())
    }

    #[track_caller]
    fn maximum_region_monitoring_distance(&self, id: ManagerId) -> Distance {
        self.maximum_region_monitoring_distance.call(id)
    }

    #[track_caller]
    fn monitored_regions(&self, id: ManagerId) -> HashSet<Region> {
        self.monitored_regions.call(id)
    }

    #[track_caller]
    fn request_always_authorization(&self, id: ManagerId) -> Command {
        self.request_always_authorization.call(id)
    }

    #[track_caller]
    fn request_location(&self, id: ManagerId) -> Command {
        self.request_location.call(id)
    }

    #[track_caller]
    fn request_temporary_full_accuracy_authorization(
        &self,
        id: ManagerId,
        purpose_key: String,
    ) -> FallibleCommand {
        self.request_temporary_full_accuracy_authorization
            .call((id, purpose_key))
    }

    #[track_caller]
    fn request_when_in_use_authorization(&self, id: ManagerId) -> Command {
        self.request_when_in_use_authorization.call(id)
    }

    #[track_caller]
    fn set(&self, id: ManagerId, properties: Properties) -> Command {
        self.set.call((id, properties))
    }

    #[track_caller]
    fn significant_location_change_monitoring_available(&self) -> bool {
        self.significant_location_change_monitoring_available.call(())
    }

    #[track_caller]
    fn start_monitoring_for_region(&self, id: ManagerId, region: Region) -> Command {
        self.start_monitoring_for_region.call((id, region))
    }

    #[track_caller]
    fn start_monitoring_significant_location_changes(&self, id: ManagerId) -> Command {
        self.start_monitoring_significant_location_changes.call(id)
    }

    #[track_caller]
    fn start_monitoring_visits(&self, id: ManagerId) -> Command {
        self.start_monitoring_visits.call(id)
    }

    #[track_caller]
    fn start_updating_heading(&self, id: ManagerId) -> Command {
        self.start_updating_heading.call(id)
    }

    #[track_caller]
    fn start_updating_location(&self, id: ManagerId) -> Command {
        self.start_updating_location.call(id)
    }

    #[track_caller]
    fn stop_monitoring_for_region(&self, id: ManagerId, region: Region) -> Command {
        self.stop_monitoring_for_region.call((id, region))
    }

    #[track_caller]
    fn stop_monitoring_significant_location_changes(&self, id: ManagerId) -> Command {
        self.stop_monitoring_significant_location_changes.call(id)
    }

    #[track_caller]
    fn stop_monitoring_visits(&self, id: ManagerId) -> Command {
        self.stop_monitoring_visits.call(id)
    }

    #[track_caller]
    fn stop_updating_heading(&self, id: ManagerId) -> Command {
        self.stop_updating_heading.call(id)
    }

    #[track_caller]
    fn stop_updating_location(&self, id: ManagerId) -> Command {
        self.stop_updating_location.call(id)
    }
}
