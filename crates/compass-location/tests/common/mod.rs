//! shared helpers for integration tests

#![allow(dead_code)]

use std::time::{Duration, UNIX_EPOCH};

use compass_location::operation as op;
use compass_location::{
    Coordinate, Location, LocationClient, LocationManager, ManagerId, Properties, Region,
};
use futures::future::{self, FutureExt};
use futures::stream::{self, StreamExt};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compass_location=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// fixed fix, equal across calls
pub fn berlin() -> Location {
    Location {
        timestamp: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
        horizontal_accuracy: 5.0,
        ..Location::new(Coordinate::new(52.5200, 13.4050))
    }
}

pub fn home() -> Region {
    Region::circular("home", Coordinate::new(52.5200, 13.4050), 150.0)
}

pub type Invoke = fn(&LocationClient, ManagerId);

fn entry(operation: &'static str, invoke: Invoke) -> (&'static str, Invoke) {
    (operation, invoke)
}

/// one call per operation, paired with the operation's label
pub fn invocations() -> Vec<(&'static str, Invoke)> {
    vec![
        entry(op::ACCURACY_AUTHORIZATION, |c, id| {
            c.accuracy_authorization(id);
        }),
        entry(op::AUTHORIZATION_STATUS, |c, _| {
            c.authorization_status();
        }),
        entry(op::DELEGATE, |c, id| {
            drop(c.delegate(id));
        }),
        entry(op::DISMISS_HEADING_CALIBRATION_DISPLAY, |c, id| {
            drop(c.dismiss_heading_calibration_display(id));
        }),
        entry(op::HEADING, |c, id| {
            c.heading(id);
        }),
        entry(op::HEADING_AVAILABLE, |c, _| {
            c.heading_available();
        }),
        entry(op::IS_RANGING_AVAILABLE, |c, _| {
            c.is_ranging_available();
        }),
        entry(op::LOCATION, |c, id| {
            c.location(id);
        }),
        entry(op::LOCATION_SERVICES_ENABLED, |c, _| {
            c.location_services_enabled();
        }),
        entry(op::MAXIMUM_REGION_MONITORING_DISTANCE, |c, id| {
            c.maximum_region_monitoring_distance(id);
        }),
        entry(op::MONITORED_REGIONS, |c, id| {
            c.monitored_regions(id);
        }),
        entry(op::REQUEST_ALWAYS_AUTHORIZATION, |c, id| {
            drop(c.request_always_authorization(id));
        }),
        entry(op::REQUEST_LOCATION, |c, id| {
            drop(c.request_location(id));
        }),
        entry(op::REQUEST_TEMPORARY_FULL_ACCURACY_AUTHORIZATION, |c, id| {
            drop(c.request_temporary_full_accuracy_authorization(id, "Navigation".into()));
        }),
        entry(op::REQUEST_WHEN_IN_USE_AUTHORIZATION, |c, id| {
            drop(c.request_when_in_use_authorization(id));
        }),
        entry(op::SET, |c, id| {
            drop(c.set(id, Properties::new()));
        }),
        entry(op::SIGNIFICANT_LOCATION_CHANGE_MONITORING_AVAILABLE, |c, _| {
            c.significant_location_change_monitoring_available();
        }),
        entry(op::START_MONITORING_FOR_REGION, |c, id| {
            drop(c.start_monitoring_for_region(id, home()));
        }),
        entry(op::START_MONITORING_SIGNIFICANT_LOCATION_CHANGES, |c, id| {
            drop(c.start_monitoring_significant_location_changes(id));
        }),
        entry(op::START_MONITORING_VISITS, |c, id| {
            drop(c.start_monitoring_visits(id));
        }),
        entry(op::START_UPDATING_HEADING, |c, id| {
            drop(c.start_updating_heading(id));
        }),
        entry(op::START_UPDATING_LOCATION, |c, id| {
            drop(c.start_updating_location(id));
        }),
        entry(op::STOP_MONITORING_FOR_REGION, |c, id| {
            drop(c.stop_monitoring_for_region(id, home()));
        }),
        entry(op::STOP_MONITORING_SIGNIFICANT_LOCATION_CHANGES, |c, id| {
            drop(c.stop_monitoring_significant_location_changes(id));
        }),
        entry(op::STOP_MONITORING_VISITS, |c, id| {
            drop(c.stop_monitoring_visits(id));
        }),
        entry(op::STOP_UPDATING_HEADING, |c, id| {
            drop(c.stop_updating_heading(id));
        }),
        entry(op::STOP_UPDATING_LOCATION, |c, id| {
            drop(c.stop_updating_location(id));
        }),
    ]
}

/// replace the slot labeled `operation` with a quiet implementation
pub fn override_slot(client: LocationClient, operation: &str) -> LocationClient {
    let done = || future::ready(()).boxed();
    match operation {
        op::ACCURACY_AUTHORIZATION => client.with_accuracy_authorization(|_| None),
        op::AUTHORIZATION_STATUS => client.with_authorization_status(Default::default),
        op::DELEGATE => client.with_delegate(|_| stream::empty().boxed()),
        op::DISMISS_HEADING_CALIBRATION_DISPLAY => {
            client.with_dismiss_heading_calibration_display(move |_| done())
        }
        op::HEADING => client.with_heading(|_| None),
        op::HEADING_AVAILABLE => client.with_heading_available(|| true),
        op::IS_RANGING_AVAILABLE => client.with_is_ranging_available(|| true),
        op::LOCATION => client.with_location(|_| Some(berlin())),
        op::LOCATION_SERVICES_ENABLED => client.with_location_services_enabled(|| true),
        op::MAXIMUM_REGION_MONITORING_DISTANCE => {
            client.with_maximum_region_monitoring_distance(|_| 1_000.0)
        }
        op::MONITORED_REGIONS => client.with_monitored_regions(|_| Default::default()),
        op::REQUEST_ALWAYS_AUTHORIZATION => {
            client.with_request_always_authorization(move |_| done())
        }
        op::REQUEST_LOCATION => client.with_request_location(move |_| done()),
        op::REQUEST_TEMPORARY_FULL_ACCURACY_AUTHORIZATION => client
            .with_request_temporary_full_accuracy_authorization(|_, _| {
                future::ready(Ok(())).boxed()
            }),
        op::REQUEST_WHEN_IN_USE_AUTHORIZATION => {
            client.with_request_when_in_use_authorization(move |_| done())
        }
        op::SET => client.with_set(move |_, _| done()),
        op::SIGNIFICANT_LOCATION_CHANGE_MONITORING_AVAILABLE => {
            client.with_significant_location_change_monitoring_available(|| true)
        }
        op::START_MONITORING_FOR_REGION => {
            client.with_start_monitoring_for_region(move |_, _| done())
        }
        op::START_MONITORING_SIGNIFICANT_LOCATION_CHANGES => {
            client.with_start_monitoring_significant_location_changes(move |_| done())
        }
        op::START_MONITORING_VISITS => client.with_start_monitoring_visits(move |_| done()),
        op::START_UPDATING_HEADING => client.with_start_updating_heading(move |_| done()),
        op::START_UPDATING_LOCATION => client.with_start_updating_location(move |_| done()),
        op::STOP_MONITORING_FOR_REGION => {
            client.with_stop_monitoring_for_region(move |_, _| done())
        }
        op::STOP_MONITORING_SIGNIFICANT_LOCATION_CHANGES => {
            client.with_stop_monitoring_significant_location_changes(move |_| done())
        }
        op::STOP_MONITORING_VISITS => client.with_stop_monitoring_visits(move |_| done()),
        op::STOP_UPDATING_HEADING => client.with_stop_updating_heading(move |_| done()),
        op::STOP_UPDATING_LOCATION => client.with_stop_updating_location(move |_| done()),
        other => panic!("unknown operation {}", other),
    }
}
