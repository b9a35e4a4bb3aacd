//! failing location client
//!
//! every slot reports its operation and returns the most inert value the
//! type allows: absence for optional queries, `false` for availability
//! checks, an empty region set, the largest representable monitoring
//! distance, no-op commands and a delegate that never speaks.

use std::collections::HashSet;

use compass_unimplemented::{command, fallible_command, query, stream, Reporter};

use crate::model::AuthorizationStatus;
use crate::operation as op;
use crate::LocationClient;

impl LocationClient {
    /// client whose every operation is unimplemented
    ///
    /// building it performs no I/O. each call into an operation that was not
    /// overridden reports one failure to `reporter`.
    pub fn failing(reporter: Reporter) -> Self {
        let r = &reporter;
        Self {
            accuracy_authorization: query(op::ACCURACY_AUTHORIZATION, r, None),
            authorization_status: query(
                op::AUTHORIZATION_STATUS,
                r,
                AuthorizationStatus::NotDetermined,
            ),
            delegate: stream(op::DELEGATE, r),
            dismiss_heading_calibration_display: command(
                op::DISMISS_HEADING_CALIBRATION_DISPLAY,
                r,
            ),
            heading: query(op::HEADING, r, None),
            heading_available: query(op::HEADING_AVAILABLE, r, false),
            is_ranging_available: query(op::IS_RANGING_AVAILABLE, r, false),
            location: query(op::LOCATION, r, None),
            location_services_enabled: query(op::LOCATION_SERVICES_ENABLED, r, false),
            maximum_region_monitoring_distance: query(
                op::MAXIMUM_REGION_MONITORING_DISTANCE,
                r,
                f64::MAX,
            ),
            monitored_regions: query(op::MONITORED_REGIONS, r, HashSet::new()),
            request_always_authorization: command(op::REQUEST_ALWAYS_AUTHORIZATION, r),
            request_location: command(op::REQUEST_LOCATION, r),
            request_temporary_full_accuracy_authorization: fallible_command(
                op::REQUEST_TEMPORARY_FULL_ACCURACY_AUTHORIZATION,
                r,
            ),
            request_when_in_use_authorization: command(op::REQUEST_WHEN_IN_USE_AUTHORIZATION, r),
            set: command(op::SET, r),
            significant_location_change_monitoring_available: query(
                op::SIGNIFICANT_LOCATION_CHANGE_MONITORING_AVAILABLE,
                r,
                false,
            ),
            start_monitoring_for_region: command(op::START_MONITORING_FOR_REGION, r),
            start_monitoring_significant_location_changes: command(
                op::START_MONITORING_SIGNIFICANT_LOCATION_CHANGES,
                r,
            ),
            start_monitoring_visits: command(op::START_MONITORING_VISITS, r),
            start_updating_heading: command(op::START_UPDATING_HEADING, r),
            start_updating_location: command(op::START_UPDATING_LOCATION, r),
            stop_monitoring_for_region: command(op::STOP_MONITORING_FOR_REGION, r),
            stop_monitoring_significant_location_changes: command(
                op::STOP_MONITORING_SIGNIFICANT_LOCATION_CHANGES,
                r,
            ),
            stop_monitoring_visits: command(op::STOP_MONITORING_VISITS, r),
            stop_updating_heading: command(op::STOP_UPDATING_HEADING, r),
            stop_updating_location: command(op::STOP_UPDATING_LOCATION, r),
        }
    }
}
