//! fully-qualified operation labels used in failure reports

pub const ACCURACY_AUTHORIZATION: &str = "LocationManager::accuracy_authorization";
pub const AUTHORIZATION_STATUS: &str = "LocationManager::authorization_status";
pub const DELEGATE: &str = "LocationManager::delegate";
pub const DISMISS_HEADING_CALIBRATION_DISPLAY: &str =
    "LocationManager::dismiss_heading_calibration_display";
pub const HEADING: &str = "LocationManager::heading";
pub const HEADING_AVAILABLE: &str = "LocationManager::heading_available";
pub const IS_RANGING_AVAILABLE: &str = "LocationManager::is_ranging_available";
pub const LOCATION: &str = "LocationManager::location";
pub const LOCATION_SERVICES_ENABLED: &str = "LocationManager::location_services_enabled";
pub const MAXIMUM_REGION_MONITORING_DISTANCE: &str =
    "LocationManager::maximum_region_monitoring_distance";
pub const MONITORED_REGIONS: &str = "LocationManager::monitored_regions";
pub const REQUEST_ALWAYS_AUTHORIZATION: &str = "LocationManager::request_always_authorization";
pub const REQUEST_LOCATION: &str = "LocationManager::request_location";
pub const REQUEST_TEMPORARY_FULL_ACCURACY_AUTHORIZATION: &str =
    "LocationManager::request_temporary_full_accuracy_authorization";
pub const REQUEST_WHEN_IN_USE_AUTHORIZATION: &str =
    "LocationManager::request_when_in_use_authorization";
pub const SET: &str = "LocationManager::set";
pub const SIGNIFICANT_LOCATION_CHANGE_MONITORING_AVAILABLE: &str =
    "LocationManager::significant_location_change_monitoring_available";
pub const START_MONITORING_FOR_REGION: &str = "LocationManager::start_monitoring_for_region";
pub const START_MONITORING_SIGNIFICANT_LOCATION_CHANGES: &str =
    "LocationManager::start_monitoring_significant_location_changes";
pub const START_MONITORING_VISITS: &str = "LocationManager::start_monitoring_visits";
pub const START_UPDATING_HEADING: &str = "LocationManager::start_updating_heading";
pub const START_UPDATING_LOCATION: &str = "LocationManager::start_updating_location";
pub const STOP_MONITORING_FOR_REGION: &str = "LocationManager::stop_monitoring_for_region";
pub const STOP_MONITORING_SIGNIFICANT_LOCATION_CHANGES: &str =
    "LocationManager::stop_monitoring_significant_location_changes";
pub const STOP_MONITORING_VISITS: &str = "LocationManager::stop_monitoring_visits";
pub const STOP_UPDATING_HEADING: &str = "LocationManager::stop_updating_heading";
pub const STOP_UPDATING_LOCATION: &str = "LocationManager::stop_updating_location";

/// every operation, in declaration order
pub const ALL: [&str; 27] = [
    ACCURACY_AUTHORIZATION,
    AUTHORIZATION_STATUS,
    DELEGATE,
    DISMISS_HEADING_CALIBRATION_DISPLAY,
    HEADING,
    HEADING_AVAILABLE,
    IS_RANGING_AVAILABLE,
    LOCATION,
    LOCATION_SERVICES_ENABLED,
    MAXIMUM_REGION_MONITORING_DISTANCE,
    MONITORED_REGIONS,
    REQUEST_ALWAYS_AUTHORIZATION,
    REQUEST_LOCATION,
    REQUEST_TEMPORARY_FULL_ACCURACY_AUTHORIZATION,
    REQUEST_WHEN_IN_USE_AUTHORIZATION,
    SET,
    SIGNIFICANT_LOCATION_CHANGE_MONITORING_AVAILABLE,
    START_MONITORING_FOR_REGION,
    START_MONITORING_SIGNIFICANT_LOCATION_CHANGES,
    START_MONITORING_VISITS,
    START_UPDATING_HEADING,
    START_UPDATING_LOCATION,
    STOP_MONITORING_FOR_REGION,
    STOP_MONITORING_SIGNIFICANT_LOCATION_CHANGES,
    STOP_MONITORING_VISITS,
    STOP_UPDATING_HEADING,
    STOP_UPDATING_LOCATION,
];
