//! location services value types

use std::hash::{Hash, Hasher};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// distance in meters
pub type Distance = f64;

/// direction in degrees, 0 = north
pub type Direction = f64;

/// desired accuracy values accepted by [`Properties::desired_accuracy`]
pub mod accuracy {
    pub const BEST_FOR_NAVIGATION: f64 = -2.0;
    pub const BEST: f64 = -1.0;
    pub const NEAREST_TEN_METERS: f64 = 10.0;
    pub const HUNDRED_METERS: f64 = 100.0;
    pub const KILOMETER: f64 = 1_000.0;
    pub const THREE_KILOMETERS: f64 = 3_000.0;
    /// accuracy delivered under reduced accuracy authorization
    pub const REDUCED: f64 = 3_000.0;
}

/// distance filter disabling update throttling
pub const DISTANCE_FILTER_NONE: Distance = -1.0;

/// WGS84 coordinate in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// a location fix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coordinate: Coordinate,
    /// meters above sea level
    pub altitude: Distance,
    pub horizontal_accuracy: f64,
    pub vertical_accuracy: f64,
    pub course: Direction,
    pub course_accuracy: f64,
    /// meters per second
    pub speed: f64,
    pub speed_accuracy: f64,
    pub timestamp: SystemTime,
    pub floor: Option<i32>,
}

impl Location {
    /// fix at `coordinate` taken now, all measurements zero
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            altitude: 0.0,
            horizontal_accuracy: 0.0,
            vertical_accuracy: 0.0,
            course: 0.0,
            course_accuracy: 0.0,
            speed: 0.0,
            speed_accuracy: 0.0,
            timestamp: SystemTime::now(),
            floor: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub magnetic_heading: Direction,
    pub true_heading: Direction,
    pub heading_accuracy: Direction,
    /// raw geomagnetic field in microteslas
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub timestamp: SystemTime,
}

/// geographic or beacon region being monitored
///
/// equality and hashing use `identifier` and the notify flags only, matching
/// how the platform identifies monitored regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub identifier: String,
    pub notify_on_entry: bool,
    pub notify_on_exit: bool,
    pub kind: RegionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegionKind {
    Circular {
        center: Coordinate,
        radius: Distance,
    },
    Beacon {
        uuid: [u8; 16],
        major: Option<u16>,
        minor: Option<u16>,
    },
}

impl Region {
    pub fn circular(identifier: impl Into<String>, center: Coordinate, radius: Distance) -> Self {
        Self {
            identifier: identifier.into(),
            notify_on_entry: true,
            notify_on_exit: true,
            kind: RegionKind::Circular { center, radius },
        }
    }

    pub fn beacon(identifier: impl Into<String>, uuid: [u8; 16]) -> Self {
        Self {
            identifier: identifier.into(),
            notify_on_entry: true,
            notify_on_exit: true,
            kind: RegionKind::Beacon {
                uuid,
                major: None,
                minor: None,
            },
        }
    }

    /// whether `coordinate` lies inside a circular region (haversine)
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        match self.kind {
            RegionKind::Circular { center, radius } => distance(center, coordinate) <= radius,
            RegionKind::Beacon { .. } => false,
        }
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.notify_on_entry == other.notify_on_entry
            && self.notify_on_exit == other.notify_on_exit
    }
}

impl Eq for Region {}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.notify_on_entry.hash(state);
        self.notify_on_exit.hash(state);
    }
}

/// great-circle distance in meters
pub fn distance(a: Coordinate, b: Coordinate) -> Distance {
    const EARTH_RADIUS: f64 = 6_371_008.8;

    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS * h.sqrt().asin()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub arrival: SystemTime,
    /// `None` while the visit is still in progress
    pub departure: Option<SystemTime>,
    pub coordinate: Coordinate,
    pub horizontal_accuracy: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    #[default]
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedAlways,
    AuthorizedWhenInUse,
}

impl AuthorizationStatus {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::AuthorizedAlways | Self::AuthorizedWhenInUse)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccuracyAuthorization {
    FullAccuracy,
    ReducedAccuracy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionState {
    #[default]
    Unknown,
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    #[default]
    Other,
    AutomotiveNavigation,
    Fitness,
    OtherNavigation,
    Airborne,
}

/// reference orientation for heading updates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceOrientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    Unknown,
}

/// manager configuration applied through `set`
///
/// unset fields leave the manager's current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub activity_type: Option<ActivityType>,
    pub allows_background_location_updates: Option<bool>,
    pub desired_accuracy: Option<f64>,
    pub distance_filter: Option<Distance>,
    pub heading_filter: Option<Direction>,
    pub heading_orientation: Option<DeviceOrientation>,
    pub pauses_location_updates_automatically: Option<bool>,
    pub shows_background_location_indicator: Option<bool>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activity_type(mut self, activity_type: ActivityType) -> Self {
        self.activity_type = Some(activity_type);
        self
    }

    pub fn with_background_updates(mut self, allowed: bool) -> Self {
        self.allows_background_location_updates = Some(allowed);
        self
    }

    pub fn with_desired_accuracy(mut self, accuracy: f64) -> Self {
        self.desired_accuracy = Some(accuracy);
        self
    }

    pub fn with_distance_filter(mut self, filter: Distance) -> Self {
        self.distance_filter = Some(filter);
        self
    }

    pub fn with_heading_filter(mut self, filter: Direction) -> Self {
        self.heading_filter = Some(filter);
        self
    }

    pub fn with_heading_orientation(mut self, orientation: DeviceOrientation) -> Self {
        self.heading_orientation = Some(orientation);
        self
    }

    pub fn with_pauses_automatically(mut self, pauses: bool) -> Self {
        self.pauses_location_updates_automatically = Some(pauses);
        self
    }

    pub fn with_background_indicator(mut self, shows: bool) -> Self {
        self.shows_background_location_indicator = Some(shows);
        self
    }

    /// overlay `other` on top of `self`, `other` wins where set
    pub fn merge(self, other: Properties) -> Self {
        Self {
            activity_type: other.activity_type.or(self.activity_type),
            allows_background_location_updates: other
                .allows_background_location_updates
                .or(self.allows_background_location_updates),
            desired_accuracy: other.desired_accuracy.or(self.desired_accuracy),
            distance_filter: other.distance_filter.or(self.distance_filter),
            heading_filter: other.heading_filter.or(self.heading_filter),
            heading_orientation: other.heading_orientation.or(self.heading_orientation),
            pauses_location_updates_automatically: other
                .pauses_location_updates_automatically
                .or(self.pauses_location_updates_automatically),
            shows_background_location_indicator: other
                .shows_background_location_indicator
                .or(self.shows_background_location_indicator),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
