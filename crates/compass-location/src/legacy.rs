//! migration shims for the old mock constructor
//!
//! only compiled into debug builds. nothing here builds a usable client:
//! [`mock`] always refuses, and `create`/`destroy` survive only so old call
//! sites keep compiling while they move to
//! [`Subscriptions`](crate::Subscriptions).

#![allow(deprecated)]

use std::ops::{Deref, DerefMut};

use compass_unimplemented::Reporter;
use futures::stream::{self, StreamExt};
use tracing::{debug, error};

use crate::action::Action;
use crate::effect::{Cancellation, EventStream};
use crate::error::{Error, Result};
use crate::{LocationClient, ManagerId};

/// per-operation overrides accepted by [`mock`]
///
/// each slot defaults to a stub that panics with its own operation name.
#[derive(Clone, Debug)]
pub struct MockOverrides(pub LocationClient);

impl Default for MockOverrides {
    fn default() -> Self {
        Self(LocationClient::failing(Reporter::panicking()))
    }
}

impl Deref for MockOverrides {
    type Target = LocationClient;

    fn deref(&self) -> &LocationClient {
        &self.0
    }
}

impl DerefMut for MockOverrides {
    fn deref_mut(&mut self) -> &mut LocationClient {
        &mut self.0
    }
}

/// old mock constructor, always fails
#[deprecated(
    since = "0.2.0",
    note = "use LocationClient::failing and override the slots the test needs"
)]
pub fn mock(overrides: MockOverrides) -> Result<LocationClient> {
    let configured = crate::operation::ALL.len() - overrides.unimplemented_operations().len();
    error!(configured, "LocationManager::mock called, migrate to LocationClient::failing");
    Err(Error::LegacyConstructorUnsupported {
        constructor: "LocationManager::mock",
    })
}

impl LocationClient {
    /// old subscribe entry point, yields an already finished stream
    #[deprecated(
        since = "0.2.0",
        note = "subscribe to `delegate` through Subscriptions::subscribe"
    )]
    pub fn create(&self, id: ManagerId) -> EventStream<Action> {
        debug!(%id, "legacy create");
        stream::empty().boxed()
    }

    /// old unsubscribe entry point, yields a cancellation for `id`
    #[deprecated(since = "0.2.0", note = "call Subscriptions::cancel")]
    pub fn destroy(&self, id: ManagerId) -> Cancellation {
        debug!(%id, "legacy destroy");
        Cancellation(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Subscriptions;
    use compass_unimplemented::Recorder;

    #[test]
    fn test_mock_refuses_defaults() {
        let result = mock(MockOverrides::default());
        assert!(matches!(
            result,
            Err(Error::LegacyConstructorUnsupported {
                constructor: "LocationManager::mock"
            })
        ));
    }

    #[test]
    fn test_mock_refuses_any_overrides() {
        let mut overrides = MockOverrides::default();
        overrides.heading = compass_unimplemented::Slot::new(|_| None);
        let overrides = MockOverrides(overrides.0.with_heading_available(|| true));

        assert!(mock(overrides).is_err());
    }

    #[test]
    #[should_panic(expected = "LocationManager::heading")]
    fn test_default_overrides_panic_with_own_name() {
        use crate::LocationManager;

        let overrides = MockOverrides::default();
        overrides.heading(ManagerId::random());
    }

    #[tokio::test]
    async fn test_create_is_finished() {
        let recorder = Recorder::new();
        let client = LocationClient::failing(recorder.reporter());

        let events: Vec<Action> = client.create(ManagerId::random()).collect().await;

        assert!(events.is_empty());
        assert!(recorder.is_empty());
    }

    #[tokio::test]
    async fn test_destroy_cancels_its_id_only() {
        let recorder = Recorder::new();
        let client = LocationClient::failing(recorder.reporter());
        let subscriptions = Subscriptions::new();
        let (a, b) = (ManagerId::random(), ManagerId::random());

        let mut events_a = subscriptions.subscribe::<Action>(a, stream::pending().boxed());
        let _events_b = subscriptions.subscribe::<Action>(b, stream::pending().boxed());

        let cancellation = client.destroy(a);
        assert_eq!(cancellation, Cancellation(a));
        assert!(cancellation.apply(&subscriptions));

        assert_eq!(events_a.next().await, None);
        assert!(subscriptions.is_active(&b));
        assert!(recorder.is_empty());
    }
}
