//! Tracker - location tracking feature
//!
//! Unidirectional feature built on any [`LocationManager`]:
//! - events go in through [`Tracker::update`]
//! - the model is mutated in place
//! - the returned effect streams delegate callbacks back in as
//!   [`Event::Delegate`]

use futures::stream::StreamExt;
use tracing::debug;

use crate::action::Action;
use crate::effect::{self, Effect, Subscriptions};
use crate::model::{AuthorizationStatus, Heading, Location, Properties, Visit};
use crate::{LocationManager, ManagerId};

/// Events into the tracker
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Lifecycle
    OnAppear,
    OnDisappear,

    // Requests
    RequestLocation,
    StartTracking(Properties),
    StopTracking,

    // Callbacks
    Delegate(Action),
}

/// Tracker state
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Model {
    pub authorization: AuthorizationStatus,
    pub is_requesting_location: bool,
    pub is_tracking: bool,
    pub location: Option<Location>,
    pub heading: Option<Heading>,
    pub visits: Vec<Visit>,
    pub error: Option<String>,
}

pub struct Tracker<M> {
    manager: M,
    id: ManagerId,
    subscriptions: Subscriptions,
}

impl<M: LocationManager> Tracker<M> {
    pub fn new(manager: M) -> Self {
        Self::with_subscriptions(manager, ManagerId::random(), Subscriptions::new())
    }

    /// tracker sharing `subscriptions` with other features
    pub fn with_subscriptions(manager: M, id: ManagerId, subscriptions: Subscriptions) -> Self {
        Self {
            manager,
            id,
            subscriptions,
        }
    }

    pub fn id(&self) -> ManagerId {
        self.id
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn update(&self, event: Event, model: &mut Model) -> Effect<Event> {
        debug!(id = %self.id, ?event, "tracker update");

        match event {
            Event::OnAppear => {
                let delegate = self
                    .subscriptions
                    .subscribe(self.id, self.manager.delegate(self.id))
                    .map(Event::Delegate)
                    .boxed();

                model.authorization = self.manager.authorization_status();
                match model.authorization {
                    AuthorizationStatus::NotDetermined => {
                        let request = self.manager.request_when_in_use_authorization(self.id);
                        effect::merge(vec![delegate, effect::fire_and_forget(request)])
                    }
                    AuthorizationStatus::Denied | AuthorizationStatus::Restricted => {
                        model.error = Some("location access denied".into());
                        delegate
                    }
                    AuthorizationStatus::AuthorizedAlways
                    | AuthorizationStatus::AuthorizedWhenInUse => delegate,
                }
            }

            Event::OnDisappear => {
                self.subscriptions.cancel(&self.id);
                effect::none()
            }

            Event::RequestLocation => {
                model.is_requesting_location = true;
                model.error = None;
                effect::fire_and_forget(self.manager.request_location(self.id))
            }

            Event::StartTracking(properties) => {
                model.is_tracking = true;
                let set = self.manager.set(self.id, properties);
                let start = self.manager.start_updating_location(self.id);
                effect::fire_and_forget(Box::pin(async move {
                    set.await;
                    start.await;
                }))
            }

            Event::StopTracking => {
                model.is_tracking = false;
                effect::fire_and_forget(self.manager.stop_updating_location(self.id))
            }

            Event::Delegate(action) => self.delegate(action, model),
        }
    }

    fn delegate(&self, action: Action, model: &mut Model) -> Effect<Event> {
        match action {
            Action::DidChangeAuthorization(status) => {
                let was_authorized = model.authorization.is_authorized();
                model.authorization = status;
                if status.is_authorized() && !was_authorized {
                    model.error = None;
                    model.is_requesting_location = true;
                    return effect::fire_and_forget(self.manager.request_location(self.id));
                }
                if matches!(status, AuthorizationStatus::Denied | AuthorizationStatus::Restricted) {
                    model.error = Some("location access denied".into());
                }
            }

            Action::DidUpdateLocations(locations) => {
                if let Some(latest) = locations.into_iter().last() {
                    model.location = Some(latest);
                }
                model.is_requesting_location = false;
            }

            Action::DidUpdateHeading(heading) => {
                model.heading = Some(heading);
            }

            Action::DidVisit(visit) => {
                model.visits.push(visit);
            }

            Action::DidFailWithError(error) => {
                model.is_requesting_location = false;
                model.error = Some(error.to_string());
            }

            other => {
                debug!(id = %self.id, action = ?other, "ignored delegate callback");
            }
        }

        effect::none()
    }
}
