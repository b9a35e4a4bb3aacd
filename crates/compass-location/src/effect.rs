//! deferred work returned by the capability client
//!
//! commands and event streams are values: nothing happens until the caller's
//! runtime polls them. [`Subscriptions`] ties each delegate stream to the
//! [`ManagerId`] that opened it, so cancelling one id never touches another.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt};
use futures::ready;
use futures::stream::{self, AbortHandle, Abortable, BoxStream, Stream, StreamExt};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::LocationError;
use crate::ManagerId;

/// fire-and-forget work, completes at most once and never fails
pub type Command = BoxFuture<'static, ()>;

/// command whose platform call can fail
pub type FallibleCommand = BoxFuture<'static, Result<(), LocationError>>;

/// unbounded sequence of callbacks for one manager id
pub type EventStream<T> = BoxStream<'static, T>;

/// events fed back into a feature's `update`
pub type Effect<E> = BoxStream<'static, E>;

/// effect producing nothing
pub fn none<E: Send + 'static>() -> Effect<E> {
    stream::empty().boxed()
}

/// run `command` and emit no events
pub fn fire_and_forget<E: Send + 'static>(command: Command) -> Effect<E> {
    command
        .into_stream()
        .filter_map(|()| future::ready(None))
        .boxed()
}

/// interleave several effects
pub fn merge<E: Send + 'static>(effects: Vec<Effect<E>>) -> Effect<E> {
    stream::select_all(effects).boxed()
}

struct Entry {
    generation: u64,
    handle: AbortHandle,
}

#[derive(Default)]
struct Registry {
    entries: HashMap<ManagerId, Entry>,
    next_generation: u64,
}

/// live delegate subscriptions keyed by manager id
///
/// an entry lives as long as its stream: cancelling, finishing or dropping
/// the stream returned by [`Subscriptions::subscribe`] removes it.
#[derive(Clone, Default)]
pub struct Subscriptions {
    registry: Arc<Mutex<Registry>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// bind `events` to `id`
    ///
    /// the returned stream ends once `id` is cancelled. subscribing an id
    /// again replaces its previous subscription.
    pub fn subscribe<T: Send + 'static>(
        &self,
        id: ManagerId,
        events: EventStream<T>,
    ) -> EventStream<T> {
        let (handle, registration) = AbortHandle::new_pair();
        let mut registry = self.registry.lock();
        let generation = registry.next_generation;
        registry.next_generation += 1;
        let previous = registry.entries.insert(id, Entry { generation, handle });
        drop(registry);

        match previous {
            Some(previous) => {
                debug!(%id, "replacing delegate subscription");
                previous.handle.abort();
            }
            None => debug!(%id, "delegate subscribed"),
        }

        Subscribed {
            events: Abortable::new(events, registration),
            release: Some(Release {
                registry: Arc::downgrade(&self.registry),
                id,
                generation,
            }),
        }
        .boxed()
    }

    /// end the subscription for `id`, returns whether one was active
    pub fn cancel(&self, id: &ManagerId) -> bool {
        let removed = self.registry.lock().entries.remove(id);
        match removed {
            Some(entry) => {
                debug!(%id, "delegate cancelled");
                entry.handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&self) {
        let entries: Vec<_> = self.registry.lock().entries.drain().collect();
        for (id, entry) in entries {
            debug!(%id, "delegate cancelled");
            entry.handle.abort();
        }
    }

    pub fn is_active(&self, id: &ManagerId) -> bool {
        self.registry.lock().entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.registry.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.registry.lock().entries.keys())
            .finish()
    }
}

/// removes its registry entry on drop, unless a newer subscription took the id
struct Release {
    registry: Weak<Mutex<Registry>>,
    id: ManagerId,
    generation: u64,
}

impl Drop for Release {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.lock();
        let current = registry.entries.get(&self.id).map(|entry| entry.generation);
        if current == Some(self.generation) {
            registry.entries.remove(&self.id);
            debug!(id = %self.id, "delegate subscription ended");
        }
    }
}

/// delegate stream bound to a registry entry
struct Subscribed<T> {
    events: Abortable<EventStream<T>>,
    release: Option<Release>,
}

impl<T> Stream for Subscribed<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let item = ready!(self.events.poll_next_unpin(cx));
        if item.is_none() {
            self.release.take();
        }
        Poll::Ready(item)
    }
}

/// request to end the delegate subscription of one manager id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a cancellation does nothing until applied"]
pub struct Cancellation(pub ManagerId);

impl Cancellation {
    pub fn id(&self) -> ManagerId {
        self.0
    }

    /// cancel on `subscriptions`, returns whether a subscription ended
    pub fn apply(self, subscriptions: &Subscriptions) -> bool {
        subscriptions.cancel(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;

    #[tokio::test]
    async fn test_cancel_ends_only_that_stream() {
        let subscriptions = Subscriptions::new();
        let (a, b) = (ManagerId::random(), ManagerId::random());
        let (tx_a, rx_a) = mpsc::unbounded::<u32>();
        let (tx_b, rx_b) = mpsc::unbounded::<u32>();

        let mut events_a = subscriptions.subscribe(a, rx_a.boxed());
        let mut events_b = subscriptions.subscribe(b, rx_b.boxed());
        assert_eq!(subscriptions.len(), 2);

        assert!(subscriptions.cancel(&a));
        assert!(!subscriptions.cancel(&a));
        assert_eq!(events_a.next().await, None);

        tx_b.unbounded_send(7).unwrap();
        assert_eq!(events_b.next().await, Some(7));
        assert!(subscriptions.is_active(&b));
        drop(tx_a);
    }

    #[tokio::test]
    async fn test_resubscribe_replaces_previous() {
        let subscriptions = Subscriptions::new();
        let id = ManagerId::random();

        let mut first = subscriptions.subscribe(id, stream::pending::<u8>().boxed());
        let mut second = subscriptions.subscribe(id, stream::iter([1u8, 2]).boxed());

        assert_eq!(first.next().await, None);
        assert_eq!(second.next().await, Some(1));
        assert_eq!(subscriptions.len(), 1);
    }

    #[tokio::test]
    async fn test_finished_stream_leaves_registry() {
        let subscriptions = Subscriptions::new();
        let id = ManagerId::random();

        let mut events = subscriptions.subscribe(id, stream::iter([1u8]).boxed());
        assert!(subscriptions.is_active(&id));

        assert_eq!(events.next().await, Some(1));
        assert_eq!(events.next().await, None);
        assert!(!subscriptions.is_active(&id));
        assert!(subscriptions.is_empty());
    }

    #[test]
    fn test_dropped_streams_leave_registry() {
        let subscriptions = Subscriptions::new();

        for _ in 0..1000 {
            let events =
                subscriptions.subscribe(ManagerId::random(), stream::pending::<()>().boxed());
            drop(events);
        }

        assert!(subscriptions.is_empty());
    }

    #[test]
    fn test_replaced_stream_keeps_successor() {
        let subscriptions = Subscriptions::new();
        let id = ManagerId::random();

        let first = subscriptions.subscribe(id, stream::pending::<()>().boxed());
        let second = subscriptions.subscribe(id, stream::pending::<()>().boxed());
        drop(first);
        assert!(subscriptions.is_active(&id));

        drop(second);
        assert!(!subscriptions.is_active(&id));
    }

    #[test]
    fn test_stream_outlives_registry() {
        let subscriptions = Subscriptions::new();
        let events = subscriptions.subscribe(ManagerId::random(), stream::pending::<()>().boxed());
        drop(subscriptions);
        drop(events);
    }

    #[tokio::test]
    async fn test_cancel_all() {
        let subscriptions = Subscriptions::new();
        let mut streams: Vec<_> = (0..3)
            .map(|_| subscriptions.subscribe(ManagerId::random(), stream::pending::<()>().boxed()))
            .collect();

        subscriptions.cancel_all();

        assert!(subscriptions.is_empty());
        for events in streams.iter_mut() {
            assert_eq!(events.next().await, None);
        }
    }

    #[tokio::test]
    async fn test_cancellation_signal() {
        let subscriptions = Subscriptions::new();
        let id = ManagerId::random();
        let mut events = subscriptions.subscribe(id, stream::pending::<()>().boxed());

        let cancellation = Cancellation(id);
        assert_eq!(cancellation.id(), id);
        assert!(cancellation.apply(&subscriptions));
        assert_eq!(events.next().await, None);
    }

    #[tokio::test]
    async fn test_effect_helpers() {
        let quiet: Vec<u8> = fire_and_forget::<u8>(future::ready(()).boxed())
            .collect()
            .await;
        assert!(quiet.is_empty());

        let mut merged: Vec<u8> = merge(vec![
            stream::iter([1u8]).boxed(),
            none(),
            stream::iter([2u8]).boxed(),
        ])
        .collect()
        .await;
        merged.sort();
        assert_eq!(merged, vec![1, 2]);
    }
}
