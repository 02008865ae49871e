//! Notice publishing/subscription abstraction (mechanics only).
//!
//! Machines record notices in an in-memory outbox. Callers that want to react
//! to them (a CLI narrator, a test, a log shipper) drain the outbox and publish
//! the envelopes to a bus; every subscription receives a copy of every message.
//!
//! The bus is for distribution, not storage: a message published while nobody
//! is subscribed is gone.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to a message stream.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// for envelope in machine.take_events() {
///     bus.publish(envelope)?;
/// }
/// while let Ok(envelope) = subscription.try_recv() {
///     render(&envelope);
/// }
/// ```
///
/// Messages are received in the order they were published. Nothing here
/// blocks: callers poll after publishing. A subscription is meant to be
/// consumed by one thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Pub/sub abstraction with broadcast semantics.
///
/// `publish()` can fail; failures are surfaced to the caller, which still owns
/// the drained outbox contents and may retry.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
