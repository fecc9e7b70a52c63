use futures::future::BoxFuture;

use crate::store::{Publisher, SnapshotReader};

/// Sole writer of the shared state.
pub trait ProducerWorker<'f, S> {
    fn work(self: Box<Self>, publisher: Publisher<S>) -> BoxFuture<'f, ()>;
}

/// Read-only user of the shared state.
pub trait ConsumerWorker<'f, S> {
    fn work(self: Box<Self>, reader: SnapshotReader<S>) -> BoxFuture<'f, ()>;
}
