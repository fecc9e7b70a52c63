pub use futures::{future::BoxFuture, stream::FuturesUnordered, FutureExt, StreamExt};
use tracing::info;

pub mod store;
pub mod worker;

pub use store::{Publisher, SnapshotReader, SnapshotStore};

/// Producers write the shared state, consumers read it.
///
/// The app lives as long as its consumers: a producer that returns early
/// leaves the last published state in place for them. Without consumers it
/// runs until every producer is done.
pub struct App<'f, S> {
    store: SnapshotStore<S>,
    producers: Vec<BoxFuture<'f, ()>>,
    consumers: Vec<BoxFuture<'f, ()>>,
}

pub struct AppBuilder<'f, S> {
    store: SnapshotStore<S>,
    producers: Vec<BoxFuture<'f, ()>>,
    consumers: Vec<BoxFuture<'f, ()>>,
}

impl<'f, S> App<'f, S>
where
    S: Send + Sync + 'f,
{
    pub fn build(initial_state: S) -> AppBuilder<'f, S> {
        AppBuilder {
            store: SnapshotStore::new(initial_state),
            producers: Vec::new(),
            consumers: Vec::new(),
        }
    }

    pub fn store(&self) -> &SnapshotStore<S> {
        &self.store
    }

    pub async fn run(self) {
        let mut producers: FuturesUnordered<_> = self.producers.into_iter().collect();
        let mut consumers: FuturesUnordered<_> = self.consumers.into_iter().collect();
        info!(
            producers = producers.len(),
            consumers = consumers.len(),
            "run futures"
        );

        if consumers.is_empty() {
            while producers.next().await.is_some() {}
            info!("all producers returned");
            return;
        }

        loop {
            tokio::select! {
                Some(()) = producers.next() => {
                    info!(remaining = producers.len(), "producer returned");
                }
                consumer = consumers.next() => match consumer {
                    Some(()) => info!(remaining = consumers.len(), "consumer returned"),
                    None => break,
                },
            }
        }
        info!("all consumers returned");
    }
}

impl<'f, S> AppBuilder<'f, S>
where
    S: Send + Sync + 'f,
{
    pub fn add_producer(mut self, worker: impl worker::ProducerWorker<'f, S> + 'f) -> Self {
        let publisher = self.store.publisher();
        self.producers.push(Box::new(worker).work(publisher));
        self
    }

    pub fn add_consumer(mut self, worker: impl worker::ConsumerWorker<'f, S> + 'f) -> Self {
        let reader = self.store.reader();
        self.consumers.push(Box::new(worker).work(reader));
        self
    }

    pub fn build(self) -> App<'f, S> {
        App {
            store: self.store,
            producers: self.producers,
            consumers: self.consumers,
        }
    }
}
