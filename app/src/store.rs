use std::sync::Arc;

use tokio::sync::watch;

/// Holds the latest published value behind an `Arc`.
///
/// Publishing swaps the whole `Arc` in one step, so a reader holds either the
/// previous value or the new one, never something in between. Readers only
/// take the watch read guard long enough to clone the `Arc`; they do not block
/// each other and a publish waits at most for those clones.
#[derive(Debug)]
pub struct SnapshotStore<S> {
    tx: Arc<watch::Sender<Arc<S>>>,
}

impl<S> Clone for SnapshotStore<S> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<S> SnapshotStore<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx: Arc::new(tx) }
    }

    pub fn publish(&self, value: S) {
        self.tx.send_replace(Arc::new(value));
    }

    pub fn current(&self) -> Arc<S> {
        Arc::clone(&self.tx.borrow())
    }

    pub fn publisher(&self) -> Publisher<S> {
        Publisher {
            tx: Arc::clone(&self.tx),
        }
    }

    pub fn reader(&self) -> SnapshotReader<S> {
        SnapshotReader {
            rx: self.tx.subscribe(),
        }
    }
}

/// Write handle given to producers.
#[derive(Debug)]
pub struct Publisher<S> {
    tx: Arc<watch::Sender<Arc<S>>>,
}

impl<S> Publisher<S> {
    pub fn publish(&self, value: S) {
        self.tx.send_replace(Arc::new(value));
    }
}

/// Read handle given to consumers. Cheap to clone, one per request is fine.
#[derive(Debug)]
pub struct SnapshotReader<S> {
    rx: watch::Receiver<Arc<S>>,
}

impl<S> Clone for SnapshotReader<S> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

impl<S> SnapshotReader<S> {
    pub fn current(&self) -> Arc<S> {
        Arc::clone(&self.rx.borrow())
    }

    /// Wait for the next publish. `None` once every writer is gone.
    pub async fn changed(&mut self) -> Option<Arc<S>> {
        self.rx.changed().await.ok()?;
        Some(Arc::clone(&self.rx.borrow_and_update()))
    }
}
