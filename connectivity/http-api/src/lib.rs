use std::{future::Future, sync::Arc};

use app::{worker::ConsumerWorker, BoxFuture, FutureExt, SnapshotReader};
use market_feed::{symbol_exists, Record, Snapshot, SymbolCatalog};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

pub use error::QueryError;

pub mod error;
mod routes;

pub use routes::router;

/// Read side shared by all request handlers.
pub struct ApiState {
    reader: SnapshotReader<Snapshot>,
    catalog: Arc<dyn SymbolCatalog>,
}

impl ApiState {
    pub fn new(reader: SnapshotReader<Snapshot>, catalog: Arc<dyn SymbolCatalog>) -> Arc<Self> {
        Arc::new(Self { reader, catalog })
    }

    pub fn get_all(&self) -> Arc<Snapshot> {
        self.reader.current()
    }

    /// The symbol must be listed in the live catalog. A listed symbol without
    /// data yet gets an all-empty record.
    pub async fn get_by_symbol(&self, symbol_id: &str) -> Result<Record, QueryError> {
        match symbol_exists(self.catalog.as_ref(), symbol_id).await {
            Ok(true) => {}
            Ok(false) => return Err(QueryError::NotFound(symbol_id.to_string())),
            Err(e) => {
                warn!(symbol_id, %e, "Cannot check symbol against catalog");
                return Err(QueryError::CatalogUnavailable(e));
            }
        }

        let record = self.reader.current().get(symbol_id).cloned();
        if record.is_none() {
            debug!(symbol_id, "No record in current snapshot");
        }
        Ok(record.unwrap_or_default())
    }
}

pub struct QueryServer {
    listener: TcpListener,
    catalog: Arc<dyn SymbolCatalog>,
    shutdown: Option<BoxFuture<'static, ()>>,
}

impl QueryServer {
    pub fn new(listener: TcpListener, catalog: Arc<dyn SymbolCatalog>) -> Self {
        Self {
            listener,
            catalog,
            shutdown: None,
        }
    }

    pub fn with_graceful_shutdown(mut self, signal: impl Future<Output = ()> + Send + 'static) -> Self {
        self.shutdown = Some(signal.boxed());
        self
    }
}

impl<'f> ConsumerWorker<'f, Snapshot> for QueryServer {
    fn work(self: Box<Self>, reader: SnapshotReader<Snapshot>) -> BoxFuture<'f, ()> {
        async move {
            let QueryServer {
                listener,
                catalog,
                shutdown,
            } = *self;
            let app = router(ApiState::new(reader, catalog));

            match listener.local_addr() {
                Ok(addr) => info!("Query server listening on http://{addr}"),
                Err(e) => warn!(%e, "Query server listening on unknown address"),
            }

            let shutdown = shutdown.unwrap_or_else(|| std::future::pending().boxed());
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                error!(%e, "Query server stopped");
            }
            info!("Query server shut down");
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use app::SnapshotStore;
    use async_trait::async_trait;
    use market_feed::{Error, Symbol};

    use super::*;

    struct EmptyCatalog;

    #[async_trait]
    impl SymbolCatalog for EmptyCatalog {
        async fn fetch_symbols(&self) -> Result<Vec<Symbol>, Error> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn serves_until_shutdown_signal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let store = SnapshotStore::new(Snapshot::default());
        let server =
            QueryServer::new(listener, Arc::new(EmptyCatalog)).with_graceful_shutdown(async {});

        Box::new(server).work(store.reader()).await;
    }

    #[tokio::test]
    async fn lookup_against_empty_catalog() {
        let store = SnapshotStore::new(Snapshot::default());
        let state = ApiState::new(store.reader(), Arc::new(EmptyCatalog));

        let err = state.get_by_symbol("BTCUSD").await.unwrap_err();
        assert!(matches!(err, QueryError::NotFound(ref id) if id == "BTCUSD"));
        assert!(state.get_all().is_empty());
    }
}
