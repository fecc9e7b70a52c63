use std::{fmt, sync::Arc, time::Duration};

use app::{worker::ProducerWorker, BoxFuture, FutureExt, Publisher};
use market_feed::{resolve_symbols, QuoteSource, Snapshot, SymbolCatalog};
use tracing::{error, info};

use self::config::{ConnectFailurePolicy, RefreshConfig};

pub mod config;
mod implementation;

/// Sweeps the working set forever and publishes one snapshot per sweep.
pub struct RefreshLoop {
    catalog: Arc<dyn SymbolCatalog>,
    source: Arc<dyn QuoteSource>,
    allowlist: Vec<String>,
    min_sweep_interval: Duration,
    on_connect_failure: ConnectFailurePolicy,
}

impl fmt::Debug for RefreshLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshLoop")
            .field("allowlist", &self.allowlist)
            .field("min_sweep_interval", &self.min_sweep_interval)
            .field("on_connect_failure", &self.on_connect_failure)
            .finish()
    }
}

impl<'f> ProducerWorker<'f, Snapshot> for RefreshLoop {
    fn work(self: Box<Self>, publisher: Publisher<Snapshot>) -> BoxFuture<'f, ()> {
        async move {
            info!(?self, "Init refresh loop");
            let working_set = match resolve_symbols(self.catalog.as_ref(), &self.allowlist).await
            {
                Ok(working_set) => working_set,
                Err(e) => {
                    error!(%e, "Cannot resolve working set - refresh loop not started");
                    return;
                }
            };

            let e = self.run(&working_set, &publisher).await;
            match self.on_connect_failure {
                ConnectFailurePolicy::StopRefresh => {
                    error!(%e, "Feed unreachable - refresh stopped, last snapshot stays published");
                }
                ConnectFailurePolicy::ExitProcess => {
                    error!(%e, "Feed unreachable - exiting");
                    std::process::exit(1);
                }
            }
        }
        .boxed()
    }
}

impl RefreshLoop {
    pub fn new(
        config: RefreshConfig,
        allowlist: Vec<String>,
        catalog: Arc<dyn SymbolCatalog>,
        source: Arc<dyn QuoteSource>,
    ) -> Self {
        let RefreshConfig {
            min_sweep_interval,
            on_connect_failure,
        } = config;

        Self {
            catalog,
            source,
            allowlist,
            min_sweep_interval,
            on_connect_failure,
        }
    }
}
