// =============================================================================
// MONGO SERVICE - Document store held at boot
// =============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use mongodb::{bson::doc, Client, Database};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::environment::EnvironmentVariables;

/// Name of the application database on the MongoDB deployment.
const DATABASE_NAME: &str = "autocall";

/// Document store client. No connection exists until `connect()` runs; the
/// caller drives it from a startup task so the HTTP server never waits on it.
#[derive(Clone)]
pub struct MongoService {
    /// Database handle, populated by the first successful `connect()`
    database: Arc<OnceCell<Database>>,
    /// Readiness flag surfaced through the `/ready` probe
    ready: Arc<AtomicBool>,
    /// Environment configuration
    config: Arc<EnvironmentVariables>,
}

impl MongoService {
    /// Creates a new MongoService instance.
    /// Note: nothing is connected until `connect()` is called.
    pub fn new(config: Arc<EnvironmentVariables>) -> Self {
        Self {
            database: Arc::new(OnceCell::new()),
            ready: Arc::new(AtomicBool::new(false)),
            config,
        }
    }

    /// Connects to the deployment, verifies it with a ping, and holds the
    /// application database handle for later use.
    pub async fn connect(&self) -> Result<()> {
        self.database
            .get_or_try_init(|| async {
                let client: Client = Client::with_uri_str(self.config.mongodb_uri.as_ref())
                    .await
                    .context("Failed to create MongoDB client")?;

                // Server selection only happens on the first operation, so
                // ping before declaring the connection established.
                client
                    .database("admin")
                    .run_command(doc! { "ping": 1 }, None)
                    .await
                    .context("Failed to ping MongoDB")?;

                Ok::<Database, anyhow::Error>(client.database(DATABASE_NAME))
            })
            .await?;

        self.ready.store(true, Ordering::Release);
        info!("Connected to MongoDB");
        Ok(())
    }

    /// True once the initial connection attempt has succeeded.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Returns the database handle.
    /// Errors if `connect()` has not completed successfully.
    pub fn database(&self) -> Result<&Database> {
        self.database
            .get()
            .ok_or_else(|| anyhow::anyhow!("MongoDB connection not established"))
    }

    /// Gracefully shuts down the service.
    pub async fn shutdown(&self) {
        if self.database.get().is_some() {
            info!("MongoDB handle released, driver connections close with it");
        } else {
            debug!("MongoDB connection was never established, nothing to close");
        }
    }
}
