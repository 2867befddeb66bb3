// Application state passed explicitly into the server construction

use std::sync::Arc;
use anyhow::Result;
use tokio::task::JoinHandle;
use tracing::error;

use crate::config::environment::EnvironmentVariables;
use crate::database::{MongoService, SupabaseService};

// Store handles are plain fields here, not process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub mongo: MongoService,
    pub supabase: SupabaseService,
}

impl AppState {
    /// Builds the state from environment variables.
    pub fn from_env() -> Result<Self> {
        let environment: Arc<EnvironmentVariables> = Arc::new(EnvironmentVariables::load()?);

        // Create services
        let mongo: MongoService = MongoService::new(environment.clone());
        let supabase: SupabaseService = SupabaseService::new(environment.clone())?;

        Ok(Self {
            environment,
            mongo,
            supabase,
        })
    }

    /// Kicks off the store connection as an explicit startup task. The HTTP
    /// server never waits on it; the outcome lands in the readiness flag.
    pub fn spawn_store_init(&self) -> JoinHandle<()> {
        let mongo: MongoService = self.mongo.clone();
        tokio::spawn(async move {
            if let Err(e) = mongo.connect().await {
                error!("MongoDB connection failed: {e:#}");
            }
        })
    }

    /// Gracefully shutdown all store connections
    pub async fn shutdown(&self) {
        self.mongo.shutdown().await;
    }
}
