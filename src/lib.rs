// Library root for the Autocall webhook relay

pub mod api;
pub mod config;
pub mod core;
pub mod database;
pub mod twiml;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::database::{MongoService, SupabaseService};
pub use crate::twiml::VoiceResponse;
