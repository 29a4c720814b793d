pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod service;
pub mod types;

pub use config::Config;
pub use error::RegistryError;
pub use router::{RegistryState, registry_router};
pub use service::SwimmerService;

use api::WikiApi;
use db::SwimmerStorage;

/// Open the store and build the service graph from configuration.
pub async fn build_state(cfg: &Config) -> Result<RegistryState, RegistryError> {
    let storage = SwimmerStorage::connect(&cfg.database_url).await?;
    let wiki = WikiApi::new(cfg)?;
    Ok(RegistryState::new(SwimmerService::new(storage, wiki)))
}
