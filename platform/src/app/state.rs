//! Application state management

use std::sync::Arc;

use tracing::info;

use crate::app::options::AppOptions;
use crate::deploy::simulator::Simulator;
use crate::store::Stores;

/// Main application state
pub struct AppState {
    /// Platform records
    pub stores: Arc<Stores>,

    /// Lifecycle simulator
    pub simulator: Arc<Simulator>,
}

impl AppState {
    /// Initialize application state
    pub fn init(options: &AppOptions) -> Self {
        info!("Initializing application state...");

        let stores = if options.seed_mock_data {
            Stores::seeded()
        } else {
            Stores::empty()
        };
        let stores = Arc::new(stores);

        info!(
            "Loaded {} projects, {} deployments, {} domains, {} log entries",
            stores.projects.len(),
            stores.deployments.len(),
            stores.domains.len(),
            stores.logs.len(),
        );

        let simulator = Arc::new(Simulator::new(stores.clone(), options.simulation.clone()));

        Self { stores, simulator }
    }
}
