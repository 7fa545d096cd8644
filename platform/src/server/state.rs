//! Server state

use std::sync::Arc;

use crate::deploy::simulator::Simulator;
use crate::store::Stores;

/// Server state shared across handlers
pub struct ServerState {
    pub stores: Arc<Stores>,
    pub simulator: Arc<Simulator>,
}

impl ServerState {
    pub fn new(stores: Arc<Stores>, simulator: Arc<Simulator>) -> Self {
        Self { stores, simulator }
    }
}
