//! Integration tests for the platform simulator

mod test_api;
mod test_simulator;
mod test_stores;
