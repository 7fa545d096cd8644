//! Simulated deployment lifecycle

pub mod fsm;
pub mod simulator;
