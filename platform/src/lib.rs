//! XistraCloud Platform Simulator
//!
//! In-memory state model behind the XistraCloud dashboard: projects,
//! deployments, custom domains, build logs and their simulated lifecycles.

pub mod app;
pub mod dashboard;
pub mod deploy;
pub mod errors;
pub mod filter;
pub mod logs;
pub mod models;
pub mod server;
pub mod settings;
pub mod store;
pub mod utils;
