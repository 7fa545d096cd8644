//! Platform data models

pub mod account;
pub mod deployment;
pub mod domain;
pub mod env;
pub mod log;
pub mod project;
