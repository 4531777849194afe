//! Cloud provider integrations

pub mod azure;
