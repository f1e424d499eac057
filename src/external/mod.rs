//! Outbound HTTP plumbing shared by external-service integrations.

pub mod client;
