//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod academic;
pub mod catalog;
pub mod llm_gateway;
pub mod progress;
pub mod provider;
pub mod site_info;
