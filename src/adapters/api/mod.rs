//! HTTP API Adapters
//!
//! Sub-modules:
//! - `client`: shared reqwest client construction and status handling
//! - `completions`: OpenAI-compatible chat-completion client
//! - `types`: chat-completion request/response types

pub mod client;
pub mod completions;
pub mod types;
