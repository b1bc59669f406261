//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (HTTP clients and blockchain RPC). Each
//! sub-module groups adapters by infrastructure concern.
//!
//! Adapter categories:
//! - `api`: shared HTTP client and the chat-completion client
//! - `chain`: market contract access via alloy-rs
//! - `feeds`: spot price sources

pub mod api;
pub mod chain;
pub mod feeds;
