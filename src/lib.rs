//! Relay - stateless chat relay gateway
//!
//! This library provides the core functionality for translating chat requests
//! into the wire contract of a single configured text-generation backend and
//! returning the reply merged into the conversation history.

pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod logging;
