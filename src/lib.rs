//! PCB design backend.
//!
//! Stores design documents (components, nets, board outline), runs a Design
//! Rule Check over them and offers beginner-oriented suggestions.
//!
//! - [`models`]: the design document and its wire format
//! - [`drc`]: the rule-check engine
//! - [`store`]: in-memory design storage
//! - [`service`]: design operations over the store
//! - [`assistant`]: suggestions, error explanations and workflow coaching
//! - [`api`]: the HTTP surface

pub mod api;
pub mod assistant;
pub mod check;
pub mod config;
pub mod drc;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
