//! # kogaku-contracts
//!
//! Shared types, request/report shapes, and errors for the KOGAKU
//! out-of-pocket cost projection engine.
//!
//! All crates in the workspace import from here. No calculation lives in
//! this crate — only data definitions, name resolution, and error types.

pub mod catalog;
pub mod config;
pub mod cost;
pub mod error;
pub mod projection;
pub mod schedule;
