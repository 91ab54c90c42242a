//! examscore-core: answer keys, scoring and the entry session.
//!
//! This crate holds the option model, the negative-marking scoring engine,
//! the answer-key importer and the state machine that collects marks one
//! question at a time.

pub mod config;
pub mod error;
pub mod importer;
pub mod model;
pub mod report;
pub mod scoring;
pub mod session;
