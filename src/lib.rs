//! catalog-edit: CLI for maintaining the catalogue embedded in a static HTML page
//!
//! The catalogue page carries its data inline as two JavaScript array
//! literals — `const aiTools = [...]` and `const learningTemplates = [...]` —
//! plus a statistics widget with per-array counters. This crate edits that
//! data in place with regex text surgery rather than a structured parser.
//!
//! # Architecture
//!
//! - [`catalog`] — Record model (Tool, Template), validation, JS literal
//!   serialisation
//! - [`page`] — Array-literal location and mutation, counter updates
//! - [`store`] — Timestamped HTML backups and the append-only JSON journal
//! - [`config`] — Configuration loading and validation
//! - [`cli`] — Command dispatch and interactive prompting
//! - [`error`] — Configuration error types
//!
//! Every write to the page goes through backup-then-replace: the original
//! bytes are copied into a sibling `backups/` directory before the page is
//! overwritten, so a failed write never leaves partial state behind.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod page;
pub mod store;
