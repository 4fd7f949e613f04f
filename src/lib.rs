//! Step-definition registry and matcher for plain-text BDD scenarios.
//!
//! `stepmatch` binds human-readable sentence templates such as
//! `the first number is {number:d}` to handler functions, resolves scenario
//! sentences against those templates, converts the captured values and runs
//! the handlers against a per-scenario [`context::ExecutionContext`].
//!
//! # Architecture
//!
//! Registration happens once, in an explicit initialisation phase
//! ([`steps::registry`]). The resulting [`registry::Registry`] is read-only
//! afterwards and shared by reference. Resolution consults the sentence's own
//! keyword first and falls back to wildcard `step` bindings only when
//! nothing else matches. Duplicate registrations are kept, never rejected.
//!
//! # Modules
//!
//! - [`pattern`]: Placeholder templates, compilation and matching
//! - [`registry`]: Keywords, handlers, bindings and resolution
//! - [`context`]: Typed per-scenario state shared by handlers
//! - [`steps`]: Built-in step definitions
//! - [`runner`]: Feature file parsing and scenario execution
//! - [`api`]: Command orchestration used by the CLI
//! - [`config`]: Configuration system with layered precedence (CLI > env > file > defaults)
//! - [`error`]: Semantic error types for the application

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod pattern;
pub mod registry;
pub mod runner;
pub mod steps;
