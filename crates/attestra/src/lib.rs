//! Attestra - academic certificate verification demo.
//!
//! A Dioxus front end over [`attestra_core`]: four routed pages (home, upload
//! verification, certificate-ID lookup, admin dashboard) that each embed the
//! core submit/resolve workflow for their simulated operation. Every
//! long-running step is a fixed-delay deferred task; no documents are parsed
//! and nothing persists across sessions.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: timers via `gloo-timers`
//! - **Desktop**: timers via `tokio::time`
//!
//! Both platforms share the same component tree; only the sleep shim in
//! [`platform`] differs.

#![forbid(unsafe_code)]

pub mod components;
pub mod pages;
pub mod platform;
pub mod routes;
pub mod utils;
