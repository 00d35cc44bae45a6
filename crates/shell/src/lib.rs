//! Meridian Shell library.
//!
//! This crate provides the shell service as a library, allowing it to be
//! tested and reused.
//!
//! The shell is the single authorization surface for the ERP suite: it
//! owns user classification, module access decisions, navigation pruning,
//! and workflow notification aggregation, backed by the upstream ERP REST
//! API. Clients render what the shell serves instead of re-deriving policy
//! locally.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod erp;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
