//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running the cart inside a
//! host application:
//!
//! - **Actor lifecycle**: starting, wiring, and shutting down the cart actor
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`CartSystem`] - spawns the cart actor and hands out its client
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use tracing::*;
