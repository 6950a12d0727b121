//! # IO Module
//!
//! Interface layer between HTTP clients and the domain services.
//!
//! Handlers translate JSON requests into domain commands, resolve the
//! caller's session, and turn domain results and errors into HTTP
//! responses. No business rules live here.

pub mod rest;

pub use rest::*;
