//! Approval-testing harness for HTTP API integration suites.
//!
//! A test builds a request through the [`http::HttpSend`] seam, asserts on
//! the response, and hands the JSON payload to a [`Verifier`], which compares
//! its canonical form against a committed baseline and maintains the
//! approved/received artifact pair for that test's [`TestIdentity`].

pub use crate::errors::SnapError;
pub use crate::identity::TestIdentity;
pub use crate::verifier::Verifier;

pub mod canon;
pub mod cli;
pub mod errors;
pub mod http;
pub mod identity;
pub mod scrub;
pub mod verifier;
