//! Core business logic for JWT operations.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer:
//! the algorithm registry with its signer implementations, and the
//! token codec that composes them.

pub mod algorithm;
pub mod codec;

pub use algorithm::Algorithm;
pub use codec::TokenCodec;
