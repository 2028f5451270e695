//! Core components shared by the pipeline and the store transport.
//!
//! This module contains the foundational building blocks of the crate:
//! - The primary [`OwnershipError`] type.
//! - The locale-tolerant numeric normalizer ([`numeric`]).
//! - The ranked name matcher used wherever portfolios are linked to
//!   holders ([`NameMatcher`]).
//! - The store client (`StoreClient`), its builder, and retry policy.

/// The store client (`StoreClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`OwnershipError`) for the crate.
pub mod error;
/// Ranked name matching for portfolio → holder resolution.
pub mod matcher;
/// Locale-tolerant parsing of the export's textual numbers.
pub mod numeric;

// convenient re-exports so most code can just `use crate::core::OwnershipError`
pub use client::{Backoff, RetryConfig, StoreClient, StoreClientBuilder};
pub use error::OwnershipError;
pub use matcher::{MatchStrategy, NameMatcher};
