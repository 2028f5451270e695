//! ownership-map-rs: normalizes hierarchical equity-ownership exports.
//!
//! The source is a semicolon-delimited export in which holders and their
//! sub-portfolios form an implicit tree (a "Tree Level" column). The
//! pipeline runs in five sequential stages: locale-tolerant numeric
//! normalization, row classification by tree depth, holder aggregation,
//! portfolio → holder linking, and dataset assembly. The assembled
//! [`OwnershipDataset`] serializes to JSON and can be written into a
//! PostgREST-style store through [`UpsertBuilder`].
//!
//! Start with [`TransformBuilder`] for the transform and
//! [`StoreClient`] + [`UpsertBuilder`] for persistence.

pub mod core;
pub mod dataset;
pub mod ingest;
pub mod pipeline;
pub mod store;

pub use crate::core::{
    Backoff, MatchStrategy, NameMatcher, OwnershipError, RetryConfig, StoreClient,
    StoreClientBuilder,
};
pub use crate::dataset::{
    DatasetSummary, Holder, HolderIdx, LinkOutcome, OwnershipDataset, Portfolio,
};
pub use crate::ingest::{PartitionedRows, RawRow, RowKind};
pub use crate::pipeline::TransformBuilder;
pub use crate::store::{UpsertBuilder, UpsertReport};
