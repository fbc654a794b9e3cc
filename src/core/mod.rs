//! Core module - frequency tables, aggregation and queries

mod aggregator;
pub(crate) mod query;
mod types;

pub(crate) use aggregator::Aggregator;
pub(crate) use types::{FrequencyTable, LogEntry};
