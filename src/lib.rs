//! Regression image-quality metrics over batched tensors
//! and their per-iteration handlers.

#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod handler;
pub mod metric;
