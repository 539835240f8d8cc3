//! geest-core: pipeline orchestration and Overpass data download logic
//! behind the `geest` binary.

pub mod api;
pub mod config;
pub mod error;
pub mod overpass;
pub mod pipeline;
