#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

mod common;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod reader;
#[cfg(test)]
mod test;
pub mod writer;

pub use common::{Dimension, Endianness, GeometryType, WkbGeometryCode};
