//! Data models for tours endpoint responses.

pub mod tours;

pub use tours::Tour;
