//! Screen rendering.

pub mod tours;
