//! Answer rendering

pub mod xml;
