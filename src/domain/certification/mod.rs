//! Identity-certification domain — fetch and discard certification results.

pub mod client;
