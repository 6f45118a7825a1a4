//! HTTP client layer — `IamportHttp`, the token-authenticated request pipeline.

pub mod client;

pub use client::IamportHttp;
