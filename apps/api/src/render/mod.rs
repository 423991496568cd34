//! Document generation feature: the compile-sink client and the HTTP
//! endpoints that drive the load → compose → compile pipeline.

pub mod client;
pub mod handlers;
