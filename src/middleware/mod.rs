//! HTTP middleware layered onto parts of the router.

pub mod metrics;
