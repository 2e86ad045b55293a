//! Predefined catalog payloads.
//!
//! Fixtures mirror the shapes the catalog API returns from each endpoint so tests can
//! focus on behaviour rather than on building JSON by hand.

pub mod machine;
