//! Command business logic.
//!
//! Every command follows the same linear sequence: fetch from the catalog, format a
//! digest and, for `upcoming` only, create missing channels. Services hold borrowed
//! references to their collaborators and are constructed per invocation; the only state
//! that outlives an invocation is the resolved category in `CategoryCache`.
//!
//! - `category` - Process-lifetime cache of the designated channel category
//! - `sync` - `upcoming`: channel provisioning and upcoming digest
//! - `report` - `active` and `running` digests
//! - `update` - Allow-listed self-update

pub mod category;
pub mod report;
pub mod sync;
pub mod update;
