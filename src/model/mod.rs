//! Domain models.
//!
//! Typed representations of what the bot works with. Machines are normalized here from the
//! catalog's loosely-structured JSON; everything downstream works with these types only.

pub mod machine;
