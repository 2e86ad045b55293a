//! Panorama Test Utils
//!
//! Provides shared testing utilities for the panorama bot. Tests exercise the bot against
//! JSON payloads shaped like the HackTheBox catalog API and against Serenity objects shaped
//! like Discord's REST responses, without touching the network.
//!
//! # Overview
//!
//! - **MachineJsonBuilder**: Fluent builder for machine objects with any subset of fields
//! - **fixture**: Ready-made machine payloads and response envelopes
//! - **serenity**: Factories for Serenity `GuildChannel` objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::MachineJsonBuilder;
//! use test_utils::fixture::machine::list_response;
//!
//! let body = list_response(vec![
//!     MachineJsonBuilder::new("Zipper").os("Linux").difficulty_text("Hard").build(),
//! ]);
//! ```

pub mod builder;
pub mod fixture;
pub mod serenity;
