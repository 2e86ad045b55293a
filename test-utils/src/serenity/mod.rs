//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return from the guild channel listing.
//!
//! # Available Factories
//!
//! - `channel::create_test_text_channel` - Text channel, optionally inside a category
//! - `channel::create_test_category` - Category channel

pub mod channel;

pub use channel::{create_test_category, create_test_text_channel};
