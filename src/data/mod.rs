//! Outbound integrations.
//!
//! Each submodule wraps one external collaborator behind a trait so the command services
//! can be driven by in-memory fakes in tests:
//!
//! - `hackthebox` - HackTheBox machine catalog (`MachineCatalog`)
//! - `discord` - Discord guilds, channels and messages (`ChatPlatform`)
//! - `deploy` - Self-update via the deployment environment (`Redeployer`)

pub mod deploy;
pub mod discord;
pub mod hackthebox;

#[cfg(test)]
pub mod fake;
