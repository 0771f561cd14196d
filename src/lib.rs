//! Async client core for a medical-commerce admin backend.
//!
//! Every backend operation flows through the same pipeline: a trigger on
//! the [`store::AdminStore`] marks that operation's slot loading, the
//! [`repository::AdminRepository`] wraps the transport call into a
//! `Loading` -> terminal emission sequence, and the slot ends up holding
//! the outcome until the consumer clears it. The transport itself is the
//! [`api::AdminApi`] trait, implemented over HTTP by
//! [`api::HttpAdminApi`].

pub mod api;
pub mod app_system;
pub mod config;
pub mod domain;
pub mod error;
pub mod progress;
pub mod repository;
pub mod store;

#[cfg(test)]
pub(crate) mod mock_api;
