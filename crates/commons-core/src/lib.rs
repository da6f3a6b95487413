//! # commons-core
//!
//! Core types for the commons site backend.
//!
//! This crate provides the types shared across the workspace:
//! - The raw `Story` envelope as delivered by the CMS
//! - Normalized presentation records (events, gallery images, news items,
//!   team members, the home-page announcement)
//! - Form submission payloads (contact, membership)
//! - JSON response envelopes for every HTTP endpoint
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`; the API
//! shapes here are the public contract of the service.

pub mod entities;
pub mod responses;
