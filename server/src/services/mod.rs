//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own catalog access and seeding so route handlers can
//! stay focused on protocol translation.

pub mod seed;
pub mod signups;
