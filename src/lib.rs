//! Common Interactions - contracts between feature modules and the host app.
//!
//! Feature modules are built independently of the app that embeds them. This
//! crate defines what they may ask of that app and what it gives back:
//!
//! - analytics events a module wants recorded ([`domain::analytics`]),
//! - actions it delegates to the host ([`domain::actions`], [`ports::CreatorsAction`]),
//! - the signed-in ABO identity ([`domain::identity`]),
//! - access to the authenticated session ([`ports::AmwayAuthentication`]).
//!
//! The host implements the ports (reference implementations live in
//! [`adapters`]) and hands them to modules through an
//! [`application::ComponentContext`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
