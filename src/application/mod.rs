//! Application layer - the feature-module side of the contracts.
//!
//! Feature modules never implement the host ports; they receive them through
//! a [`ComponentContext`] built by the host.

mod component_context;

pub use component_context::ComponentContext;
