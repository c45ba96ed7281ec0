//! Actions module - the closed set of requests a component delegates to the host.

mod component_action;

pub use component_action::{
    AboIdentityCompletion, ActionCompletion, ActionKind, ComponentAction, RenewTokenCompletion,
};
