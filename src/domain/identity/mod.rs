//! Identity module - the ABO identity record shared with feature modules.

mod abo_identity;

pub use abo_identity::{AmwayAboIdentity, IdentityDecodeError, NO_DATA};
