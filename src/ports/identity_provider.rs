//! IdentityProvider port - source of the signed-in ABO identity.

use crate::domain::actions::AboIdentityCompletion;

/// Looks up the identity of the signed-in ABO.
///
/// Invokes `completion` exactly once, with
/// `Err(InteractionError::IdentityUnavailable)` when nobody is signed in.
pub trait IdentityProvider: Send + Sync {
    fn identity(&self, completion: AboIdentityCompletion);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_is_object_safe() {
        fn _assert_trait_object(_: &dyn IdentityProvider) {}
    }
}
