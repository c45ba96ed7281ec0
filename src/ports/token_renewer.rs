//! TokenRenewer port - the host's network layer for session renewal.

use crate::domain::actions::RenewTokenCompletion;

/// Performs one forced token renewal against the identity backend.
///
/// # Contract
///
/// - Invoke `completion` exactly once with the new token or the failure
/// - Do not retry; retry policy belongs to whoever calls the renewer
pub trait TokenRenewer: Send + Sync {
    fn renew(&self, completion: RenewTokenCompletion);
}
