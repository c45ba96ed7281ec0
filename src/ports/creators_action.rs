//! CreatorsAction port - the host capability that performs delegated actions.
//!
//! A feature module receives an `Arc<dyn CreatorsAction>` at construction
//! and calls `action` instead of implementing navigation, analytics
//! delivery, token renewal or identity lookup itself.
//!
//! # Example
//!
//! ```ignore
//! struct AcademyScreen {
//!     creators: Arc<dyn CreatorsAction>,
//! }
//!
//! impl AcademyScreen {
//!     fn on_profile_tapped(&self) {
//!         self.creators.action(ComponentAction::show_profile());
//!     }
//! }
//! ```

use crate::domain::actions::ComponentAction;

/// Performs predefined actions on behalf of a feature module.
///
/// # Contract
///
/// Implementations must:
/// - Return without blocking on the action's outcome
/// - Invoke a supplied completion exactly once, from any thread
/// - Accept every variant without a completion (fire-and-forget)
/// - Treat `ShowProfile` as idempotent
pub trait CreatorsAction: Send + Sync {
    /// Delegate an action to the host.
    fn action(&self, kind: ComponentAction);
}
