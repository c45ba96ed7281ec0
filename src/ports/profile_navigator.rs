//! ProfileNavigator port - the host's navigation system.

use crate::domain::actions::ActionCompletion;

/// Presents the profile view.
///
/// Calls are independent; presenting an already visible profile is not an
/// error. The completion, if any, runs once the view is displayed.
pub trait ProfileNavigator: Send + Sync {
    fn show_profile(&self, completion: Option<ActionCompletion>);
}
