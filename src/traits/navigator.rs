//! Navigation seam for the movie list screen.

use crate::models::Movie;

/// Screen-transition collaborator.
///
/// The screen hands over the selected movie and is done; what "navigating to
/// detail" means (pushing a view, opening a pane) is the coordinator's business.
pub trait MovieNavigator: Send + Sync {
    /// Open the detail view for `movie`.
    fn navigate_to_detail(&self, movie: &Movie);
}
