//! Stale-projection detection for navigation.
//!
//! A month navigation while a previous projection is in flight must let the
//! newer request supersede the older one. Each projection is computed for a
//! [`ViewKey`]; before a resolved projection is committed to visible state,
//! its key is compared against the currently desired key and stale
//! resolutions are discarded.

use std::sync::Mutex;

use classgrid_core::models::calendar::MonthView;
use classgrid_core::models::viewer::Viewer;

/// Identity of one requested month projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewKey {
    pub year: i32,
    pub month: u32,
    pub viewer: Viewer,
}

#[derive(Default)]
struct HolderState {
    desired: Option<ViewKey>,
    committed: Option<(ViewKey, MonthView)>,
}

/// Result holder for the currently visible month view.
///
/// `navigate` records what the caller wants to see; `commit_if_current`
/// accepts a resolved projection only if it still matches. The previous
/// view stays visible until a current projection lands, so navigation never
/// blanks the screen.
#[derive(Default)]
pub struct ProjectionHolder {
    state: Mutex<HolderState>,
}

impl ProjectionHolder {
    pub fn new() -> ProjectionHolder {
        ProjectionHolder::default()
    }

    /// Declares the view the caller now wants.
    pub fn navigate(&self, key: ViewKey) {
        let mut state = self.state.lock().expect("holder lock poisoned");
        state.desired = Some(key);
    }

    /// Commits a resolved projection unless it has been superseded.
    /// Returns whether the projection became visible.
    pub fn commit_if_current(&self, key: ViewKey, view: MonthView) -> bool {
        let mut state = self.state.lock().expect("holder lock poisoned");
        if state.desired != Some(key) {
            tracing::debug!(
                "discarding stale projection for {}-{:02}",
                key.year,
                key.month
            );
            return false;
        }
        state.committed = Some((key, view));
        true
    }

    /// The currently visible month view, if any projection has landed.
    pub fn current(&self) -> Option<MonthView> {
        let state = self.state.lock().expect("holder lock poisoned");
        state.committed.as_ref().map(|(_, view)| view.clone())
    }
}
