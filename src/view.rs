use thiserror::Error;

use crate::surface::RenderSurface;

/// One of the two independent tab families on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabGroup {
    /// Primary navigation: schedule form vs. results.
    Primary,
    /// Sub-views inside the results panel.
    Results,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no tab '{tab_id}' registered in {group:?} group")]
pub struct UnknownTab {
    pub group: TabGroup,
    pub tab_id: String,
}

// A registered tab button and the content panel it controls
struct TabEntry {
    tab_id: &'static str,
    panel_id: &'static str,
}

struct TabSet {
    group: TabGroup,
    entries: Vec<TabEntry>,
    active: &'static str,
}

impl TabSet {
    fn switch(&mut self, surface: &dyn RenderSurface, tab_id: &str) -> Result<(), UnknownTab> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.tab_id == tab_id)
            .ok_or_else(|| UnknownTab {
                group: self.group,
                tab_id: tab_id.to_string(),
            })?;

        surface.activate_tab(self.group, entry.tab_id, entry.panel_id);
        self.active = entry.tab_id;
        Ok(())
    }
}

/// Active-tab bookkeeping for both tab groups.
///
/// Pure state plus a side-effecting switch; the tab-to-panel mapping is an
/// explicit registration table rather than a naming convention, so an
/// unregistered id is rejected before the surface is touched.
pub struct ViewState {
    primary: TabSet,
    results: TabSet,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            primary: TabSet {
                group: TabGroup::Primary,
                entries: vec![
                    TabEntry {
                        tab_id: "schedule",
                        panel_id: "schedule",
                    },
                    TabEntry {
                        tab_id: "results",
                        panel_id: "results",
                    },
                ],
                active: "schedule",
            },
            results: TabSet {
                group: TabGroup::Results,
                entries: vec![
                    TabEntry {
                        tab_id: "schedule",
                        panel_id: "schedule-results",
                    },
                    TabEntry {
                        tab_id: "conflicts",
                        panel_id: "conflicts-results",
                    },
                    TabEntry {
                        tab_id: "raw",
                        panel_id: "raw-results",
                    },
                ],
                active: "schedule",
            },
        }
    }

    /// Activate `tab_id` within `group`, deactivating its siblings.
    ///
    /// An unknown id is a caller error: the interaction fails, the stored
    /// state and the surface stay untouched.
    pub fn switch_tab(
        &mut self,
        surface: &dyn RenderSurface,
        group: TabGroup,
        tab_id: &str,
    ) -> Result<(), UnknownTab> {
        self.tab_set_mut(group).switch(surface, tab_id)
    }

    pub fn active_tab(&self, group: TabGroup) -> &str {
        match group {
            TabGroup::Primary => self.primary.active,
            TabGroup::Results => self.results.active,
        }
    }

    fn tab_set_mut(&mut self, group: TabGroup) -> &mut TabSet {
        match group {
            TabGroup::Primary => &mut self.primary,
            TabGroup::Results => &mut self.results,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
