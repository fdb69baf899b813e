use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::services::validation::FieldValidity;
use crate::view::TabGroup;

/// Form inputs the controller reads and resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    StartTime,
    EndTime,
    Companies,
    Students,
}

/// Output regions the controller and renderer write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    LoadingIndicator,
    ResultsSummary,
    TotalInterviews,
    TotalConflicts,
    SuccessRate,
    ScheduleDisplay,
    ConflictsDisplay,
    RawOutput,
}

/// Display abstraction standing in for the page DOM.
///
/// Everything the core logic needs from a display boils down to reading and
/// writing named fields and regions, toggling visibility, activating a tab
/// within a group, and raising a user-visible alert. Implementations own the
/// actual field values, the way the browser DOM owns input state.
pub trait RenderSurface: Send + Sync {
    fn field_value(&self, field: FormField) -> String;
    fn set_field_value(&self, field: FormField, value: &str);
    /// Move the advisory validity indicator on a field.
    fn set_field_validity(&self, field: FormField, validity: FieldValidity);
    /// Activate one tab and its panel, deactivating the group's others.
    fn activate_tab(&self, group: TabGroup, tab_id: &str, panel_id: &str);
    fn set_text(&self, region: Region, text: &str);
    fn set_html(&self, region: Region, html: &str);
    fn set_visible(&self, region: Region, visible: bool);
    /// Surface a failure message to the user.
    fn show_error(&self, message: &str);
}

/// Shows the loading indicator for as long as it is alive.
///
/// Dropping the guard hides the indicator again, so every exit path from the
/// submit flow hides it without per-branch bookkeeping.
pub struct LoadingGuard {
    surface: Arc<dyn RenderSurface>,
}

impl LoadingGuard {
    pub fn show(surface: Arc<dyn RenderSurface>) -> Self {
        surface.set_visible(Region::LoadingIndicator, true);
        Self { surface }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.surface.set_visible(Region::LoadingIndicator, false);
    }
}

/// Terminal-backed surface for the interactive binary.
///
/// Field values live in memory; region writes go straight to stdout. HTML is
/// printed as-is since this surface exists for driving the controller from a
/// shell rather than for presentation.
#[derive(Default)]
pub struct TerminalSurface {
    fields: Mutex<HashMap<FormField, String>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for TerminalSurface {
    fn field_value(&self, field: FormField) -> String {
        let fields = self.fields.lock().unwrap();
        fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_field_value(&self, field: FormField, value: &str) {
        let mut fields = self.fields.lock().unwrap();
        fields.insert(field, value.to_string());
    }

    fn set_field_validity(&self, field: FormField, validity: FieldValidity) {
        match validity {
            FieldValidity::Valid => println!("[{:?}] input looks valid", field),
            FieldValidity::Invalid => println!("[{:?}] input is not valid JSON", field),
        }
    }

    fn activate_tab(&self, group: TabGroup, tab_id: &str, panel_id: &str) {
        debug!(
            "Activating tab '{}' (panel '{}') in {:?} group",
            tab_id, panel_id, group
        );
        println!("== {:?} view: {} ==", group, tab_id);
    }

    fn set_text(&self, region: Region, text: &str) {
        println!("{:?}: {}", region, text);
    }

    fn set_html(&self, region: Region, html: &str) {
        println!("--- {:?} ---\n{}", region, html);
    }

    fn set_visible(&self, region: Region, visible: bool) {
        if region == Region::LoadingIndicator {
            if visible {
                println!("Generating schedule...");
            }
            return;
        }
        debug!("Region {:?} visible={}", region, visible);
    }

    fn show_error(&self, message: &str) {
        eprintln!("{}", message);
    }
}
