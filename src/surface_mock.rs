use mockall::mock;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::services::validation::FieldValidity;
use crate::surface::{FormField, Region, RenderSurface};
use crate::view::TabGroup;

// Define a mockall mock for tests that only assert on call expectations
mock! {
    pub Surface {}

    impl RenderSurface for Surface {
        fn field_value(&self, field: FormField) -> String;
        fn set_field_value(&self, field: FormField, value: &str);
        fn set_field_validity(&self, field: FormField, validity: FieldValidity);
        fn activate_tab(&self, group: TabGroup, tab_id: &str, panel_id: &str);
        fn set_text(&self, region: Region, text: &str);
        fn set_html(&self, region: Region, html: &str);
        fn set_visible(&self, region: Region, visible: bool);
        fn show_error(&self, message: &str);
    }
}

/// In-memory surface that records every write for later assertions.
///
/// Used where tests need to inspect what was rendered rather than just that
/// a call happened: field state, region text/html, visibility transitions,
/// tab activations, and alerts all land in Mutex-guarded logs.
#[derive(Default)]
pub struct RecordingSurface {
    fields: Mutex<HashMap<FormField, String>>,
    validity: Mutex<HashMap<FormField, FieldValidity>>,
    text: Mutex<HashMap<Region, String>>,
    html: Mutex<HashMap<Region, String>>,
    visible: Mutex<HashMap<Region, bool>>,
    visibility_log: Mutex<Vec<(Region, bool)>>,
    activated_tabs: Mutex<Vec<(TabGroup, String, String)>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the form the way a user filling the page would.
    pub fn with_form(start: &str, end: &str, companies: &str, students: &str) -> Self {
        let surface = Self::new();
        surface.set_field_value(FormField::StartTime, start);
        surface.set_field_value(FormField::EndTime, end);
        surface.set_field_value(FormField::Companies, companies);
        surface.set_field_value(FormField::Students, students);
        surface
    }

    pub fn validity_of(&self, field: FormField) -> Option<FieldValidity> {
        self.validity.lock().unwrap().get(&field).copied()
    }

    pub fn text_of(&self, region: Region) -> Option<String> {
        self.text.lock().unwrap().get(&region).cloned()
    }

    pub fn html_of(&self, region: Region) -> Option<String> {
        self.html.lock().unwrap().get(&region).cloned()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.lock().unwrap().get(&region).copied().unwrap_or(false)
    }

    /// Every visibility write to `region`, in order.
    pub fn visibility_events(&self, region: Region) -> Vec<bool> {
        self.visibility_log
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == region)
            .map(|(_, visible)| *visible)
            .collect()
    }

    pub fn activated_tabs(&self) -> Vec<(TabGroup, String, String)> {
        self.activated_tabs.lock().unwrap().clone()
    }

    pub fn last_activated_tab(&self, group: TabGroup) -> Option<String> {
        self.activated_tabs
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(g, _, _)| *g == group)
            .map(|(_, tab, _)| tab.clone())
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.errors.lock().unwrap().last().cloned()
    }
}

impl RenderSurface for RecordingSurface {
    fn field_value(&self, field: FormField) -> String {
        self.fields.lock().unwrap().get(&field).cloned().unwrap_or_default()
    }

    fn set_field_value(&self, field: FormField, value: &str) {
        self.fields.lock().unwrap().insert(field, value.to_string());
    }

    fn set_field_validity(&self, field: FormField, validity: FieldValidity) {
        self.validity.lock().unwrap().insert(field, validity);
    }

    fn activate_tab(&self, group: TabGroup, tab_id: &str, panel_id: &str) {
        self.activated_tabs
            .lock()
            .unwrap()
            .push((group, tab_id.to_string(), panel_id.to_string()));
    }

    fn set_text(&self, region: Region, text: &str) {
        self.text.lock().unwrap().insert(region, text.to_string());
    }

    fn set_html(&self, region: Region, html: &str) {
        self.html.lock().unwrap().insert(region, html.to_string());
    }

    fn set_visible(&self, region: Region, visible: bool) {
        self.visible.lock().unwrap().insert(region, visible);
        self.visibility_log.lock().unwrap().push((region, visible));
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
