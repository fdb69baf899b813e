use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::client::SchedulingClient;
use crate::error::SubmitError;
use crate::models::{ScheduleRequest, TimeSlotRange};
use crate::render;
use crate::services::validation;
use crate::surface::{FormField, LoadingGuard, RenderSurface};
use crate::view::{TabGroup, ViewState};

const DEFAULT_START_TIME: &str = "09:00";
const DEFAULT_END_TIME: &str = "17:00";

/// Orchestrates the submit cycle: collect inputs, validate, call the
/// scheduling service, and hand the outcome to the renderer and view state.
///
/// One instance owns all page-wide state (active tabs, last result) and is
/// created once at bootstrap. `generate_schedule` takes `&mut self`, so a
/// second submission cannot start while one is in flight.
pub struct ScheduleController {
    client: SchedulingClient,
    surface: Arc<dyn RenderSurface>,
    view: ViewState,
    last_result: Option<Value>,
}

impl ScheduleController {
    pub fn new(client: SchedulingClient, surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            client,
            surface,
            view: ViewState::new(),
            last_result: None,
        }
    }

    /// Run one full submission.
    ///
    /// The loading indicator is shown for the duration of the attempt and
    /// hidden on every exit path by the guard's drop. A failure is reported
    /// as a single alert and leaves the last rendered result untouched.
    pub async fn generate_schedule(&mut self) {
        let _loading = LoadingGuard::show(Arc::clone(&self.surface));

        match self.submit().await {
            Ok(result) => {
                info!("Schedule generation succeeded");
                render::render_results(self.surface.as_ref(), &result);
                self.last_result = Some(result);
                self.switch_tab(TabGroup::Primary, "results");
            }
            Err(err) => {
                error!("Error generating schedule: {}", err);
                self.surface.show_error(&format!("Error: {}", err));
            }
        }
    }

    /// Collect and validate the form, then issue exactly one request.
    async fn submit(&self) -> Result<Value, SubmitError> {
        let request = self.collect_request()?;
        debug!("Sending request: {:?}", request);
        self.client.generate_schedule(&request).await
    }

    /// Read the form fields into a request payload, rejecting malformed
    /// times, malformed structured text, and an empty or inverted window
    /// before any network activity.
    fn collect_request(&self) -> Result<ScheduleRequest, SubmitError> {
        let start_time = self.encode_time_field(FormField::StartTime)?;
        let end_time = self.encode_time_field(FormField::EndTime)?;

        if start_time >= end_time {
            return Err(SubmitError::Range);
        }

        let companies = self.parse_structured_field(FormField::Companies)?;
        let students = self.parse_structured_field(FormField::Students)?;

        Ok(ScheduleRequest {
            time_slot: TimeSlotRange {
                start_time,
                end_time,
            },
            companies,
            students,
        })
    }

    fn encode_time_field(&self, field: FormField) -> Result<i32, SubmitError> {
        crate::services::time_codec::encode(&self.surface.field_value(field))
    }

    // Authoritative parse at submit time, independent of the advisory check
    fn parse_structured_field(&self, field: FormField) -> Result<Value, SubmitError> {
        serde_json::from_str(&self.surface.field_value(field))
            .map_err(|err| SubmitError::Format(format!("{:?} field: {}", field, err)))
    }

    /// Clear the structured-text fields and reset the window to its default
    /// 9:00-17:00. Independent of the submission lifecycle.
    pub fn clear_form(&self) {
        self.surface.set_field_value(FormField::Companies, "");
        self.surface.set_field_value(FormField::Students, "");
        self.surface
            .set_field_value(FormField::StartTime, DEFAULT_START_TIME);
        self.surface
            .set_field_value(FormField::EndTime, DEFAULT_END_TIME);
        info!("Form cleared to defaults");
    }

    /// Switch the active tab in a group. An unregistered id is a caller
    /// error; the interaction is dropped with a log, the process carries on.
    pub fn switch_tab(&mut self, group: TabGroup, tab_id: &str) {
        if let Err(err) = self.view.switch_tab(self.surface.as_ref(), group, tab_id) {
            error!("Tab switch rejected: {}", err);
        }
    }

    /// Advisory validation for a structured-text field, wired to
    /// input-change events. Indicator only; never blocks submission.
    pub fn validate_field(&self, field: FormField) {
        validation::apply_advisory_validation(self.surface.as_ref(), field);
    }

    pub fn active_tab(&self, group: TabGroup) -> &str {
        self.view.active_tab(group)
    }

    pub fn last_result(&self) -> Option<&Value> {
        self.last_result.as_ref()
    }

    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }
}
