//! Projections from a raw scheduling result onto the display surface.
//!
//! Each projection tolerates any subset of the expected fields being absent,
//! null, or mis-shaped, and falls back to its empty/default state instead of
//! failing the whole display.

use serde_json::Value;
use tracing::warn;

use crate::models::{Interview, Statistics};
use crate::services::time_codec;
use crate::surface::{Region, RenderSurface};

/// Run all four projections over one result payload.
pub fn render_results(surface: &dyn RenderSurface, result: &Value) {
    render_summary(surface, result);
    render_schedule(surface, &interviews_of(result));
    render_conflicts(surface, &conflicts_of(result));
    render_raw(surface, result);
}

/// Write the three statistics fields and reveal the summary region.
pub fn render_summary(surface: &dyn RenderSurface, result: &Value) {
    let stats = Statistics::from_result(result);

    surface.set_visible(Region::ResultsSummary, true);
    surface.set_text(Region::TotalInterviews, &stats.total_interviews.to_string());
    surface.set_text(Region::TotalConflicts, &stats.total_conflicts.to_string());
    surface.set_text(Region::SuccessRate, &format!("{}%", stats.success_rate));
}

/// Render one table per student, grouped and sorted.
pub fn render_schedule(surface: &dyn RenderSurface, interviews: &[Interview]) {
    if interviews.is_empty() {
        surface.set_html(Region::ScheduleDisplay, "<p>No interviews scheduled.</p>");
        return;
    }

    let mut html = String::new();
    for (student_id, student_interviews) in group_by_student(interviews) {
        html.push_str(&format!(
            "<div class=\"student-schedule\">\n<h4>{} Schedule</h4>\n\
             <table class=\"schedule-table\">\n<thead>\n<tr>\
             <th>Company</th><th>Round</th><th>Start Time</th>\
             <th>End Time</th><th>Panel</th></tr>\n</thead>\n<tbody>\n",
            student_id
        ));

        for interview in &student_interviews {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                interview.company_name,
                interview.round,
                time_codec::decode(interview.start_time),
                time_codec::decode(interview.end_time),
                // 0-based panel id, 1-based for humans
                interview.panel_id + 1,
            ));
        }

        html.push_str("</tbody>\n</table>\n</div>\n");
    }

    surface.set_html(Region::ScheduleDisplay, &html);
}

/// Render the conflict list, or a positive notice when there is none.
///
/// An explicitly empty list is a real state (everything scheduled), distinct
/// from a missing one only in how it was produced; both render the notice.
pub fn render_conflicts(surface: &dyn RenderSurface, conflicts: &[String]) {
    if conflicts.is_empty() {
        surface.set_html(
            Region::ConflictsDisplay,
            "<p class=\"no-conflicts\">No conflicts detected! \
             All interviews scheduled successfully.</p>",
        );
        return;
    }

    let mut html = String::from("<h4>Scheduling Conflicts:</h4>\n");
    for conflict in conflicts {
        // Conflict messages are opaque, already human-readable strings
        html.push_str(&format!("<div class=\"conflict-item\">{}</div>\n", conflict));
    }

    surface.set_html(Region::ConflictsDisplay, &html);
}

/// Dump the full result as pretty-printed JSON for inspection.
pub fn render_raw(surface: &dyn RenderSurface, result: &Value) {
    let dump = serde_json::to_string_pretty(result)
        .unwrap_or_else(|_| result.to_string());
    surface.set_text(Region::RawOutput, &dump);
}

/// Extract the schedule entries from a result payload.
///
/// Entries that do not deserialize as an interview are skipped rather than
/// sinking the whole render.
pub fn interviews_of(result: &Value) -> Vec<Interview> {
    let entries = match result.get("schedule").and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(interview) => Some(interview),
            Err(err) => {
                warn!("Skipping malformed schedule entry: {}", err);
                None
            }
        })
        .collect()
}

/// Extract the conflict messages from a result payload.
pub fn conflicts_of(result: &Value) -> Vec<String> {
    let entries = match result.get("conflicts").and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| entry.as_str().map(str::to_string))
        .collect()
}

/// Group interviews by student id, sorted by start time within each group.
///
/// Groups appear in first-seen order of their student id; the sort within a
/// group is stable, so equal start times keep their original relative order.
pub fn group_by_student(interviews: &[Interview]) -> Vec<(String, Vec<Interview>)> {
    let mut groups: Vec<(String, Vec<Interview>)> = Vec::new();

    for interview in interviews {
        match groups.iter_mut().find(|(id, _)| *id == interview.student_id) {
            Some((_, group)) => group.push(interview.clone()),
            None => groups.push((interview.student_id.clone(), vec![interview.clone()])),
        }
    }

    for (_, group) in &mut groups {
        group.sort_by_key(|interview| interview.start_time);
    }

    groups
}
