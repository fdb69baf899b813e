use serde_json::Value;
use tracing::debug;

use crate::surface::{FormField, RenderSurface};

/// Outcome of the advisory structured-text check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValidity {
    Valid,
    Invalid,
}

/// Check whether a structured-text field parses as a JSON document.
pub fn validate_structured_text(text: &str) -> FieldValidity {
    match serde_json::from_str::<Value>(text) {
        Ok(_) => FieldValidity::Valid,
        Err(_) => FieldValidity::Invalid,
    }
}

/// Run the advisory check on a field and push the result to its indicator.
///
/// Wired to input-change events. This never blocks or fails the submission;
/// the controller re-validates authoritatively at submit time.
pub fn apply_advisory_validation(surface: &dyn RenderSurface, field: FormField) {
    let validity = validate_structured_text(&surface.field_value(field));
    debug!("Advisory validation for {:?}: {:?}", field, validity);
    surface.set_field_validity(field, validity);
}
