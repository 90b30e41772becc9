use validator::ValidationErrors;

/// Flattens `validator` output into a single human-readable detail string.
///
/// Field messages declared on the request structs are preferred; fields
/// without one fall back to `"{field} is invalid"`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("{field} is invalid")),
            }
        }
    }

    messages.join("; ")
}
