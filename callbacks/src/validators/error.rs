use validator::{ValidationError, ValidationErrors};

/// Flattens validation errors into a single line, with fields sorted so the
/// output is stable enough for API responses and assertions.
pub fn flatten_errors(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    let mut fields: Vec<String> = field_errors.keys().map(|k| k.to_string()).collect();
    fields.sort();

    let messages: Vec<String> = fields
        .into_iter()
        .map(|field| {
            let Some(items) = field_errors.get(field.as_str()) else {
                return format!("{}: invalid", field);
            };
            let msgs: Vec<String> = items.iter().map(error_to_string).collect();
            format!("{}: {}", field, msgs.join(", "))
        })
        .collect();

    messages.join(", ")
}

fn error_to_string(error: &ValidationError) -> String {
    match error.code.as_ref() {
        "callback_url" => "must be a valid callback URL or pattern".to_string(),
        "url" => "invalid url".to_string(),
        "length" => match (error.params.get("min"), error.params.get("max")) {
            (Some(min), Some(max)) => {
                format!("must be between {} and {} characters", min, max)
            }
            (Some(min), None) => format!("must be at least {} characters", min),
            (None, Some(max)) => format!("must be at most {} characters", max),
            _ => "invalid length".to_string(),
        },
        "required" => "required".to_string(),
        _ => "invalid".to_string(),
    }
}
