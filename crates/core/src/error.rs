use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoreError {
    /// Flatten field-level validation failures into one message.
    ///
    /// Fields are sorted so the message is stable across runs
    /// (`ValidationErrors` is backed by a `HashMap`).
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: failed '{}' check", e.code),
                })
            })
            .collect();
        parts.sort();
        CoreError::Validation(parts.join("; "))
    }
}
