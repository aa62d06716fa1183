/// Flatten `validator` errors into a single readable line
pub fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors.to_string().replace('\n', "; ")
}
