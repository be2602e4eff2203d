use crate::server::error::validation::ValidationError;

/// Longest name accepted for schedules, shifts, people, and groups
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_USERNAME_LEN: usize = 150;

/// Rejects blank names and names longer than `max_len` characters, returns the trimmed name
pub fn check_name(errors: &mut ValidationError, field: &str, value: &str, max_len: usize) -> String {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        errors.push(field, "must not be empty");
    } else if trimmed.chars().count() > max_len {
        errors.push(field, format!("must be at most {} characters", max_len));
    }

    trimmed.to_string()
}

pub fn check_password(errors: &mut ValidationError, field: &str, value: &str) {
    if value.is_empty() {
        errors.push(field, "must not be empty");
    }
}
