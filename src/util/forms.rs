//! Form input validation shared by the create and edit pages.
//!
//! Validators trim and normalize raw input strings and produce either a
//! request payload or a user-facing message; they never panic on malformed
//! input.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::CreateChild;

/// Validate a group name: at least 2 characters after trimming.
pub fn validate_group_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.chars().count() < 2 {
        return Err("Group name must be at least 2 characters.");
    }
    Ok(name.to_owned())
}

/// Raw child form fields as typed into the page inputs.
#[derive(Clone, Debug, Default)]
pub struct ChildFormInput {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub birthday_date: String,
    pub group_id: String,
}

/// Validate the child form and build the request payload.
pub fn validate_child_form(input: &ChildFormInput) -> Result<CreateChild, &'static str> {
    let last_name = input.last_name.trim();
    if last_name.chars().count() < 2 {
        return Err("Last name is too short.");
    }
    let first_name = input.first_name.trim();
    if first_name.chars().count() < 2 {
        return Err("First name is too short.");
    }
    let patronymic = input.patronymic.trim();
    if patronymic.chars().count() < 2 {
        return Err("Patronymic is too short.");
    }
    let birthday_date = input.birthday_date.trim();
    if birthday_date.is_empty() {
        return Err("Pick a birthday date.");
    }
    let group_id = input
        .group_id
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or("Pick a group.")?;

    Ok(CreateChild {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        patronymic: patronymic.to_owned(),
        birthday_date: birthday_date.to_owned(),
        group_id,
    })
}
