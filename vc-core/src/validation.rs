//! Field-level validation guard rails.
//!
//! Pure functions: same (field, value) always yields the same result, no side
//! effects. Values are trimmed before checking.

use std::fmt;

/// Every editable scalar field of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Cnp,
    Email,
    Address,
    City,
    County,
    Phone,
    Company,
    Position,
    Income,
    Experience,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Cnp => "CNP",
            Field::Email => "Email",
            Field::Address => "Street address",
            Field::City => "City",
            Field::County => "County",
            Field::Phone => "Phone",
            Field::Company => "Company name",
            Field::Position => "Position / Occupation",
            Field::Income => "Monthly NET income (RON)",
            Field::Experience => "Experience (years)",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Field::FullName => "e.g. Popescu Andrei",
            Field::Cnp => "e.g. 5010101223344",
            Field::Email => "name@example.com",
            Field::Address => "e.g. Str. Libertatii 10",
            Field::City => "e.g. Cluj-Napoca",
            Field::County => "e.g. Cluj",
            Field::Phone => "e.g. +40721111111",
            Field::Company => "e.g. Tech Solutions SRL",
            Field::Position => "e.g. Software developer",
            Field::Income => "e.g. 7000",
            Field::Experience => "e.g. 3",
        }
    }

    /// Input length cap, where the field has a natural one.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Cnp => Some(13),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn validate_full_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Enter a valid full name.".to_string());
    }
    Ok(())
}

pub fn validate_cnp(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.len() != 13 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err("The CNP must contain exactly 13 digits.".to_string());
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    let err = || Err("Enter a valid email address.".to_string());

    if trimmed.chars().any(char::is_whitespace) {
        return err();
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return err();
    };
    if local.is_empty() || domain.contains('@') {
        return err();
    }
    // The domain needs an interior dot: "b.com" passes, "b." and ".com" do not.
    let has_interior_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1);
    if has_interior_dot {
        Ok(())
    } else {
        err()
    }
}

pub fn validate_non_empty(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("This field cannot be empty.".to_string());
    }
    Ok(())
}

pub fn validate_income(value: &str) -> Result<(), String> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
        _ => Err("Income must be a positive number.".to_string()),
    }
}

pub fn validate_experience(value: &str) -> Result<(), String> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
        _ => Err("Experience cannot be negative.".to_string()),
    }
}

/// Validate one field. `None` means the value is acceptable for its step; the
/// phone's international-prefix rule is deliberately not here, it belongs to
/// the final submission gate.
pub fn validate(field: Field, value: &str) -> Option<String> {
    let checked = match field {
        Field::FullName => validate_full_name(value),
        Field::Cnp => validate_cnp(value),
        Field::Email => validate_email(value),
        Field::Income => validate_income(value),
        Field::Experience => validate_experience(value),
        Field::Address
        | Field::City
        | Field::County
        | Field::Phone
        | Field::Company
        | Field::Position => validate_non_empty(value),
    };
    checked.err()
}
