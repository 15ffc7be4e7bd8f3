//! Normalization and validation of submitted DTOs.
//!
//! Validators run in the request extractors, before any database access, and either return
//! the normalized value or a [`ValidationError`] naming the offending field.

use crate::{
    model::{
        apartment::ApartmentFullDto, bill::BillDto, building::BuildingDto, owner::OwnerDto,
    },
    server::error::{
        validation::{RequestValidationError, ValidationError},
        Error,
    },
};

/// Longest accepted utility account
pub const UTILITY_ACCOUNT_MAX_LEN: usize = 100;

/// A DTO that is normalized and checked before it reaches a service
pub trait ValidateDto: Sized {
    /// Returns the normalized DTO, the default accepts it unchanged
    fn validate(self) -> Result<Self, Error> {
        Ok(self)
    }
}

impl<T: ValidateDto> ValidateDto for Vec<T> {
    fn validate(self) -> Result<Self, Error> {
        self.into_iter().map(ValidateDto::validate).collect()
    }
}

impl ValidateDto for OwnerDto {
    fn validate(self) -> Result<Self, Error> {
        Ok(Self {
            fullname: normalize_fullname(&self.fullname)?,
            passport_series: normalize_passport_series(&self.passport_series)?,
            passport_values: normalize_passport_values(&self.passport_values)?,
            phone: normalize_phone(&self.phone)?,
            ..self
        })
    }
}

impl ValidateDto for ApartmentFullDto {
    fn validate(self) -> Result<Self, Error> {
        if self.utility_account.chars().count() > UTILITY_ACCOUNT_MAX_LEN {
            return Err(RequestValidationError::single(
                &["body", "utility_account"],
                format!(
                    "String should have at most {} characters",
                    UTILITY_ACCOUNT_MAX_LEN
                ),
                "string_too_long",
            )
            .into());
        }

        Ok(self)
    }
}

impl ValidateDto for BillDto {}

impl ValidateDto for BuildingDto {}

/// Ids of `DELETE /many` bodies
impl ValidateDto for i32 {}

/// Collapses repeated spaces and title-cases every word of a Cyrillic full name
///
/// Rejects names containing a digit or any ASCII character, Latin letters included.
pub fn normalize_fullname(raw: &str) -> Result<String, ValidationError> {
    let fullname = raw
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    if fullname
        .chars()
        .filter(|c| *c != ' ')
        .any(|c| c.is_numeric() || c.is_ascii())
    {
        return Err(ValidationError::new(
            "fullname",
            raw,
            "full name contains a Latin letter or a digit",
        ));
    }

    Ok(fullname)
}

/// Keeps the digits of a phone number, which must be 11, and rewrites a leading `7` to `8`
pub fn normalize_phone(raw: &str) -> Result<String, ValidationError> {
    let digits = exact_digits(raw, 11)
        .ok_or_else(|| ValidationError::new("phone", raw, "phone number must contain 11 digits"))?;

    Ok(match digits.strip_prefix('7') {
        Some(rest) => format!("8{}", rest),
        None => digits,
    })
}

/// Keeps the digits of a passport series, which must be 4
pub fn normalize_passport_series(raw: &str) -> Result<String, ValidationError> {
    exact_digits(raw, 4).ok_or_else(|| {
        ValidationError::new("passport_series", raw, "passport series must contain 4 digits")
    })
}

/// Keeps the digits of a passport number, which must be 6
pub fn normalize_passport_values(raw: &str) -> Result<String, ValidationError> {
    exact_digits(raw, 6).ok_or_else(|| {
        ValidationError::new("passport_values", raw, "passport number must contain 6 digits")
    })
}

fn exact_digits(raw: &str, len: usize) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    (digits.len() == len).then_some(digits)
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest
fn title_case(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut previous_is_letter = false;

    for c in word.chars() {
        if previous_is_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    result
}
