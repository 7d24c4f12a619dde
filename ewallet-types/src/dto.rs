//! Data Transfer Objects (DTOs) for requests and responses.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::{RoleType, User, UserId, Wallet, WalletId};

static PHONE_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,3}[-\s.]?[0-9]{4,10}$")
        .expect("phone number pattern is valid")
});

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Usernames are stored trimmed, so the bounds apply to the trimmed value.
fn username_bounds(value: &str) -> Result<(), ValidationError> {
    if !(3..=20).contains(&value.trim().chars().count()) {
        return Err(ValidationError::new("length")
            .with_message("username must be 3-20 characters".into()));
    }
    Ok(())
}

/// Emails are stored trimmed, so format and bounds apply to the trimmed value.
fn trimmed_email(value: &str) -> Result<(), ValidationError> {
    let email = value.trim();
    if !(6..=50).contains(&email.chars().count()) {
        return Err(
            ValidationError::new("length").with_message("email must be 6-50 characters".into())
        );
    }
    if !email.validate_email() {
        return Err(
            ValidationError::new("email").with_message("email must be a valid address".into())
        );
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Signup DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        length(min = 3, max = 50, message = "first name must be 3-50 characters"),
        custom(function = "not_blank")
    )]
    pub first_name: String,

    #[validate(
        length(min = 3, max = 50, message = "last name must be 3-50 characters"),
        custom(function = "not_blank")
    )]
    pub last_name: String,

    #[validate(custom(function = "username_bounds"))]
    pub username: String,

    #[validate(custom(function = "trimmed_email"))]
    pub email: String,

    /// Plaintext password, hashed before it is stored
    #[validate(
        length(min = 6, max = 100, message = "password must be 6-100 characters"),
        custom(function = "not_blank")
    )]
    pub password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(max = 20, message = "phone number must be at most 20 characters"),
        regex(path = *PHONE_NUMBER_PATTERN, message = "phone number has an invalid format")
    )]
    pub phone_number: Option<String>,

    /// Requested role names, e.g. `USER`
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

/// Registered user as exposed to callers. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub roles: BTreeSet<RoleType>,
}

impl UserResponse {
    /// Builds the response for a persisted user. Returns `None` if the user has no id yet.
    pub fn from_persisted(user: User) -> Option<Self> {
        let id = user.id?;
        let roles = user.role_types();
        Some(Self {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            phone_number: user.phone_number,
            roles,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wallet DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only projection of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletResponse {
    pub id: WalletId,
    pub iban: String,
    pub name: String,
    pub balance: Decimal,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id,
            iban: wallet.iban,
            name: wallet.name,
            balance: wallet.balance,
        }
    }
}
