//! Mappers between boundary DTOs and domain entities.

use std::collections::BTreeSet;

use ewallet_types::{
    AppError, DomainError, PasswordHasher, RoleResolver, RoleType, SignupRequest, User, Wallet,
    WalletResponse, WalletResponseMapper,
};

// ─────────────────────────────────────────────────────────────────────────────
// Text normalization
// ─────────────────────────────────────────────────────────────────────────────

/// Lower-cases the text, then title-cases the first letter of every
/// whitespace-delimited word. Whitespace is kept exactly as given.
pub fn capitalize_fully(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut word_start = true;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            word_start = false;
            match titlecase(ch) {
                Some(title) => out.push(title),
                None => out.extend(ch.to_uppercase()),
            }
        } else {
            out.push(ch);
        }
    }

    out
}

/// Lower-case letters whose titlecase form differs from their uppercase form.
fn titlecase(ch: char) -> Option<char> {
    match ch {
        'ǆ' => Some('ǅ'),
        'ǉ' => Some('ǈ'),
        'ǌ' => Some('ǋ'),
        'ǳ' => Some('ǲ'),
        // Greek with ypogegrammeni takes the prosgegrammeni form.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(ch as u32 + 8)
        }
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    }
}

/// Normalizes a login identifier (username or email): trimmed, then lower-cased.
pub fn normalize_identifier(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Parses requested role names into role types, failing on the first unknown name.
pub fn parse_role_types(names: &BTreeSet<String>) -> Result<BTreeSet<RoleType>, DomainError> {
    names.iter().map(|name| name.parse::<RoleType>()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Signup request → User
// ─────────────────────────────────────────────────────────────────────────────

/// Maps a validated signup request onto a new, not yet persisted, user.
///
/// Performs no IO itself; hashing and role lookup go through the injected ports.
pub struct SignupRequestMapper<H: PasswordHasher, R: RoleResolver> {
    hasher: H,
    roles: R,
}

impl<H: PasswordHasher, R: RoleResolver> SignupRequestMapper<H, R> {
    pub fn new(hasher: H, roles: R) -> Self {
        Self { hasher, roles }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn role_resolver(&self) -> &R {
        &self.roles
    }

    /// Builds the user entity. The id is left unset.
    ///
    /// # Errors
    /// - `InvalidRoleType` if any requested role name is not a known role type
    /// - hashing and role lookup failures are propagated
    pub async fn to_entity(&self, req: &SignupRequest) -> Result<User, AppError> {
        let role_types = parse_role_types(&req.roles)?;
        let password = self.hasher.hash(&req.password)?;
        let roles = self.roles.resolve_by_types(&role_types).await?;

        Ok(User {
            id: None,
            first_name: capitalize_fully(&req.first_name),
            last_name: capitalize_fully(&req.last_name),
            username: normalize_identifier(&req.username),
            email: normalize_identifier(&req.email),
            password,
            phone_number: req.phone_number.clone(),
            roles,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wallet → WalletResponse
// ─────────────────────────────────────────────────────────────────────────────

/// Field-for-field wallet projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletResponseDtoMapper;

impl WalletResponseMapper for WalletResponseDtoMapper {
    fn to_dto(&self, wallet: Wallet) -> WalletResponse {
        WalletResponse::from(wallet)
    }
}
