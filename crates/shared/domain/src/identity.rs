//! Identity domain entity.

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainResult, IdentityError};
use crate::password::Password;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Check an email against the accepted shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Parse an identifier string, rejecting the nil UUID.
pub fn parse_identity_id(raw: &str) -> DomainResult<Uuid> {
    let id = Uuid::parse_str(raw).map_err(|e| IdentityError::invalid_id(e.to_string()))?;
    if id.is_nil() {
        return Err(IdentityError::invalid_id("nil identifier"));
    }
    Ok(id)
}

/// A registered identity: unique id, unique email and password hash.
///
/// Fields are private. Every constructor validates, so any `Identity` value
/// in the program satisfies the invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: Uuid,
    email: String,
    password: Password,
}

impl Identity {
    /// Build an identity from already-hashed parts.
    pub fn new(id: Uuid, email: String, password: Password) -> DomainResult<Self> {
        let identity = Self {
            id,
            email,
            password,
        };
        identity.validate()?;
        Ok(identity)
    }

    /// Rehydrate an identity read back from storage.
    pub fn from_stored(id: Uuid, email: String, password_hash: String) -> DomainResult<Self> {
        Self::new(id, email, Password::from_hash(password_hash))
    }

    /// Check the three invariants: non-nil id, email shape, hash shape.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_nil() {
            return Err(IdentityError::invalid_id("nil identifier"));
        }
        if !is_valid_email(&self.email) {
            return Err(IdentityError::InvalidEmail);
        }
        if !self.password.is_well_formed() {
            return Err(IdentityError::InvalidHash);
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        self.password.as_str()
    }

    /// Verify a plaintext password against the stored hash.
    pub fn verify_password(&self, plain_text: &str) -> bool {
        self.password.verify(plain_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::HashCost;

    fn hashed(plain: &str) -> Password {
        Password::new(plain, HashCost::new(8, 1, 1)).unwrap()
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "user@mail.com",
            "first.last@example.co.uk",
            "under_score@sub.domain.io",
            "a1@b2.cd",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "usermail.com",
            "user@mail",
            "user@mail.c",
            "user+tag@mail.com",
            "user@@mail.com",
            " user@mail.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_parse_identity_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_identity_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_identity_id("not-a-uuid"),
            Err(IdentityError::InvalidId(_))
        ));
        assert!(matches!(
            parse_identity_id(&Uuid::nil().to_string()),
            Err(IdentityError::InvalidId(_))
        ));
    }

    #[test]
    fn test_new_identity_valid() {
        let id = Uuid::new_v4();
        let identity = Identity::new(id, "user@mail.com".to_string(), hashed("12345")).unwrap();

        assert_eq!(identity.id(), id);
        assert_eq!(identity.email(), "user@mail.com");
        assert!(identity.verify_password("12345"));
        assert!(!identity.verify_password("54321"));
    }

    #[test]
    fn test_nil_id_rejected() {
        let result = Identity::new(Uuid::nil(), "user@mail.com".to_string(), hashed("12345"));
        assert!(matches!(result, Err(IdentityError::InvalidId(_))));
    }

    #[test]
    fn test_bad_email_rejected() {
        let result = Identity::new(Uuid::new_v4(), "user@mail".to_string(), hashed("12345"));
        assert_eq!(result.unwrap_err(), IdentityError::InvalidEmail);
    }

    #[test]
    fn test_raw_password_rejected_as_hash() {
        let result =
            Identity::from_stored(Uuid::new_v4(), "user@mail.com".to_string(), "12345".to_string());
        assert_eq!(result.unwrap_err(), IdentityError::InvalidHash);
    }

    #[test]
    fn test_from_stored_round_trip() {
        let original =
            Identity::new(Uuid::new_v4(), "user@mail.com".to_string(), hashed("12345")).unwrap();
        let restored = Identity::from_stored(
            original.id(),
            original.email().to_string(),
            original.password_hash().to_string(),
        )
        .unwrap();

        assert_eq!(restored, original);
        assert!(restored.verify_password("12345"));
    }

    #[test]
    fn test_debug_hides_hash() {
        let identity =
            Identity::new(Uuid::new_v4(), "user@mail.com".to_string(), hashed("12345")).unwrap();
        assert!(!format!("{:?}", identity).contains(identity.password_hash()));
    }
}
