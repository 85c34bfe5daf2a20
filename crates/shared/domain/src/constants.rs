//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length in bytes
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Accepted email shape
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._]+@[a-zA-Z0-9.-]+?\.[a-zA-Z]{2,}$";

/// Shape of an Argon2id PHC string as produced by `Password::hash`
pub const PASSWORD_HASH_PATTERN: &str =
    r"^\$argon2id\$v=19\$m=\d+,t=\d+,p=\d+\$[A-Za-z0-9+/]{22}\$[A-Za-z0-9+/]{43}$";

// =============================================================================
// Hashing work factor
// =============================================================================

/// Argon2 memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;

/// Argon2 iteration count
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Argon2 degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;
