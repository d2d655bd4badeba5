// src/utils/hash.rs

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::{error::AppError, models::user::StoredUser};

fn hashing_error(e: argon2::password_hash::Error) -> AppError {
    AppError::InternalServerError(format!("password hashing failed: {e}"))
}

/// Salted Argon2 PHC string for a new account's password.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(hashing_error)
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(password_hash).map_err(hashing_error)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Picks the first account, in the given order, whose stored hash accepts
/// `password`. Several accounts may share one email.
pub fn find_verified_user(
    password: &str,
    candidates: Vec<StoredUser>,
) -> Result<Option<StoredUser>, AppError> {
    for user in candidates {
        if verify_password(password, &user.password_hash)? {
            return Ok(Some(user));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64, name: &str, password: &str) -> StoredUser {
        StoredUser {
            id,
            name: name.into(),
            student_class: "7B".into(),
            email: "shared@school.test".into(),
            password_hash: hash_password(password).unwrap(),
        }
    }

    #[test]
    fn hash_verifies_only_the_same_password() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_different_salts() {
        let a = hash_password("pw").unwrap();
        let b = hash_password("pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-phc-string").is_err());
    }

    #[test]
    fn shared_email_resolves_to_the_account_whose_password_matches() {
        let candidates = vec![account(1, "Alice", "first"), account(2, "Alicia", "second")];

        let found = find_verified_user("second", candidates.clone()).unwrap();
        assert_eq!(found.map(|u| u.id), Some(2));

        assert!(find_verified_user("third", candidates).unwrap().is_none());
        assert!(find_verified_user("any", Vec::new()).unwrap().is_none());
    }

    #[test]
    fn earlier_account_wins_when_both_match() {
        let candidates = vec![account(1, "Alice", "same"), account(2, "Alicia", "same")];
        let found = find_verified_user("same", candidates).unwrap();
        assert_eq!(found.map(|u| u.name), Some("Alice".to_string()));
    }
}
