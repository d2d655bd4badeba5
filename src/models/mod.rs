// src/models/mod.rs

pub mod result;
pub mod sentence;
pub mod user;

use validator::ValidationError;

/// Postgres TEXT and JSONB cannot hold NUL, so such input is rejected up front
/// instead of failing at the insert.
pub(crate) fn no_nul_bytes(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_byte")
            .with_message("text must not contain NUL characters".into()));
    }
    Ok(())
}

pub(crate) fn no_nul_bytes_in_list(values: &[String]) -> Result<(), ValidationError> {
    values.iter().try_for_each(|v| no_nul_bytes(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nul_is_rejected_anywhere_in_text() {
        assert!(no_nul_bytes("plain text").is_ok());
        assert!(no_nul_bytes("\0").is_err());
        assert!(no_nul_bytes("before\0after").is_err());
        assert!(no_nul_bytes_in_list(&["a".to_string(), "b\0".to_string()]).is_err());
        assert!(no_nul_bytes_in_list(&[]).is_ok());
    }
}
