use crate::error::{StoreError, StoreResult};

/// Longest accepted article name, leaving room for the extension within
/// common filename limits.
pub const MAX_NAME_LEN: usize = 200;

/// Checks that `name` is safe to use as a file stem.
///
/// Accepts non-empty names of at most [`MAX_NAME_LEN`] characters drawn from
/// `[A-Za-z0-9_-]`.
pub fn validate_name(name: &str) -> StoreResult<()> {
    let valid = !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_names() {
        for name in ["intro", "hello-world", "post_2024", "A1"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_traversal_and_separators() {
        for name in ["", "..", "../etc/passwd", "a/b", "a\\b", "has space", "dot.rst", "ünï"] {
            assert!(
                matches!(validate_name(name), Err(StoreError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overlong_names() {
        let name = "a".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&name).is_err());
        assert!(validate_name(&name[..MAX_NAME_LEN]).is_ok());
    }
}
