//! Client-side access gate.
//!
//! NOT a security boundary: the credential lives in the shipped wasm and the
//! flag in session storage, both visible to any client. It only keeps the
//! assistant pages from rendering without the shared password.

pub mod guard;
pub mod storage;

/// The shared access password checked client-side on the login page.
pub const ACCESS_PASSWORD: &str = "your-super-secret-password";

/// Compare an entered password against the hardcoded credential.
pub fn check_password(entered: &str) -> bool {
    entered == ACCESS_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_exact_password() {
        assert!(check_password(ACCESS_PASSWORD));
        assert!(!check_password(""));
        assert!(!check_password("your-super-secret-password "));
        assert!(!check_password("Your-Super-Secret-Password"));
    }
}
