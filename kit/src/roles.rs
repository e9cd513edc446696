//! Access-control role identifiers
//!
//! Role ids follow the AccessControl convention: the keccak-256 hash of
//! the role name string.

use ethers::utils::keccak256;

/// Name of the role allowed to trigger emergency pauses
pub const GUARDIAN_ROLE_NAME: &str = "GUARDIAN_ROLE";

/// Name of the role allowed to unpause and tune market parameters,
/// typically held by the timelock
pub const GOVERNOR_ROLE_NAME: &str = "GOVERNOR_ROLE";

/// Compute the 32-byte identifier for a role name
pub fn role_id(name: &str) -> [u8; 32] {
    keccak256(name.as_bytes())
}

/// The role identifier granted to the guardian signer
pub fn guardian_role() -> [u8; 32] {
    role_id(GUARDIAN_ROLE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guardian_role_matches_known_hash() {
        assert_eq!(
            hex::encode(guardian_role()),
            "55435dd261a4b9b3364963f7738a7a662ad9c84396d64be3365284bb7f0a5041"
        );
    }

    #[test]
    fn governor_role_matches_known_hash() {
        assert_eq!(
            hex::encode(role_id(GOVERNOR_ROLE_NAME)),
            "7935bd0ae54bc31f548c14dba4d37c5c64b3f8ca900cb468fb8abd54d5894f55"
        );
    }
}
