use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;
use storage::error::Result;
use storage::models::User;
use storage::repository::user::UserRepository;

pub async fn find_user(pool: &PgPool, username: &str) -> Result<Option<User>> {
    let repo = UserRepository::new(pool);
    repo.find_by_username(username).await
}

pub async fn get_user(pool: &PgPool, id: i32) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(id).await
}

pub fn hash_password(password: &str) -> std::result::Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("Sports@2026").unwrap();
        assert!(verify_password("Sports@2026", &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("Sports@2026").unwrap();
        assert!(!verify_password("sports@2026", &hash));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
