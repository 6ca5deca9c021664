//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied and
//!   automatic cleanup
//! - `TestDataBuilder`: deterministic test data generation
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let cpf = builder.cpf(0);
//! let email = builder.email("main");
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;

use uuid::Uuid;

/// Builder for test data with deterministic randomization
///
/// Seeding from the test name keeps fixtures reproducible while still
/// unique across tests sharing a database.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a deterministic user ID for this seed
    pub fn user_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// Generate an 11-digit CPF-shaped string, unique per seed and index
    pub fn cpf(&self, index: u64) -> String {
        format!("{:011}", (self.seed.wrapping_add(index)) % 100_000_000_000)
    }

    /// Generate a unique email for this seed
    pub fn email(&self, suffix: &str) -> String {
        format!("test-{}-{}@example.com", self.seed, suffix)
    }

    /// Generate a unique name for testing, e.g. "test-user-12345-main"
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.user_id(), builder2.user_id());
        assert_eq!(builder1.cpf(0), builder2.cpf(0));
        assert_eq!(builder1.email("main"), builder2.email("main"));
    }

    #[test]
    fn test_cpf_is_eleven_digits() {
        let builder = TestDataBuilder::from_test_name("cpf_shape");
        let cpf = builder.cpf(3);

        assert_eq!(cpf.len(), 11);
        assert!(cpf.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.user_id(), builder2.user_id());
        assert_ne!(builder1.cpf(0), builder2.cpf(0));
    }
}
