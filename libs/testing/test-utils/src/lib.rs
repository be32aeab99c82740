//! Test helpers shared by the workspace crates.
//!
//! `TestDatabase` (feature `postgres`, on by default) needs Docker; the data
//! builder and assertions are plain functions.
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("create_product");
//! let barcode = builder.barcode("main");
//! # }
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Seeded generator for names and barcodes.
///
/// The same seed always yields the same values; different test names give
/// different barcodes, so tests sharing a database do not collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        Self::new(hash_of(name))
    }

    /// `test-{prefix}-{seed}-{suffix}`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("product", "main"), "test-product-12345-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate a numeric barcode unique to this builder and `suffix`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_ne!(builder.barcode("a"), builder.barcode("b"));
    /// assert!(builder.barcode("a").chars().all(|c| c.is_ascii_digit()));
    /// ```
    pub fn barcode(&self, suffix: &str) -> String {
        format!("{:013}", hash_of((self.seed, suffix)) % 10_000_000_000_000)
    }
}

fn hash_of(value: impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Assertions with context in the panic message
pub mod assertions {
    pub fn assert_id_eq(actual: i64, expected: i64, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected id {}, got {}",
            context, expected, actual
        );
    }

    /// Unwrap `value`, naming `context` if it is `None`
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
