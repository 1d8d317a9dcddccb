/*
[INPUT]:  Test configuration and fixture requirements
[OUTPUT]: Shared test utilities and fixtures
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for orda-adapter tests

use orda_adapter::InMemoryIdentityProvider;

#[allow(dead_code)]
pub const TEST_EMAIL: &str = "customer@orda.ng";
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "jollof123";

/// Provider seeded with one known account
#[allow(dead_code)]
pub fn seeded_provider() -> InMemoryIdentityProvider {
    InMemoryIdentityProvider::new().with_account(TEST_EMAIL, TEST_PASSWORD)
}

/// Osogbo reference point used across location tests
#[allow(dead_code)]
pub fn osogbo() -> (f64, f64) {
    (7.7840, 4.5405)
}
