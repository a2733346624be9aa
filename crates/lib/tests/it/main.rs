/*! Integration tests for notehub.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - users: Tests for the user controller guard chains
 * - notes: Tests for the note controller guard chains
 * - api: End-to-end tests driving the axum router in process
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("notehub=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod api;
mod users;
