/*! Integration tests for pathmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - map_tests: PathMap construction plus key-level and path-level operations
 * - path_tests: Path/PathBuf/Component types, normalization, and the path! macro
 * - value_tests: Value conversions, comparisons, and display
 * - immutability_tests: persistence guarantees - writes never touch their receiver
 * - serialization_tests: JSON wire shape and entry ordering
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pathmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod path_tests;
mod serialization_tests;
