//! Shared constants
//!
//! Default file names and command-line defaults. The file names form the
//! contract between the harness and the program under test.

// =============================================================================
// INSTANCE LAYOUT
// =============================================================================

/// Network description written by the generator
pub const NETWORK_FILENAME: &str = "network.json";

/// Single-line file holding the start vertex
pub const START_FILENAME: &str = "start.txt";

/// File the program under test writes its answer into
pub const RESULT_FILENAME: &str = "result.txt";

/// Reference answer compared against the result file
pub const EXPECTED_FILENAME: &str = "expected.txt";

/// Expected-output line for generated instances, which have no known answer
pub const PLACEHOLDER_EXPECTED_LINE: &str = "random instance";

/// Prefix of generated vertex identifiers
pub const VERTEX_PREFIX: &str = "v_";

/// Prefix of generated edge identifiers
pub const EDGE_PREFIX: &str = "e_";

/// Smallest vertex count the generator accepts
pub const MIN_VERTEX_COUNT: usize = 2;

// =============================================================================
// TEST RUNNER DEFAULTS
// =============================================================================

/// Default catalog of instance directories
pub const DEFAULT_TEST_LIST: &str = "test_list.txt";

/// Default per-test timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: &str = "1";

/// Catalog lines starting with this character are section headers
pub const COMMENT_MARKER: char = '#';

/// Width of the instance-name column in the test report
pub const REPORT_NAME_WIDTH: usize = 35;

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// Default number of back-to-back benchmark iterations
pub const DEFAULT_REPEATS: &str = "20";

// =============================================================================
// PROCESS HANDLING
// =============================================================================

/// Maximum number of stderr characters kept from a failed run
pub const STDERR_EXCERPT_CHARS: usize = 500;
