//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Default JWT token expiration in hours (30 days)
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 720;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Durable store (primary)
// =============================================================================

/// Default database name on the primary store
pub const DEFAULT_DATABASE_NAME: &str = "clipstream";

/// Server selection timeout for the single per-operation connection attempt
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 2_000;

/// Accounts collection name
pub const ACCOUNTS_COLLECTION: &str = "accounts";

/// Videos collection name
pub const VIDEOS_COLLECTION: &str = "videos";

// =============================================================================
// Fallback store (local, non-production)
// =============================================================================

/// Default directory for the fallback store's backing files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Accounts backing file name
pub const ACCOUNTS_FILE: &str = "accounts.json";

/// Videos backing file name
pub const VIDEOS_FILE: &str = "videos.json";

/// Prefix of identifiers synthesized by the fallback store
pub const FALLBACK_ID_PREFIX: &str = "mock";

/// Length of the random base36 suffix in synthesized identifiers
pub const FALLBACK_ID_SUFFIX_LEN: usize = 9;

// =============================================================================
// Videos
// =============================================================================

/// Default transformation width in pixels
pub const DEFAULT_VIDEO_WIDTH: u32 = 1280;

/// Default transformation height in pixels
pub const DEFAULT_VIDEO_HEIGHT: u32 = 720;

/// Default transformation quality (0-100)
pub const DEFAULT_VIDEO_QUALITY: u32 = 80;

/// Sentinel recorded as the uploader for unauthenticated creation paths
pub const ANONYMOUS_UPLOADER: &str = "anonymous";
