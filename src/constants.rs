// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

pub const SERVER_HOST: &str = "127.0.0.1";
pub const SERVER_PORT: u16 = 8080;

pub const DATABASE_URL: &str = "sqlite://feedback.db";
pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
pub const DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Base path of the feedback API
pub const FEEDBACK_PATH: &str = "/api/feedback";

/// Origin wildcard accepted in `cors.allowed_origins`
pub const ANY_ORIGIN: &str = "*";

/// Prefix for environment variable overrides, e.g. `FEEDBACK_PORT`
pub const ENV_PREFIX: &str = "FEEDBACK";
