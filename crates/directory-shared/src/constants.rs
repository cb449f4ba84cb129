//! Application-wide constants

pub const DEFAULT_APP_NAME: &str = "directory-server";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DB_BACKEND: &str = "memory";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_SEED_PATH: &str = "config/employee_seed.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FORMAT: &str = "json";
pub const LOG_FILE_PREFIX: &str = "directory";
