// Front-page scan source
pub const SOURCE_BASE_URL: &str = "https://static01.nyt.com/images";
pub const COVER_PATH_SUFFIX: &str = "nytfrontpage/scan.pdf";

// Destination storage account
pub const ACCT_NAME: &str = "nytimescovers";
pub const CONTAINER_NAME: &str = "covers";

// Environment variable holding the storage account key
pub const ACCOUNT_KEY_ENV: &str = "ACCT_KEY";

// Linear backoff step between download retries
pub const RETRY_STEP_SECS: u64 = 5;

// SAS validity window around issuance
pub const SAS_START_OFFSET_HOURS: i64 = 1;
pub const SAS_EXPIRY_HOURS: i64 = 24;

// Optional configuration file, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "covers.toml";
