/// Application name
pub const APP_NAME: &str = "CookOff";

/// Required suffix for registration email addresses
pub const EMAIL_DOMAIN: &str = "@gmail.com";

/// Exact number of digits in a mobile number
pub const MOBILE_DIGITS: usize = 10;

/// Number of digits in a one-time verification code
pub const CODE_DIGITS: usize = 6;

/// Inclusive lower bound of the verification code range
pub const CODE_MIN: u32 = 100_000;

/// Inclusive upper bound of the verification code range
pub const CODE_MAX: u32 = 999_999;

/// Built-in admin login (development credentials, overridable via config)
pub const DEFAULT_ADMIN_EMAIL: &str = "pranay@123";
pub const DEFAULT_ADMIN_PASSWORD: &str = "939180";
