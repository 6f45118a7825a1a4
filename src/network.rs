//! Network URL constants for the iamport SDK.

/// Default REST API base URL for iamport.
pub const DEFAULT_API_URL: &str = "https://api.iamport.kr";

/// Path of the token endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "users/getToken";
