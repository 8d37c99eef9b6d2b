/// Pages requested on mount, in page order.
pub const DEFAULT_ENDPOINTS: [&str; 2] = [
    "https://reqres.in/api/users?page=1",
    "https://reqres.in/api/users?page=2",
];

/// Image shown in place of a missing avatar.
pub const DEFAULT_PLACEHOLDER_AVATAR: &str = "static/avatar-placeholder.svg";

/// Where the directory loads its users from and what it falls back to.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryConfig {
    pub endpoints: Vec<String>,
    pub placeholder_avatar: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|url| url.to_string()).collect(),
            placeholder_avatar: DEFAULT_PLACEHOLDER_AVATAR.to_string(),
        }
    }
}
