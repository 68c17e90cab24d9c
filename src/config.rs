// Runtime configuration from environment variables.

/// User whose stars are fetched when GITHUB_USER is not set.
pub const DEFAULT_USER: &str = "Allyedge";

/// Configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub login whose starred repositories are listed.
    pub user: String,
    /// Optional API token, forwarded as an Authorization header.
    pub token: Option<String>,
}

impl Config {
    /// Read GITHUB_USER and GITHUB_TOKEN from the environment.
    pub fn from_env() -> Self {
        Self::from_values(std::env::var("GITHUB_USER").ok(), std::env::var("GITHUB_TOKEN").ok())
    }

    /// Resolve configuration from raw values. Empty strings count as unset.
    pub fn from_values(user: Option<String>, token: Option<String>) -> Self {
        Self {
            user: user
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_USER.to_string()),
            token: token.filter(|t| !t.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_values(None, None);
        assert_eq!(config.user, DEFAULT_USER);
        assert!(config.token.is_none());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Config::from_values(Some(String::new()), Some(String::new()));
        assert_eq!(config.user, DEFAULT_USER);
        assert!(config.token.is_none());
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_values(Some("octocat".into()), Some("t0ken".into()));
        assert_eq!(config.user, "octocat");
        assert_eq!(config.token.as_deref(), Some("t0ken"));
    }
}
