use serde::{Deserialize, Serialize};

/// Authentication/confidentiality mode for the outbound collector
/// connection.
///
/// Any level other than `none` requires a username and password at build
/// time. The actual signing/encryption is the packet writer's business.
///
/// # Examples
///
/// ```
/// use collectd_reporter::SecurityLevel;
///
/// let level: SecurityLevel = "sign".parse().unwrap();
/// assert_eq!(level, SecurityLevel::Sign);
/// assert_eq!(level.to_string(), "sign");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityLevel {
    #[default]
    None,
    Sign,
    Encrypt,
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityLevel::None => write!(f, "none"),
            SecurityLevel::Sign => write!(f, "sign"),
            SecurityLevel::Encrypt => write!(f, "encrypt"),
        }
    }
}

impl std::str::FromStr for SecurityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SecurityLevel::None),
            "sign" => Ok(SecurityLevel::Sign),
            "encrypt" => Ok(SecurityLevel::Encrypt),
            _ => Err(format!("unknown security level: {s}")),
        }
    }
}
