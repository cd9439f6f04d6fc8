use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Short hex id used to correlate the log lines of a single turn.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Opaque conversation identifier.
///
/// Generated once per conversation and passed back by the caller on every
/// turn. Any string is accepted so front-ends can bring their own ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn correlation_id_is_short_hex() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_id_new_is_uuid() {
        let sid = SessionId::new();
        assert!(uuid::Uuid::parse_str(sid.as_str()).is_ok());
    }

    #[test]
    fn session_id_from_caller_string() {
        let sid = SessionId::from("kitchen-speaker");
        assert_eq!(sid.as_str(), "kitchen-speaker");
        assert_eq!(sid.to_string(), "kitchen-speaker");
        assert_eq!(sid, SessionId::from("kitchen-speaker".to_string()));
    }

    #[test]
    fn session_id_uniqueness() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let sid = SessionId::from("abc");
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sid);
    }

    #[test]
    fn session_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let s1 = SessionId::new();
        set.insert(s1.clone());
        set.insert(s1);
        assert_eq!(set.len(), 1);
    }
}
