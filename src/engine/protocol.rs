//! The control protocol.
//!
//! One message type, routed to enable/disable by the session:
//!
//! ```json
//! { "action": "toggleDarkMode", "enabled": true }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A message from the external controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum ControlMessage {
    #[serde(rename = "toggleDarkMode")]
    ToggleDarkMode { enabled: bool },
}

/// Control message errors.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed control message")]
    Malformed(#[from] serde_json::Error),
}

/// Parse one JSON control message. Unknown actions are malformed.
pub fn parse_message(raw: &str) -> Result<ControlMessage, ProtocolError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle_on() {
        let msg = parse_message(r#"{"action": "toggleDarkMode", "enabled": true}"#).unwrap();
        assert_eq!(msg, ControlMessage::ToggleDarkMode { enabled: true });
    }

    #[test]
    fn test_parse_toggle_off() {
        let msg = parse_message(r#"{"action": "toggleDarkMode", "enabled": false}"#).unwrap();
        assert_eq!(msg, ControlMessage::ToggleDarkMode { enabled: false });
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(parse_message(r#"{"action": "selfDestruct", "enabled": true}"#).is_err());
        assert!(parse_message(r#"{"enabled": true}"#).is_err());
        assert!(parse_message("not json").is_err());
    }

    #[test]
    fn test_round_trip() {
        let msg = ControlMessage::ToggleDarkMode { enabled: true };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(parse_message(&json).unwrap(), msg);
    }
}
