use std::fmt;

use serde_json::Value;

pub const ESTADO_FIELD: &str = "estado";
pub const ESTADO_OK: &str = "OK";

/// What the `estado` field of a reply says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyStatus {
    Accepted,
    /// `estado` present but not the success sentinel.
    Rejected(String),
    /// Body is not a JSON object, or carries no `estado`.
    Malformed,
}

pub fn inspect_reply(body: &str) -> ReplyStatus {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return ReplyStatus::Malformed;
    };
    match map.get(ESTADO_FIELD) {
        Some(Value::String(s)) if s == ESTADO_OK => ReplyStatus::Accepted,
        Some(Value::String(s)) => ReplyStatus::Rejected(s.clone()),
        Some(Value::Null) | None => ReplyStatus::Malformed,
        Some(other) => ReplyStatus::Rejected(other.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Anything other than HTTP 200.
    Status { code: u16, body: String },
    /// HTTP 200 without `"estado": "OK"`.
    Semantic { reply: ReplyStatus, body: String },
    /// No status was obtained at all.
    Transport { timed_out: bool, detail: String },
}

impl Failure {
    pub fn transport(timed_out: bool, detail: impl fmt::Display) -> Self {
        Failure::Transport {
            timed_out,
            detail: detail.to_string(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Failure::Status { code, .. } => Some(*code),
            Failure::Semantic { .. } => Some(200),
            Failure::Transport { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Failure::Status { body, .. } | Failure::Semantic { body, .. } => {
                Some(body.as_str())
            }
            Failure::Transport { .. } => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Status { code, body } => write!(f, "HTTP {code}: {body}"),
            Failure::Semantic { body, .. } => {
                write!(f, "invalid reply: {body}")
            }
            Failure::Transport {
                timed_out: true,
                detail,
            } => write!(f, "timeout: {detail}"),
            Failure::Transport {
                timed_out: false,
                detail,
            } => write!(f, "transport error: {detail}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure(Failure),
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Verdict::Success => None,
            Verdict::Failure(f) => Some(f),
        }
    }
}

impl From<Failure> for Verdict {
    fn from(value: Failure) -> Self {
        Verdict::Failure(value)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => f.write_str("ok"),
            Verdict::Failure(failure) => write!(f, "failed: {failure}"),
        }
    }
}

/// Verdict for a reply that carried an HTTP status.
pub fn classify(status: u16, body: &str) -> Verdict {
    if status != 200 {
        return Failure::Status {
            code: status,
            body: body.to_string(),
        }
        .into();
    }
    match inspect_reply(body) {
        ReplyStatus::Accepted => Verdict::Success,
        reply => Failure::Semantic {
            reply,
            body: body.to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_reply_is_success() {
        assert_eq!(classify(200, r#"{"estado":"OK"}"#), Verdict::Success);
        assert_eq!(
            classify(
                200,
                r#"{"estado":"OK","requestId":"abc","totalVentasRecibidas":7}"#
            ),
            Verdict::Success
        );
    }

    #[test]
    fn test_non_200_is_status_failure() {
        let verdict = classify(500, "Internal Server Error");
        let failure = verdict.failure().unwrap();
        assert_eq!(failure.status_code(), Some(500));
        let msg = failure.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Internal Server Error"));
    }

    #[test]
    fn test_non_200_ignores_body() {
        // even a body with the sentinel fails when the status is off
        let verdict = classify(201, r#"{"estado":"OK"}"#);
        assert!(matches!(
            verdict,
            Verdict::Failure(Failure::Status { code: 201, .. })
        ));
    }

    #[test]
    fn test_wrong_estado_is_semantic_failure() {
        let body = r#"{"estado":"ERROR","detalle":"stock insuficiente"}"#;
        let verdict = classify(200, body);
        match verdict.failure() {
            Some(Failure::Semantic { reply, .. }) => {
                assert_eq!(reply, &ReplyStatus::Rejected("ERROR".into()))
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(verdict.failure().unwrap().to_string().contains(body));
    }

    #[test]
    fn test_missing_estado_is_semantic_failure() {
        let verdict = classify(200, "{}");
        assert!(matches!(
            verdict,
            Verdict::Failure(Failure::Semantic {
                reply: ReplyStatus::Malformed,
                ..
            })
        ));
    }

    #[test]
    fn test_unparseable_body_is_semantic_failure() {
        assert_eq!(inspect_reply("OK"), ReplyStatus::Malformed);
        assert_eq!(inspect_reply("[\"OK\"]"), ReplyStatus::Malformed);
        assert_eq!(inspect_reply(""), ReplyStatus::Malformed);
        assert!(!classify(200, "not json").is_success());
    }

    #[test]
    fn test_non_string_estado() {
        assert_eq!(inspect_reply(r#"{"estado":null}"#), ReplyStatus::Malformed);
        assert_eq!(
            inspect_reply(r#"{"estado":1}"#),
            ReplyStatus::Rejected("1".into())
        );
        assert_eq!(
            inspect_reply(r#"{"estado":"ok"}"#),
            ReplyStatus::Rejected("ok".into())
        );
    }

    #[test]
    fn test_classify_is_stable() {
        let cases = [
            (200, r#"{"estado":"OK"}"#),
            (200, "{}"),
            (404, "not found"),
        ];
        for (status, body) in cases {
            assert_eq!(classify(status, body), classify(status, body));
        }
    }

    #[test]
    fn test_transport_messages() {
        let f = Failure::transport(true, "operation timed out");
        assert_eq!(f.to_string(), "timeout: operation timed out");
        assert_eq!(f.status_code(), None);
        let f = Failure::transport(false, "connection refused");
        assert_eq!(f.to_string(), "transport error: connection refused");
    }
}
