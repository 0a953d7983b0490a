use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::net::IpAddr;

/// A single logged HTTP request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub time: DateTime<Utc>,
    #[serde(default = "default_method")]
    pub method: String,
    pub path: String,
    /// Response status code
    pub response: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<IpAddr>,
    /// Authenticated user, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub is_secure: bool,
    #[serde(default)]
    pub is_ajax: bool,
}

fn default_method() -> String {
    "GET".to_string()
}

impl RequestRecord {
    pub fn new(time: DateTime<Utc>, path: impl Into<String>, response: u16) -> Self {
        Self {
            time,
            method: default_method(),
            path: path.into(),
            response,
            referer: None,
            user_agent: None,
            ip: None,
            user: None,
            language: None,
            is_secure: false,
            is_ajax: false,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_ip(mut self, ip: IpAddr) -> Self {
        self.ip = Some(ip);
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn secure(mut self) -> Self {
        self.is_secure = true;
        self
    }

    pub fn ajax(mut self) -> Self {
        self.is_ajax = true;
        self
    }

    pub fn is_error(&self) -> bool {
        self.response >= 400
    }

    /// Template-facing representation.
    pub fn to_json(&self) -> Value {
        json!({
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "response": self.response,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "ip": self.ip.map(|ip| ip.to_string()),
            "user": self.user,
            "is_secure": self.is_secure,
            "is_ajax": self.is_ajax,
        })
    }
}

/// Raw record fields that can be projected out of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Path,
    Method,
    Referer,
    UserAgent,
    Ip,
    User,
    Language,
}

impl Field {
    /// Missing values project to an empty string.
    pub fn extract(&self, record: &RequestRecord) -> String {
        match self {
            Field::Path => record.path.clone(),
            Field::Method => record.method.clone(),
            Field::Referer => record.referer.clone().unwrap_or_default(),
            Field::UserAgent => record.user_agent.clone().unwrap_or_default(),
            Field::Ip => record.ip.map(|ip| ip.to_string()).unwrap_or_default(),
            Field::User => record.user.clone().unwrap_or_default(),
            Field::Language => record.language.clone().unwrap_or_default(),
        }
    }
}

/// Values derived from raw fields rather than stored on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Browser name parsed from the user agent
    Browser,
    /// Search phrase parsed from the referrer query string
    Keywords,
}
