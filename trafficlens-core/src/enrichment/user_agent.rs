use once_cell::sync::Lazy;
use woothee::parser::Parser;

static ENGINE: Lazy<WootheeEngine> = Lazy::new(WootheeEngine::new);

const UNKNOWN: &str = "UNKNOWN";

pub struct WootheeEngine {
    parser: Parser,
}

impl Default for WootheeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WootheeEngine {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse(&self, ua: &str) -> UserAgentInfo {
        let browser = self
            .parser
            .parse(ua)
            .map(|result| result.name)
            .filter(|name| !name.is_empty() && *name != UNKNOWN)
            .map(str::to_string);

        UserAgentInfo { browser }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentInfo {
    pub browser: Option<String>,
}

/// Browser family for a user-agent string, e.g. "Firefox".
pub fn browser_name(ua: &str) -> Option<String> {
    if ua.trim().is_empty() {
        return None;
    }
    ENGINE.parse(ua).browser
}
