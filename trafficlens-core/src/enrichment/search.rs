use url::Url;

pub const DEFAULT_SEARCH_ENGINES: &[&str] = &[
    "google",
    "yahoo",
    "bing",
    "duckduckgo",
    "baidu",
    "yandex",
    "ask",
];

/// Query parameters carrying the search phrase, in lookup order.
const KEYWORD_PARAMS: &[&str] = &["q", "p", "query", "text", "wd"];

/// Whether the referrer's host belongs to one of `engines`.
///
/// An engine matches whole host labels: "google" matches `www.google.co.uk`
/// but "ask" does not match `basketball.com`.
pub fn is_search_referer(referer: &str, engines: &[String]) -> bool {
    let Ok(url) = Url::parse(referer) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };

    let host = host.to_ascii_lowercase();
    let labels: Vec<&str> = host.split('.').collect();

    engines
        .iter()
        .map(|e| e.trim_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .any(|engine| {
            let wanted: Vec<&str> = engine.split('.').collect();
            labels.windows(wanted.len()).any(|run| run == wanted.as_slice())
        })
}

/// Search phrase carried in a referrer URL, whitespace-normalized.
pub fn keywords(referer: &str) -> Option<String> {
    let url = Url::parse(referer).ok()?;

    KEYWORD_PARAMS.iter().find_map(|param| {
        url.query_pairs()
            .find(|(key, _)| key == param)
            .map(|(_, value)| value.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|phrase| !phrase.is_empty())
    })
}
