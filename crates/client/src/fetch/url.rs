//! URL validation gate for the header-check page.

/// Error type for URL validation failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("URL contains forbidden character {0:?}")]
    ForbiddenCharacter(char),

    #[error("not an absolute URL: {0}")]
    NotAbsolute(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("invalid hostname: {0}")]
    InvalidHost(String),
}

/// Characters never allowed in a raw URL string, alongside spaces and
/// control characters.
const FORBIDDEN: &[char] = &['<', '>', '"', '{', '}', '|', '\\', '^', '`', '[', ']'];

/// Validate a user-supplied URL before enabling the header check.
///
/// Rules:
/// - reject empty or whitespace-only input
/// - reject raw spaces, control characters, and any of `<>"{}|\^` + backtick
///   and square brackets, anywhere in the raw string (checked before parsing,
///   since the parser would quietly percent-encode several of them)
/// - must parse as an absolute URL with a scheme and a host
/// - `localhost` and literal IP hosts are accepted unconditionally
/// - any other host needs at least two dot-separated labels, the final label
///   letters-only and at least two characters long
///
/// The scheme itself is not restricted.
pub fn validate_url(input: &str) -> Result<url::Url, UrlError> {
    if input.trim().is_empty() {
        return Err(UrlError::Empty);
    }

    if let Some(c) = input.chars().find(|c| *c == ' ' || c.is_control() || FORBIDDEN.contains(c)) {
        return Err(UrlError::ForbiddenCharacter(c));
    }

    let parsed = url::Url::parse(input).map_err(|e| UrlError::NotAbsolute(e.to_string()))?;

    let host = match parsed.host() {
        Some(h) => h,
        None => return Err(UrlError::MissingHost),
    };

    match host {
        url::Host::Ipv4(_) | url::Host::Ipv6(_) => Ok(parsed),
        url::Host::Domain(domain) => {
            if domain.eq_ignore_ascii_case("localhost") {
                return Ok(parsed);
            }

            let labels: Vec<&str> = domain.split('.').collect();
            let last = labels.last().copied().unwrap_or("");
            let shaped = labels.len() >= 2
                && labels.iter().all(|label| !label.is_empty())
                && last.len() >= 2
                && last.chars().all(|c| c.is_ascii_alphabetic());

            if shaped {
                Ok(parsed)
            } else {
                Err(UrlError::InvalidHost(domain.to_string()))
            }
        }
    }
}
