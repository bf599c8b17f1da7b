use reqwest::Url;

use crate::error::CoreError;

/// Validate a REST base URL and strip any trailing slash so paths can be
/// appended directly.
pub(super) fn parse_base_url(base_url: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(base_url).map_err(|e| {
        CoreError::InvalidEndpoint(format!(
            "invalid base URL `{base_url}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(CoreError::InvalidEndpoint(format!(
                "unsupported base URL scheme `{other}`; expected http or https"
            )))
        }
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(CoreError::InvalidEndpoint(format!(
            "base URL `{base_url}` must not carry a query or fragment"
        )));
    }
    Ok(base_url.trim_end_matches('/').to_owned())
}

/// Append a request path (which starts with `/` and may carry a query) to a
/// normalized base URL.
pub(super) fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}
