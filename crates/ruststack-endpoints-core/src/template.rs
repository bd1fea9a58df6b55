//! Endpoint template validation and rendering.
//!
//! The only placeholder is `%region%`. Any other `%` in a template is a
//! metadata defect and is rejected at compile time.

use ruststack_endpoints_model::REGION_PLACEHOLDER;
use url::Url;

use crate::error::CompileError;

/// Region substituted when checking that a template renders to a URL.
const PROBE_REGION: &str = "us-east-1";

/// Substitute `region` for every `%region%` in `template`.
#[must_use]
pub fn render(template: &str, region: &str) -> String {
    template.replace(REGION_PLACEHOLDER, region)
}

/// Check that `template` only uses the `%region%` placeholder and renders to
/// an absolute `http(s)` URL with a host.
pub fn validate(service: &str, template: &str) -> Result<(), CompileError> {
    let malformed = |reason: String| CompileError::MalformedTemplate {
        service: service.to_owned(),
        template: template.to_owned(),
        reason,
    };

    if template.trim().is_empty() {
        return Err(malformed("template is empty".to_owned()));
    }

    let mut offset = 0;
    while let Some(pos) = template[offset..].find('%') {
        let start = offset + pos;
        if !template[start..].starts_with(REGION_PLACEHOLDER) {
            return Err(malformed(format!(
                "unexpected '%' at byte {start}, only {REGION_PLACEHOLDER} is supported"
            )));
        }
        offset = start + REGION_PLACEHOLDER.len();
    }

    let rendered = render(template, PROBE_REGION);
    let url = Url::parse(&rendered).map_err(|e| malformed(e.to_string()))?;
    if !matches!(url.scheme(), "https" | "http") {
        return Err(malformed(format!("unsupported scheme {}", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(malformed("endpoint has no host".to_owned()));
    }

    Ok(())
}
