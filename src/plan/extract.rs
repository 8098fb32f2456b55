// src/plan/extract.rs

/// Cut the JSON object out of a generator response.
///
/// Generators like to wrap the payload in prose ("Here is the plan: ...").
/// We take everything from the first `{` to the last `}` inclusive. If
/// there is no such pair the input is returned untouched, so the decoder
/// reports the failure instead of it being swallowed here.
///
/// Braces inside the surrounding prose will confuse this; that is accepted.
pub fn extract_payload(response: &str) -> &str {
    match (response.find('{'), response.rfind('}')) {
        (Some(start), Some(end)) if start < end => &response[start..=end],
        _ => response,
    }
}
