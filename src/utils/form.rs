// Lenient decoding of URL-encoded request bodies

use std::collections::HashMap;

/// Decodes an `application/x-www-form-urlencoded` body into a key-value map.
/// Decoding is best-effort and never rejects: undecodable escapes are carried
/// through literally, and a decode failure yields an empty map. The webhook
/// never validates its payload, so nothing downstream depends on the result.
pub fn parse(body: &[u8]) -> HashMap<String, String> {
    serde_urlencoded::from_bytes(body).unwrap_or_default()
}
