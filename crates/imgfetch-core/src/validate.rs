//! Declared content-type check. The payload itself is never sniffed.

use crate::fetch::FetchResponse;

/// Prefix a `Content-Type` value must start with to be stored.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// True if the declared content type starts with `image/` (case-sensitive).
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX)
}

/// Checks the response's `Content-Type` header; a missing header counts as `""`.
/// Returns the rejected value on failure.
pub fn check_image(response: &FetchResponse) -> Result<(), String> {
    let content_type = response.content_type();
    if is_image_content_type(content_type) {
        Ok(())
    } else {
        Err(content_type.to_string())
    }
}
