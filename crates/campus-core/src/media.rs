//! Inline image references.
//!
//! Stored photos are served inside the page itself as `data:` URIs, so no
//! separate image route is needed.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;

use crate::university::Photo;

/// Encode a stored photo as `data:image/<format>;base64,<payload>`.
///
/// An empty payload still yields a well-formed (empty) URI.
pub fn encode(photo: &Photo) -> String {
  format!("data:image/{};base64,{}", photo.format, B64.encode(&photo.photo))
}
