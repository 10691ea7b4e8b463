//! Image upload response types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Response returned after an image is uploaded via `POST /images`.
///
/// Images are not cross-referenced anywhere else in this API surface; the
/// returned URL is the only handle the caller gets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploaded {
    pub image_id: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub upload_timestamp: OffsetDateTime,
    /// Human-readable size as reported by the server, e.g. `"1.5MB"`.
    pub image_size: String,
    pub image_format: String,
}
