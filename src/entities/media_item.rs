use serde::Serialize;

/// An image related to a song.
///
/// `title` is only provided by the image search provider; the internal
/// backend does not return one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub url: String,
    pub caption: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MediaItem {
    pub fn new(
        url: impl Into<String>,
        caption: impl Into<String>,
        thumbnail_url: impl Into<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            caption: caption.into(),
            thumbnail_url: thumbnail_url.into(),
            title,
        }
    }
}
