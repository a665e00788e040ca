// utils crate

use models::MediaKind;
use std::path::{Path, PathBuf};

// Extension tables are matched case-sensitively. `HIF` is the one
// upper-case entry in the supported set, as configured.
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "tiff", "bmp", "dib", "webp", "heif", "heifs", "heic", "heics",
    "avci", "avcs", "HIF",
];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "json", "xml"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac"];

/// Classifies an asset file name into a coarse media kind by its trailing
/// extension. A file with no extension, or with one outside the supported
/// tables, is [`MediaKind::Unknown`].
pub fn classify_media(file_name: &str) -> MediaKind {
    let Some((_, extension)) = file_name.rsplit_once('.') else {
        return MediaKind::Unknown;
    };

    if IMAGE_EXTENSIONS.contains(&extension) {
        MediaKind::Image
    } else if TEXT_EXTENSIONS.contains(&extension) {
        MediaKind::Text
    } else if VIDEO_EXTENSIONS.contains(&extension) {
        MediaKind::Video
    } else if AUDIO_EXTENSIONS.contains(&extension) {
        MediaKind::Audio
    } else {
        MediaKind::Unknown
    }
}

/// Expected on-disk location of a referenced asset:
/// `{root}/{hotspot_id}/Assets/{file_location}`.
pub fn asset_path(hotspots_root: &Path, hotspot_id: &str, file_location: &str) -> PathBuf {
    hotspots_root.join(hotspot_id).join("Assets").join(file_location)
}
