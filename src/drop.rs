use crate::config::{DEFAULT_TEXT, DROP_ERROR_TEXT};
use anyhow::{anyhow, Context};
use eframe::egui;

/// Extract the plain-text payload of one dropped item.
///
/// Web targets deliver the content in-memory via `bytes`; native targets hand
/// over the path of the dragged source instead. Anything else counts as an
/// unsupported payload.
pub fn payload_text(file: &egui::DroppedFile) -> anyhow::Result<String> {
    if let Some(bytes) = &file.bytes {
        let text = std::str::from_utf8(bytes).context("dropped bytes are not valid UTF-8")?;
        return Ok(text.to_owned());
    }
    if let Some(path) = &file.path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dropped file {}", path.display()));
    }
    Err(anyhow!("drop carried no text payload"))
}

/// Merge one dropped payload into the text buffer. The first drop replaces
/// the untouched placeholder outright; later drops append on a fresh line.
pub fn merge_text(buffer: &mut String, payload: &str) {
    if buffer == DEFAULT_TEXT {
        *buffer = payload.to_owned();
    } else {
        buffer.push('\n');
        buffer.push_str(payload);
    }
}

/// Record a failed drop in the buffer itself; prior content stays intact.
pub fn merge_error(buffer: &mut String) {
    buffer.push('\n');
    buffer.push_str(DROP_ERROR_TEXT);
}
