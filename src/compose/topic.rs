use crate::{
    compose::rows::{self, HANDLE},
    foundation::core::Line,
    layout::gate::GateDimensions,
};

const ELLIPSIS: &str = "...";

/// Fit a label into `content_width` characters.
///
/// The label gets one space on each side. If that overflows it is cut to
/// `content_width - 3` characters and `"..."` is appended; either way the
/// result is right-padded with spaces to exactly `content_width`.
pub fn fit_topic(label: &str, dims: GateDimensions) -> String {
    let padded = format!(" {label} ");
    let width = dims.content_width();

    let mut fitted = if padded.chars().count() > width {
        tracing::debug!(label, width, "topic label truncated");
        let mut cut = rows::take_chars(&padded, width.saturating_sub(ELLIPSIS.len())).to_string();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        padded
    };

    let len = fitted.chars().count();
    fitted.push_str(&rows::repeat(' ', width.saturating_sub(len)));
    fitted
}

/// Interior row holding the label, left-aligned, with the trailing handle.
pub fn frame_topic(label: &str, dims: GateDimensions) -> Line {
    let mut interior = fit_topic(label, dims);
    interior.push(HANDLE);
    rows::enclose(&interior)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/topic.rs"]
mod tests;
