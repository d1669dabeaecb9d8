use crate::{
    compose::rows::{self, HANDLE},
    foundation::core::Line,
    layout::gate::GateDimensions,
};

/// Caption the home page frames in a static gate.
pub const EDITORIAL_LINES: [&str; 9] = [
    "..",
    "iki",
    "kapılı",
    "bir",
    "handa",
    "gidiyorum",
    "gündüz",
    "gece",
    "..",
];

/// Lays fixed lines out inside a gate, vertically centred and right-aligned.
///
/// Lines wider than the interior are hard-cut with no ellipsis. At most
/// `door_height` lines are used; extra lines are dropped so the box never
/// grows. The middle row always carries the handle right after the opening
/// border.
#[derive(Clone, Copy, Debug)]
pub struct StaticBoxComposer {
    dims: GateDimensions,
}

impl StaticBoxComposer {
    /// Composer for fixed dimensions.
    pub fn new(dims: GateDimensions) -> Self {
        Self { dims }
    }

    /// Dimensions this composer lays out into.
    pub fn dimensions(&self) -> GateDimensions {
        self.dims
    }

    /// Compose the full box, borders included.
    pub fn compose<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Line> {
        let dims = self.dims;
        let kept = if lines.len() > dims.door_height() {
            tracing::debug!(
                supplied = lines.len(),
                door_height = dims.door_height(),
                "static box lines exceed door height; extra lines dropped"
            );
            &lines[..dims.door_height()]
        } else {
            lines
        };

        let total_empty = dims.door_height() - kept.len();
        let top_pad = total_empty / 2;
        let middle = dims.middle_row();

        rows::gate_with(dims, |i| {
            let text = i
                .checked_sub(top_pad)
                .and_then(|idx| kept.get(idx))
                .map(AsRef::as_ref);
            match (i == middle, text) {
                (true, Some(text)) => handle_row(text, dims),
                (true, None) => rows::blank_with_leading_handle(dims),
                (false, Some(text)) => rows::enclose(&right_align(text, dims.gate_width())),
                (false, None) => rows::blank(dims),
            }
        })
    }
}

/// `|=` then `text` right-aligned in `content_width`, then `|`.
fn handle_row(text: &str, dims: GateDimensions) -> Line {
    let mut interior = String::with_capacity(dims.gate_width());
    interior.push(HANDLE);
    interior.push_str(&right_align(text, dims.content_width()));
    rows::enclose(&interior)
}

fn right_align(text: &str, width: usize) -> String {
    let text = rows::take_chars(text, width);
    let pad = width - text.chars().count();
    let mut out = rows::repeat(' ', pad);
    out.push_str(text);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/static_box.rs"]
mod tests;
