//! Row builders shared by the animated and static gates.

use crate::{foundation::core::Line, layout::gate::GateDimensions};

pub(crate) const BORDER_CORNER: char = '+';
pub(crate) const BORDER_FILL: char = '=';
pub(crate) const SIDE: char = '|';
pub(crate) const HANDLE: char = '=';

/// `+` then `gate_width` x `=` then `+`.
pub(crate) fn border(dims: GateDimensions) -> Line {
    let mut s = String::with_capacity(dims.line_width());
    s.push(BORDER_CORNER);
    s.extend(std::iter::repeat_n(BORDER_FILL, dims.gate_width()));
    s.push(BORDER_CORNER);
    Line::new(s)
}

/// Wrap interior text in side borders. The caller sizes `interior`.
pub(crate) fn enclose(interior: &str) -> Line {
    let mut s = String::with_capacity(interior.len() + 2);
    s.push(SIDE);
    s.push_str(interior);
    s.push(SIDE);
    Line::new(s)
}

pub(crate) fn filled(dims: GateDimensions, ch: char) -> Line {
    enclose(&repeat(ch, dims.gate_width()))
}

pub(crate) fn blank(dims: GateDimensions) -> Line {
    filled(dims, ' ')
}

/// Blank row with the handle before the closing border.
pub(crate) fn blank_with_trailing_handle(dims: GateDimensions) -> Line {
    let mut interior = repeat(' ', dims.content_width());
    interior.push(HANDLE);
    enclose(&interior)
}

/// Blank row with the handle after the opening border.
pub(crate) fn blank_with_leading_handle(dims: GateDimensions) -> Line {
    let mut interior = String::with_capacity(dims.gate_width());
    interior.push(HANDLE);
    interior.push_str(&repeat(' ', dims.content_width()));
    enclose(&interior)
}

/// Top border, `door_height` interior rows from `row`, bottom border.
pub(crate) fn gate_with(dims: GateDimensions, mut row: impl FnMut(usize) -> Line) -> Vec<Line> {
    let top = border(dims);
    let mut lines = Vec::with_capacity(dims.box_height());
    lines.push(top.clone());
    lines.extend((0..dims.door_height()).map(&mut row));
    lines.push(top);
    lines
}

/// The gate before anything is written into it.
pub(crate) fn empty_gate(dims: GateDimensions) -> Vec<Line> {
    let middle = dims.middle_row();
    gate_with(dims, |i| {
        if i == middle {
            blank_with_trailing_handle(dims)
        } else {
            blank(dims)
        }
    })
}

pub(crate) fn repeat(ch: char, n: usize) -> String {
    std::iter::repeat_n(ch, n).collect()
}

/// First `max` characters of `s`.
pub(crate) fn take_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/rows.rs"]
mod tests;
