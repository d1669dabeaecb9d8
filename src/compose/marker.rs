use crate::foundation::core::Line;

/// Which border the handle sits against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleSide {
    /// `...=|`, used by the animated gate.
    Trailing,
    /// `|=...`, used by the static gate.
    Leading,
}

/// Position of the handle character within a finished box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HandleMarker {
    /// Row index, borders included (row 0 is the top border).
    pub row: usize,
    /// Character column of the `=` within that row.
    pub column: usize,
    /// Border the handle sits against.
    pub side: HandleSide,
}

/// Find the first interior row carrying a handle.
///
/// Border rows are skipped even though `+===+` contains `=`.
pub fn locate_handle(lines: &[Line]) -> Option<HandleMarker> {
    let interior_end = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .take(interior_end)
        .skip(1)
        .find_map(|(row, line)| {
            if line.has_trailing_handle() {
                Some(HandleMarker {
                    row,
                    column: line.width() - 2,
                    side: HandleSide::Trailing,
                })
            } else if line.has_leading_handle() {
                Some(HandleMarker {
                    row,
                    column: 1,
                    side: HandleSide::Leading,
                })
            } else {
                None
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/marker.rs"]
mod tests;
