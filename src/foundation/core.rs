use std::fmt;

/// One text row of a gate.
///
/// Widths are counted in Unicode scalar values, never bytes: the noise palette
/// and the opening caption both contain multi-byte characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Line(String);

impl Line {
    /// Wrap an already-composed row.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the row text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Row width in characters.
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the row carries the handle just before its closing border.
    pub fn has_trailing_handle(&self) -> bool {
        self.0.ends_with("=|")
    }

    /// Whether the row carries the handle just after its opening border.
    pub fn has_leading_handle(&self) -> bool {
        self.0.starts_with("|=")
    }

    /// Consume the row and return its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Animation phase a frame belongs to, in playback order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Caption typed out one character at a time.
    Typing,
    /// Empty gate drawn top to bottom.
    Reveal,
    /// Interior filled with random palette characters.
    Noise,
    /// Interior filled solid.
    Flash,
    /// Gate with the topic embedded.
    Final,
}

/// One complete textual snapshot of the animation.
///
/// `text` is the newline-joined content a presentation layer prints as-is.
/// Typing-phase frames are padded strings rather than box-shaped rows.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Phase that produced this frame.
    pub phase: Phase,
    /// Printable frame content.
    pub text: String,
}

impl Frame {
    /// Build a frame from raw text.
    pub fn raw(phase: Phase, text: impl Into<String>) -> Self {
        Self {
            phase,
            text: text.into(),
        }
    }

    /// Build a frame by joining rows with newlines.
    pub fn from_lines(phase: Phase, lines: &[Line]) -> Self {
        let text = lines
            .iter()
            .map(Line::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        Self { phase, text }
    }

    /// Iterate over the frame's rows.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
