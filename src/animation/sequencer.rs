use crate::{
    compose::{
        marker::{HandleMarker, HandleSide},
        rows,
        topic::frame_topic,
    },
    foundation::{
        core::{Frame, Line, Phase},
        rng::PaletteSource,
    },
    layout::gate::GateDimensions,
};

/// Caption typed out before the gate appears.
pub const OPENING_CAPTION: &str = "kapılar açılıyor...";
/// Sampling domain for the noise phase. Repeated characters are weighted.
pub const NOISE_PALETTE: &str = ".*+*°*+*.";
/// Extra copies of the full caption after typing completes.
pub const CAPTION_HOLD_FRAMES: usize = 2;
/// Number of noise frames.
pub const NOISE_FRAMES: usize = 5;

const FLASH_CHAR: char = '#';

/// Result of one gate animation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AsciiArt {
    /// Finished gate with the topic embedded; same content as the last frame.
    pub final_art: Vec<Line>,
    /// Every frame in playback order.
    pub frames: Vec<Frame>,
    /// Where the handle sits in `final_art`.
    pub handle: HandleMarker,
}

/// Builds the gate-opening animation for a topic.
///
/// Phases run in a fixed order: typing, reveal, noise, flash, final. Only
/// the noise interiors depend on the [`PaletteSource`].
#[derive(Clone, Debug)]
pub struct AnimationSequencer {
    dims: GateDimensions,
    caption: String,
    palette: Vec<char>,
}

impl AnimationSequencer {
    /// Sequencer with the stock caption and palette.
    pub fn new(dims: GateDimensions) -> Self {
        Self {
            dims,
            caption: OPENING_CAPTION.to_string(),
            palette: NOISE_PALETTE.chars().collect(),
        }
    }

    /// Replace the typed caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Dimensions every box frame uses.
    pub fn dimensions(&self) -> GateDimensions {
        self.dims
    }

    /// Frames [`generate`](Self::generate) will emit.
    pub fn frame_count(&self) -> usize {
        let typing = self.caption.chars().count() + CAPTION_HOLD_FRAMES + 1;
        let reveal = self.dims.box_height() + 1;
        typing + reveal + NOISE_FRAMES + 2
    }

    /// Generate every frame plus the finished gate.
    #[tracing::instrument(skip(self, source), fields(gate_width = self.dims.gate_width()))]
    pub fn generate(&self, topic: &str, source: &mut impl PaletteSource) -> AsciiArt {
        let mut frames = Vec::with_capacity(self.frame_count());

        self.push_typing(&mut frames);
        self.push_reveal(&mut frames);
        for _ in 0..NOISE_FRAMES {
            frames.push(Frame::from_lines(Phase::Noise, &self.noise_gate(source)));
        }
        frames.push(Frame::from_lines(Phase::Flash, &self.flash_gate()));

        let final_art = self.final_gate(topic);
        frames.push(Frame::from_lines(Phase::Final, &final_art));

        let handle = HandleMarker {
            row: 1 + self.dims.middle_row(),
            column: self.dims.line_width() - 2,
            side: HandleSide::Trailing,
        };

        tracing::debug!(frames = frames.len(), "gate animation generated");
        AsciiArt {
            final_art,
            frames,
            handle,
        }
    }

    fn push_typing(&self, frames: &mut Vec<Frame>) {
        let span = self.dims.box_height() - 1;
        let above = "\n".repeat(span / 2);
        let below = "\n".repeat(span.div_ceil(2));

        let typed = |prefix: &str| Frame::raw(Phase::Typing, format!("{above}{prefix}{below}"));

        for (byte, ch) in self.caption.char_indices() {
            frames.push(typed(&self.caption[..byte + ch.len_utf8()]));
        }
        for _ in 0..CAPTION_HOLD_FRAMES {
            frames.push(typed(self.caption.as_str()));
        }
        frames.push(Frame::raw(Phase::Typing, "\n".repeat(self.dims.box_height())));
    }

    fn push_reveal(&self, frames: &mut Vec<Frame>) {
        let gate = rows::empty_gate(self.dims);
        for n in 1..=gate.len() {
            frames.push(Frame::from_lines(Phase::Reveal, &gate[..n]));
        }
        frames.push(Frame::from_lines(Phase::Reveal, &gate));
    }

    fn noise_gate(&self, source: &mut impl PaletteSource) -> Vec<Line> {
        let len = self.palette.len();
        rows::gate_with(self.dims, |_| {
            let interior: String = (0..self.dims.gate_width())
                .map(|_| self.palette[source.next_index(len).min(len - 1)])
                .collect();
            rows::enclose(&interior)
        })
    }

    fn flash_gate(&self) -> Vec<Line> {
        rows::gate_with(self.dims, |_| rows::filled(self.dims, FLASH_CHAR))
    }

    fn final_gate(&self, topic: &str) -> Vec<Line> {
        let middle = self.dims.middle_row();
        rows::gate_with(self.dims, |i| {
            if i == middle {
                frame_topic(topic, self.dims)
            } else {
                rows::blank(self.dims)
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequencer.rs"]
mod tests;
