//! asciigate draws a fixed-width ASCII "gate" around a short label and
//! generates the frames of its opening animation.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `viewport width -> GateDimensions` (20 or 48 interior columns, 9 rows)
//! 2. **Compose**: label or fixed lines -> finished rows (`Line`)
//! 3. **Sequence**: label -> ordered `Frame`s (typing, reveal, noise, flash, final)
//! 4. **Playback** (optional): elapsed time -> frame to show, held on the last one
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: generation never performs IO, never sleeps, and never fails.
//! - **Deterministic-by-default**: only noise-phase interiors vary, and only through an
//!   injected [`PaletteSource`].
//! - **Fixed shape**: every finished row is `gate_width + 2` characters and exactly one
//!   interior row carries the handle marker.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod foundation;
mod layout;
mod pipeline;

pub use animation::playback::{FRAME_INTERVAL, Playback};
pub use animation::sequencer::{
    AnimationSequencer, AsciiArt, CAPTION_HOLD_FRAMES, NOISE_FRAMES, NOISE_PALETTE,
    OPENING_CAPTION,
};
pub use compose::marker::{HandleMarker, HandleSide, locate_handle};
pub use compose::static_box::{EDITORIAL_LINES, StaticBoxComposer};
pub use compose::topic::{fit_topic, frame_topic};
pub use foundation::core::{Frame, Line, Phase};
pub use foundation::error::{GateError, GateResult};
pub use foundation::rng::{PaletteSource, Rng64};
pub use layout::gate::{GateConfig, GateDimensions, MIN_GATE_WIDTH, WidthClass};
pub use pipeline::{generate_ascii_art, generate_ascii_art_with, generate_static_ascii_box};
