use crate::{
    animation::sequencer::{AnimationSequencer, AsciiArt},
    compose::static_box::StaticBoxComposer,
    foundation::{
        core::Line,
        rng::{PaletteSource, Rng64},
    },
    layout::gate::GateDimensions,
};

/// Animate the gate opening onto `topic` using the default layout.
///
/// Noise frames draw from a freshly seeded [`Rng64`]; use
/// [`generate_ascii_art_with`] for reproducible output.
#[tracing::instrument]
pub fn generate_ascii_art(topic: &str, viewport_width: Option<u32>) -> AsciiArt {
    let dims = GateDimensions::for_viewport(viewport_width);
    generate_ascii_art_with(topic, dims, &mut Rng64::from_entropy())
}

/// Animate the gate opening onto `topic` with explicit dimensions and noise source.
pub fn generate_ascii_art_with(
    topic: &str,
    dims: GateDimensions,
    source: &mut impl PaletteSource,
) -> AsciiArt {
    AnimationSequencer::new(dims).generate(topic, source)
}

/// Lay fixed lines out in a static gate using the default layout.
#[tracing::instrument(skip(lines), fields(line_count = lines.len()))]
pub fn generate_static_ascii_box<S: AsRef<str>>(
    lines: &[S],
    viewport_width: Option<u32>,
) -> Vec<Line> {
    StaticBoxComposer::new(GateDimensions::for_viewport(viewport_width)).compose(lines)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
