use super::*;
use crate::foundation::rng::Rng64;

fn desktop() -> AnimationSequencer {
    AnimationSequencer::new(GateDimensions::for_viewport(None))
}

fn mobile() -> AnimationSequencer {
    AnimationSequencer::new(GateDimensions::for_viewport(Some(360)))
}

fn phases(art: &AsciiArt) -> Vec<Phase> {
    art.frames.iter().map(|f| f.phase).collect()
}

#[test]
fn frame_count_matches_phase_budget() {
    let seq = desktop();
    let art = seq.generate("ev", &mut Rng64::new(1));
    assert_eq!(seq.frame_count(), 19 + 3 + 12 + 5 + 1 + 1);
    assert_eq!(art.frames.len(), seq.frame_count());
}

#[test]
fn phases_appear_in_fixed_order() {
    let art = mobile().generate("ev", &mut Rng64::new(2));
    let p = phases(&art);
    let mut sorted = p.clone();
    sorted.sort();
    assert_eq!(p, sorted);
    assert_eq!(p.iter().filter(|x| **x == Phase::Typing).count(), 22);
    assert_eq!(p.iter().filter(|x| **x == Phase::Reveal).count(), 12);
    assert_eq!(p.iter().filter(|x| **x == Phase::Noise).count(), 5);
    assert_eq!(p.iter().filter(|x| **x == Phase::Flash).count(), 1);
    assert_eq!(p.iter().filter(|x| **x == Phase::Final).count(), 1);
}

#[test]
fn typing_frames_grow_one_char_then_hold_then_clear() {
    let art = desktop().generate("ev", &mut Rng64::new(3));
    let pad = "\n".repeat(5);
    assert_eq!(art.frames[0].text, format!("{pad}k{pad}"));
    assert_eq!(art.frames[3].text, format!("{pad}kapı{pad}"));
    assert_eq!(art.frames[18].text, format!("{pad}{OPENING_CAPTION}{pad}"));
    assert_eq!(art.frames[19], art.frames[18]);
    assert_eq!(art.frames[20], art.frames[18]);
    assert_eq!(art.frames[21].text, "\n".repeat(11));
    assert_eq!(art.frames[22].phase, Phase::Reveal);
}

#[test]
fn reveal_draws_gate_top_down_then_holds() {
    let seq = mobile();
    let art = seq.generate("ev", &mut Rng64::new(4));
    let gate = rows::empty_gate(seq.dimensions());
    let reveal: Vec<&Frame> = art
        .frames
        .iter()
        .filter(|f| f.phase == Phase::Reveal)
        .collect();
    for (i, frame) in reveal.iter().take(11).enumerate() {
        assert_eq!(frame.lines().count(), i + 1);
        assert_eq!(frame.lines().last(), Some(gate[i].as_str()));
    }
    assert_eq!(reveal[11], reveal[10]);
    assert_eq!(reveal[11].lines().nth(5), Some(gate[5].as_str()));
    assert!(gate[5].has_trailing_handle());
}

#[test]
fn noise_frames_keep_borders_and_interior_width() {
    let seq = desktop();
    let art = seq.generate("ev", &mut Rng64::new(5));
    let border = rows::border(seq.dimensions());
    for frame in art.frames.iter().filter(|f| f.phase == Phase::Noise) {
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], border.as_str());
        assert_eq!(lines[10], border.as_str());
        for row in &lines[1..10] {
            let inner: Vec<char> = row.chars().collect();
            assert_eq!(inner.len(), 50);
            assert_eq!(inner[0], '|');
            assert_eq!(inner[49], '|');
            assert!(inner[1..49].iter().all(|c| NOISE_PALETTE.contains(*c)));
        }
    }
}

#[test]
fn injected_source_controls_noise_content() {
    // Index 4 of the palette is the degree sign.
    let art = mobile().generate("ev", &mut |_len: usize| 4usize);
    let noise = art
        .frames
        .iter()
        .find(|f| f.phase == Phase::Noise)
        .unwrap();
    let row = noise.lines().nth(1).unwrap();
    assert_eq!(row, format!("|{}|", "°".repeat(20)));
}

#[test]
fn out_of_range_source_values_are_clamped() {
    let art = mobile().generate("ev", &mut |_len: usize| usize::MAX);
    let noise = art
        .frames
        .iter()
        .find(|f| f.phase == Phase::Noise)
        .unwrap();
    assert_eq!(noise.lines().nth(3), Some(format!("|{}|", ".".repeat(20)).as_str()));
}

#[test]
fn flash_fills_interior_with_hashes() {
    let art = mobile().generate("ev", &mut Rng64::new(6));
    let flash = &art.frames[art.frames.len() - 2];
    assert_eq!(flash.phase, Phase::Flash);
    let lines: Vec<&str> = flash.lines().collect();
    for row in &lines[1..10] {
        assert_eq!(*row, format!("|{}|", "#".repeat(20)));
    }
}

#[test]
fn final_frame_is_final_art_with_single_handle() {
    let art = desktop().generate("ev", &mut Rng64::new(7));
    let last = art.frames.last().unwrap();
    assert_eq!(*last, Frame::from_lines(Phase::Final, &art.final_art));
    assert_eq!(art.final_art.len(), 11);
    assert!(art.final_art.iter().all(|l| l.width() == 50));

    let handles: Vec<usize> = art
        .final_art
        .iter()
        .enumerate()
        .filter(|(_, l)| l.has_trailing_handle())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(handles, vec![5]);
    assert_eq!(
        art.final_art[5].as_str(),
        format!("| ev {}=|", " ".repeat(43))
    );
    assert_eq!(art.handle.row, 5);
    assert_eq!(art.handle.column, 48);
}

#[test]
fn same_seed_gives_identical_animation() {
    let a = desktop().generate("kapı", &mut Rng64::new(99));
    let b = desktop().generate("kapı", &mut Rng64::new(99));
    assert_eq!(a, b);
}

#[test]
fn custom_caption_changes_typing_length() {
    let seq = mobile().with_caption("açıl");
    let art = seq.generate("ev", &mut Rng64::new(8));
    assert_eq!(art.frames.len(), seq.frame_count());
    assert_eq!(
        art.frames
            .iter()
            .filter(|f| f.phase == Phase::Typing)
            .count(),
        4 + 3
    );
}

#[test]
fn even_door_height_pads_typing_frames_unevenly() {
    let seq = AnimationSequencer::new(GateDimensions::new(20, 10).unwrap());
    let art = seq.generate("ev", &mut Rng64::new(9));
    assert_eq!(art.frames.len(), seq.frame_count());
    let above = "\n".repeat(5);
    let below = "\n".repeat(6);
    assert_eq!(art.frames[0].text, format!("{above}k{below}"));
    assert_eq!(art.frames[21].text, "\n".repeat(12));
    assert_eq!(art.final_art.len(), 12);
    assert_eq!(art.handle.row, 6);
    assert!(art.final_art[6].has_trailing_handle());
}
