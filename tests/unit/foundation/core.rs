use super::*;

#[test]
fn line_width_counts_chars_not_bytes() {
    let line = Line::new("|°°|");
    assert_eq!(line.width(), 4);
    assert!(line.as_str().len() > 4);
}

#[test]
fn handle_conventions_match_row_edges() {
    assert!(Line::new("| ev   =|").has_trailing_handle());
    assert!(!Line::new("| ev   =|").has_leading_handle());
    assert!(Line::new("|=   ev|").has_leading_handle());
    assert!(!Line::new("+======+").has_trailing_handle());
    assert!(!Line::new("+======+").has_leading_handle());
}

#[test]
fn frame_from_lines_joins_with_newlines() {
    let rows = [Line::new("+==+"), Line::new("|  |"), Line::new("+==+")];
    let frame = Frame::from_lines(Phase::Reveal, &rows);
    assert_eq!(frame.text, "+==+\n|  |\n+==+");
    assert_eq!(frame.lines().count(), 3);
}

#[test]
fn phase_serializes_lowercase() {
    let s = serde_json::to_string(&Phase::Noise).unwrap();
    assert_eq!(s, "\"noise\"");
}

#[test]
fn line_serializes_as_plain_string() {
    let s = serde_json::to_string(&Line::new("|x|")).unwrap();
    assert_eq!(s, "\"|x|\"");
}
