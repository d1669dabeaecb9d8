use super::*;
use crate::{
    compose::{rows, static_box::StaticBoxComposer, topic::frame_topic},
    layout::gate::GateDimensions,
};

#[test]
fn finds_trailing_handle_in_final_gate() {
    let d = GateDimensions::for_viewport(None);
    let middle = d.middle_row();
    let gate = rows::gate_with(d, |i| {
        if i == middle {
            frame_topic("ev", d)
        } else {
            rows::blank(d)
        }
    });
    let m = locate_handle(&gate).unwrap();
    assert_eq!(m.row, 5);
    assert_eq!(m.column, 48);
    assert_eq!(m.side, HandleSide::Trailing);
    assert_eq!(gate[m.row].as_str().chars().nth(m.column), Some('='));
}

#[test]
fn finds_leading_handle_in_static_box() {
    let d = GateDimensions::for_viewport(Some(500));
    let out = StaticBoxComposer::new(d).compose(&["x"]);
    let m = locate_handle(&out).unwrap();
    assert_eq!(m.row, 5);
    assert_eq!(m.column, 1);
    assert_eq!(m.side, HandleSide::Leading);
}

#[test]
fn borders_alone_carry_no_handle() {
    let d = GateDimensions::for_viewport(Some(500));
    let out = vec![rows::border(d), rows::blank(d), rows::border(d)];
    assert_eq!(locate_handle(&out), None);
    assert_eq!(locate_handle(&[]), None);
}
