//! Full pointer gestures: down, move, up through the board.

use crate::helpers::{TestBoardBuilder, drag, item, pan, stale_id};
use moodart::Board;
use moodart::input::{GestureKind, PointerButton, PointerDown, PointerTarget, ResizeCorner};

#[test]
fn test_create_drag_zoom_drag() {
    let mut board = Board::new();
    board.set_viewport_size(1000.0, 800.0);

    let id = board.add_note();
    let note = item(&board, id);
    assert_eq!(note.position, (100.0, 100.0));
    assert_eq!(note.size, (240.0, 140.0));
    assert_eq!(note.z_index, 0);
    assert_eq!(board.selected(), Some(id));

    drag(&mut board, id, (500.0, 500.0), &[(520.0, 510.0), (550.0, 530.0)]);
    assert_eq!(item(&board, id).position, (150.0, 130.0));

    board.set_zoom(2.0);
    drag(&mut board, id, (300.0, 300.0), &[(340.0, 300.0)]);
    assert_eq!(item(&board, id).position, (170.0, 130.0));
}

#[test]
fn test_drag_selects_and_promotes() {
    let (mut board, ids) = TestBoardBuilder::new().with_n_notes(3).build();
    board.handle_pointer_down(&PointerDown::primary((0.0, 0.0), PointerTarget::ItemBody(ids[0])));

    assert_eq!(board.selected(), Some(ids[0]));
    assert_eq!(item(&board, ids[0]).z_index, 3);
    assert!(board.input_state().is_dragging());
    assert!(board.is_text_selection_suppressed());

    board.handle_pointer_up();
    assert!(board.input_state().is_idle());
    assert!(!board.is_text_selection_suppressed());
}

#[test]
fn test_pan_is_screen_space() {
    let (mut board, _) = TestBoardBuilder::new().with_zoom(2.5).build();
    pan(&mut board, (100.0, 100.0), (160.0, 40.0));
    assert_eq!(board.viewport().pan(), (60.0, -60.0));

    pan(&mut board, (0.0, 0.0), (-10.0, 10.0));
    assert_eq!(board.viewport().pan(), (50.0, -50.0));
}

#[test]
fn test_background_press_deselects() {
    let (mut board, _) = TestBoardBuilder::new().with_n_notes(1).build();
    let started = board.handle_pointer_down(&PointerDown::primary((0.0, 0.0), PointerTarget::Background));
    assert_eq!(started, Some(GestureKind::Pan));
    assert_eq!(board.selected(), None);
}

#[test]
fn test_secondary_button_does_not_pan() {
    let mut board = Board::new();
    let event = PointerDown {
        position: (0.0, 0.0),
        button: PointerButton::Secondary,
        target: PointerTarget::Background,
    };
    assert_eq!(board.handle_pointer_down(&event), None);
    assert!(board.input_state().is_idle());
}

#[test]
fn test_gestures_are_mutually_exclusive() {
    let (mut board, ids) = TestBoardBuilder::new().with_n_notes(2).build();

    let resize = PointerDown::primary((0.0, 0.0), PointerTarget::ResizeHandle(ids[0], ResizeCorner::SouthEast));
    assert_eq!(board.handle_pointer_down(&resize), Some(GestureKind::Resize));

    // A second press while resizing starts nothing
    let body = PointerDown::primary((0.0, 0.0), PointerTarget::ItemBody(ids[1]));
    assert_eq!(board.handle_pointer_down(&body), None);
    let background = PointerDown::primary((0.0, 0.0), PointerTarget::Background);
    assert_eq!(board.handle_pointer_down(&background), None);
    assert!(board.input_state().is_resizing());

    // Moving resizes only; position and pan stay put
    board.handle_pointer_move((20.0, 20.0));
    assert_eq!(item(&board, ids[0]).position, (0.0, 0.0));
    assert_eq!(item(&board, ids[0]).size, (260.0, 160.0));
    assert_eq!(board.viewport().pan(), (0.0, 0.0));

    assert_eq!(board.handle_pointer_up(), Some(GestureKind::Resize));
    assert_eq!(board.handle_pointer_up(), None);
}

#[test]
fn test_moves_without_gesture_change_nothing() {
    let (mut board, ids) = TestBoardBuilder::new().with_n_notes(1).build();
    assert!(!board.handle_pointer_move((300.0, 300.0)));
    assert_eq!(item(&board, ids[0]).position, (0.0, 0.0));
}

#[test]
fn test_item_removed_mid_drag() {
    let (mut board, ids) = TestBoardBuilder::new().with_n_notes(1).build();
    board.handle_pointer_down(&PointerDown::primary((0.0, 0.0), PointerTarget::ItemBody(ids[0])));
    board.remove_item(ids[0]);

    assert!(!board.handle_pointer_move((50.0, 50.0)));
    assert_eq!(board.handle_pointer_up(), Some(GestureKind::Drag));
    assert!(board.items().is_empty());
}

#[test]
fn test_press_on_stale_item_is_ignored() {
    let mut board = Board::new();
    let press = PointerDown::primary((0.0, 0.0), PointerTarget::ItemBody(stale_id()));
    assert_eq!(board.handle_pointer_down(&press), None);
    assert!(board.input_state().is_idle());
}

#[test]
fn test_editing_item_consumes_its_press() {
    let (mut board, ids) = TestBoardBuilder::new().with_n_notes(2).build();
    assert!(board.begin_editing(ids[0]));

    let press = PointerDown::primary((0.0, 0.0), PointerTarget::ItemBody(ids[0]));
    assert_eq!(board.handle_pointer_down(&press), None);
    assert!(!board.is_text_selection_suppressed());
    assert_eq!(board.editing(), Some(ids[0]));

    // Pressing another item ends editing and drags that one instead
    let other = PointerDown::primary((0.0, 0.0), PointerTarget::ItemBody(ids[1]));
    assert_eq!(board.handle_pointer_down(&other), Some(GestureKind::Drag));
    assert_eq!(board.editing(), None);
}

#[test]
fn test_hit_test_feeds_pointer_down() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note("a", (0.0, 0.0))
        .with_viewport_size(800.0, 600.0)
        .build();

    let handle = board.board_to_screen((240.0, 140.0));
    let target = board.hit_test(handle);
    assert_eq!(target, PointerTarget::ResizeHandle(ids[0], ResizeCorner::SouthEast));

    board.handle_pointer_down(&PointerDown::primary(handle, target));
    board.handle_pointer_move((handle.0 + 30.0, handle.1 + 10.0));
    board.handle_pointer_up();
    assert_eq!(item(&board, ids[0]).size, (270.0, 150.0));
}

#[test]
fn test_clear_aborts_gesture() {
    let (mut board, ids) = TestBoardBuilder::new().with_n_notes(2).build();
    board.handle_pointer_down(&PointerDown::primary((0.0, 0.0), PointerTarget::ItemBody(ids[1])));

    assert_eq!(board.clear(), 2);
    assert!(board.input_state().is_idle());
    assert!(!board.is_text_selection_suppressed());
    assert_eq!(board.selected(), None);
}
