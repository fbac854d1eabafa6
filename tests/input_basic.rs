use textio::{Engine, Ids, KeyCode, Keymap};

mod support;
use support::mock_backend::MockBackend;

#[test]
fn decoded_key_is_inserted() {
    let mut table = [0u8; 57];
    table[KeyCode::NUM_9.0 as usize] = b'Q';
    let keymap = Keymap::new(b'A', &table).unwrap();

    let mut ids = Ids::new(3, 0, 0, 80, 1).unwrap();
    ids.set_keymaps(&[&keymap]).unwrap();
    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8);

    let key = eng.process_key(&mut ids, &mut backend, KeyCode::NUM_9);
    assert_eq!(key, KeyCode::NUM_9);
    assert_eq!(ids.data(), b"Q");
    assert!(!ids.is_buffer_full());
}

#[test]
fn insertion_advances_pixel_cursor_by_glyph_width() {
    let mut ids = Ids::alpha(10, 50, 50, 80).unwrap();
    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8).with_width(b'I', 3);

    eng.process_key(&mut ids, &mut backend, KeyCode::NUM_9); // Q
    assert_eq!(ids.cursor_x(), 58);
    eng.process_key(&mut ids, &mut backend, KeyCode::SQUARE); // I
    assert_eq!(ids.cursor_x(), 61);
    assert_eq!(ids.edit_position(), 2);
    assert_eq!(ids.data(), b"QI");
}

#[test]
fn full_buffer_drops_printable_keys() {
    let mut ids = Ids::alpha(3, 0, 0, 80).unwrap();
    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8);

    for key in [KeyCode::NUM_9, KeyCode::MUL, KeyCode::LN] {
        eng.process_key(&mut ids, &mut backend, key);
    }
    assert_eq!(ids.data(), b"QRS");
    assert!(ids.is_buffer_full());

    let key = eng.process_key(&mut ids, &mut backend, KeyCode::MATH);
    assert_eq!(key, KeyCode::MATH);
    assert_eq!(ids.data(), b"QRS");
    assert!(ids.is_buffer_full());
}

#[test]
fn locked_ids_reports_key_without_editing() {
    let mut ids = Ids::alpha(5, 0, 0, 80).unwrap();
    ids.lock(true);
    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8);

    assert_eq!(eng.process_key(&mut ids, &mut backend, KeyCode::MATH), KeyCode::MATH);
    assert_eq!(eng.process_key(&mut ids, &mut backend, KeyCode::CLEAR), KeyCode::CLEAR);
    assert!(ids.is_empty());
    assert!(backend.drawn.is_empty());

    ids.lock(false);
    eng.process_key(&mut ids, &mut backend, KeyCode::MATH);
    assert_eq!(ids.data(), b"A");
}

#[test]
fn unmapped_key_is_ignored() {
    let mut ids = Ids::alpha(5, 0, 0, 80).unwrap();
    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8);

    // Enter has no mapping in the letter keymaps.
    assert_eq!(eng.process_key(&mut ids, &mut backend, KeyCode::ENTER), KeyCode::ENTER);
    assert_eq!(eng.process_key(&mut ids, &mut backend, KeyCode(200)), KeyCode(200));
    assert!(ids.is_empty());
    assert_eq!(ids.edit_position(), 0);
}

#[test]
fn keymap_switch_changes_decoding() {
    let mut ids = Ids::alphanumerical(10, 0, 0, 80).unwrap();
    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8);

    eng.process_key(&mut ids, &mut backend, KeyCode::MATH);
    ids.next_keymap();
    assert_eq!(ids.current_keymap_indicator(), b'a');
    eng.process_key(&mut ids, &mut backend, KeyCode::MATH);
    ids.next_keymap();
    assert_eq!(ids.current_keymap_indicator(), b'1');
    eng.process_key(&mut ids, &mut backend, KeyCode::NUM_7);
    ids.next_keymap();
    assert_eq!(ids.current_keymap_index(), 0);

    assert_eq!(ids.data(), b"Aa7");
}

#[test]
fn insert_in_middle_shifts_tail_right() {
    let mut ids = Ids::alpha(10, 0, 0, 80).unwrap();
    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8);

    eng.process_key(&mut ids, &mut backend, KeyCode::MATH); // A
    eng.process_key(&mut ids, &mut backend, KeyCode::PRGM); // C
    eng.process_key(&mut ids, &mut backend, KeyCode::LEFT);
    eng.process_key(&mut ids, &mut backend, KeyCode::APPS); // B

    assert_eq!(ids.data(), b"ABC");
    assert_eq!(ids.edit_position(), 2);
    assert_eq!(ids.cursor_x(), 16);
}

#[test]
fn field_is_redrawn_after_edit() {
    let mut ids = Ids::alpha(10, 20, 30, 80).unwrap();
    ids.set_cursor_color(0x12);
    ids.set_cursor_dimensions(2, 9).unwrap();
    let mut eng = Engine::builder().background_color(0xEE).build();
    let mut backend = MockBackend::monospace(8);

    eng.process_key(&mut ids, &mut backend, KeyCode::MATH);
    eng.process_key(&mut ids, &mut backend, KeyCode::APPS);

    // Last redraw shows the whole buffer from the field origin.
    let last: Vec<_> = backend.drawn.iter().rev().take(2).rev().copied().collect();
    assert_eq!(last[0].codepoint, b'A');
    assert_eq!((last[0].x, last[0].y), (20, 30));
    assert_eq!(last[1].codepoint, b'B');
    assert_eq!(last[1].x, 28);

    // Background cleared, then the cursor drawn after the last glyph.
    let fills = &backend.fills[backend.fills.len() - 2..];
    assert_eq!(fills[0].color, 0xEE);
    assert_eq!((fills[1].x, fills[1].y), (36, 30));
    assert_eq!((fills[1].width, fills[1].height, fills[1].color), (2, 9, 0x12));
}

#[test]
fn long_input_scrolls_visible_field() {
    // Field shows 3 glyphs of 8 pixels.
    let mut ids = Ids::alpha(10, 0, 0, 24).unwrap();
    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8);

    for _ in 0..5 {
        eng.process_key(&mut ids, &mut backend, KeyCode::MATH);
    }
    assert_eq!(ids.len(), 5);
    assert_eq!(ids.scroll_offset(), 2);
    assert_eq!(ids.cursor_x(), 24);

    // Walking back to the start scrolls the field back.
    for _ in 0..5 {
        eng.process_key(&mut ids, &mut backend, KeyCode::LEFT);
    }
    assert_eq!(ids.scroll_offset(), 0);
    assert_eq!(ids.cursor_x(), 0);
}

#[test]
fn zero_capacity_field_is_always_full() {
    let mut ids = Ids::alpha(0, 0, 0, 80).unwrap();
    assert_eq!(ids.len(), 0);
    assert!(ids.is_buffer_full());

    let mut eng = Engine::new();
    let mut backend = MockBackend::monospace(8);
    eng.process_key(&mut ids, &mut backend, KeyCode::MATH);
    assert!(ids.is_empty());
    assert!(ids.is_buffer_full());

    eng.process_key(&mut ids, &mut backend, KeyCode::CLEAR);
    assert!(ids.is_buffer_full());
}
