use std::cell::{Cell, RefCell};

use textio::routines::LIBRARY_VERSION;
use textio::{Engine, Ids, KeyCode, LibraryRoutines, TextBackend, TextLayout};

thread_local! {
    static POS: Cell<(u32, u32)> = const { Cell::new((0, 0)) };
    static DRAWN: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

fn set_text_position(x: u32, y: u32) {
    POS.with(|p| p.set((x, y)));
}

fn get_text_x() -> u32 {
    POS.with(|p| p.get().0)
}

fn get_text_y() -> u32 {
    POS.with(|p| p.get().1)
}

fn draw_char(c: u8) {
    DRAWN.with(|d| d.borrow_mut().push(c));
    POS.with(|p| {
        let (x, y) = p.get();
        p.set((x + get_char_width(c), y));
    });
}

fn get_char_width(_c: u8) -> u32 {
    5
}

fn routines() -> LibraryRoutines {
    POS.with(|p| p.set((0, 0)));
    DRAWN.with(|d| d.borrow_mut().clear());
    LibraryRoutines::new(
        set_text_position,
        get_text_x,
        get_text_y,
        draw_char,
        get_char_width,
    )
}

#[test]
fn record_carries_layout_version() {
    let r = routines();
    assert_eq!(r.library_version, LIBRARY_VERSION);
    assert_eq!(LIBRARY_VERSION, 2);
}

#[test]
fn routines_forward_to_function_pointers() {
    let mut r = routines();
    r.set_cursor(12, 34);
    assert_eq!((r.cursor_x(), r.cursor_y()), (12, 34));
    r.draw_glyph(b'Q');
    assert_eq!(r.cursor_x(), 17);
    assert_eq!(r.glyph_width(b'Q'), 5);
    DRAWN.with(|d| assert_eq!(*d.borrow(), b"Q"));
}

#[test]
fn engines_draw_through_routines() {
    let mut r = routines();
    let mut layout = TextLayout::new();
    layout.set_window(0, 0, 10, 100);
    layout.print_text(&mut r, b"abc", 0);
    DRAWN.with(|d| assert_eq!(*d.borrow(), b"abc"));
    // Two 5-pixel glyphs fill the window, so "c" starts the second line.
    assert_eq!(r.cursor_x(), 5);

    let mut r = routines();
    let mut ids = Ids::alpha(4, 0, 0, 40).unwrap();
    let mut eng = Engine::new();
    eng.process_key(&mut ids, &mut r, KeyCode::MATH);
    assert_eq!(ids.data(), b"A");
    assert_eq!(ids.cursor_x(), 5);
    DRAWN.with(|d| assert_eq!(*d.borrow(), b"A"));
}
