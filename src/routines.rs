//! Function-pointer text routines.
//!
//! [`LibraryRoutines`] is the fixed-shape record (version byte plus five
//! routines) that device programs fill in to hand their graphics library to
//! the engines. The `graphx` and `fontlib` features provide ready-made
//! records for the two supported libraries; enabling either links against
//! that library.

use crate::traits::TextBackend;

/// Version of the routine record layout.
pub const LIBRARY_VERSION: u8 = 2;

/// A [`TextBackend`] made of plain function pointers.
#[derive(Debug, Clone, Copy)]
pub struct LibraryRoutines {
    pub library_version: u8,
    pub set_text_position: fn(u32, u32),
    pub get_text_x: fn() -> u32,
    pub get_text_y: fn() -> u32,
    pub draw_char: fn(u8),
    pub get_char_width: fn(u8) -> u32,
}

impl LibraryRoutines {
    pub const fn new(
        set_text_position: fn(u32, u32),
        get_text_x: fn() -> u32,
        get_text_y: fn() -> u32,
        draw_char: fn(u8),
        get_char_width: fn(u8) -> u32,
    ) -> Self {
        Self {
            library_version: LIBRARY_VERSION,
            set_text_position,
            get_text_x,
            get_text_y,
            draw_char,
            get_char_width,
        }
    }
}

impl TextBackend for LibraryRoutines {
    fn set_cursor(&mut self, x: u32, y: u32) {
        (self.set_text_position)(x, y)
    }

    fn cursor_x(&self) -> u32 {
        (self.get_text_x)()
    }

    fn cursor_y(&self) -> u32 {
        (self.get_text_y)()
    }

    fn draw_glyph(&mut self, codepoint: u8) {
        (self.draw_char)(codepoint)
    }

    fn glyph_width(&self, codepoint: u8) -> u32 {
        (self.get_char_width)(codepoint)
    }
}

#[cfg(feature = "graphx")]
mod graphx {
    use core::ffi::{c_char, c_int, c_uint};

    unsafe extern "C" {
        fn gfx_SetTextXY(x: c_int, y: c_int);
        fn gfx_GetTextX() -> c_int;
        fn gfx_GetTextY() -> c_int;
        fn gfx_PrintChar(c: c_char);
        fn gfx_GetCharWidth(c: c_char) -> c_uint;
    }

    pub(super) fn set_text_xy(x: u32, y: u32) {
        unsafe { gfx_SetTextXY(x as c_int, y as c_int) }
    }

    pub(super) fn get_text_x() -> u32 {
        unsafe { gfx_GetTextX() as u32 }
    }

    pub(super) fn get_text_y() -> u32 {
        unsafe { gfx_GetTextY() as u32 }
    }

    pub(super) fn print_char(codepoint: u8) {
        unsafe { gfx_PrintChar(codepoint as c_char) }
    }

    pub(super) fn get_char_width(codepoint: u8) -> u32 {
        unsafe { gfx_GetCharWidth(codepoint as c_char) as u32 }
    }
}

#[cfg(feature = "graphx")]
impl LibraryRoutines {
    /// Routines for the GraphX library's built-in font.
    pub const GRAPHX: LibraryRoutines = LibraryRoutines::new(
        graphx::set_text_xy,
        graphx::get_text_x,
        graphx::get_text_y,
        graphx::print_char,
        graphx::get_char_width,
    );
}

#[cfg(feature = "fontlib")]
mod fontlib {
    use core::ffi::{c_uchar, c_uint};

    unsafe extern "C" {
        fn fontlib_SetCursorPosition(x: c_uint, y: c_uchar);
        fn fontlib_GetCursorX() -> c_uint;
        fn fontlib_GetCursorY() -> c_uchar;
        fn fontlib_DrawGlyph(glyph: c_uchar) -> c_uint;
        fn fontlib_GetGlyphWidth(glyph: c_uchar) -> c_uchar;
    }

    pub(super) fn set_cursor_position(x: u32, y: u32) {
        unsafe { fontlib_SetCursorPosition(x as c_uint, y as c_uchar) }
    }

    pub(super) fn get_cursor_x() -> u32 {
        unsafe { fontlib_GetCursorX() as u32 }
    }

    pub(super) fn get_cursor_y() -> u32 {
        unsafe { fontlib_GetCursorY() as u32 }
    }

    pub(super) fn draw_glyph(codepoint: u8) {
        unsafe {
            fontlib_DrawGlyph(codepoint);
        }
    }

    pub(super) fn get_glyph_width(codepoint: u8) -> u32 {
        unsafe { fontlib_GetGlyphWidth(codepoint) as u32 }
    }
}

#[cfg(feature = "fontlib")]
impl LibraryRoutines {
    /// Routines for FontLibC. The font must be selected with the library
    /// itself before drawing.
    pub const FONTLIB: LibraryRoutines = LibraryRoutines::new(
        fontlib::set_cursor_position,
        fontlib::get_cursor_x,
        fontlib::get_cursor_y,
        fontlib::draw_glyph,
        fontlib::get_glyph_width,
    );
}
