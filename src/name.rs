//! Program and appvar name conversion.
//!
//! The OS stores theta as 0x5B, which most fonts draw as `[`. Input fields
//! store whatever codepoint the current font uses for theta instead, so
//! names are converted when they cross between the two.

/// Codepoint of theta in OS variable names.
pub const NATIVE_THETA: u8 = 0x5B;

/// Replaces every `theta` in `name` with [`NATIVE_THETA`].
pub fn to_native_name(name: &mut [u8], theta: u8) -> &mut [u8] {
    replace(name, theta, NATIVE_THETA)
}

/// Replaces every [`NATIVE_THETA`] in `name` with `theta`.
pub fn from_native_name(name: &mut [u8], theta: u8) -> &mut [u8] {
    replace(name, NATIVE_THETA, theta)
}

fn replace(name: &mut [u8], from: u8, to: u8) -> &mut [u8] {
    for c in name.iter_mut().filter(|c| **c == from) {
        *c = to;
    }
    name
}
