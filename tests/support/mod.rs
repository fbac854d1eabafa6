#![allow(dead_code)]

pub mod mock_backend;
pub mod mock_keypad;
