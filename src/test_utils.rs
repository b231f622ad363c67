// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for driving the prompt without a terminal: an in-memory
//! writer capturing emitted frames, and a scripted key-press reader.

use std::io::{Result, Write};

use crate::{KeyPress, KeyPressReader};

pub struct TestStringWriter {
    buffer: String,
}

impl Default for TestStringWriter {
    fn default() -> Self { Self::new() }
}

impl TestStringWriter {
    pub fn new() -> Self {
        TestStringWriter {
            buffer: String::new(),
        }
    }

    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let result = std::str::from_utf8(buf);
        match result {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Replays a scripted sequence of key presses. Wraps around at the end of
/// the vector, so the sequence should terminate the prompt (enter or esc).
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<KeyPress>,
    pub index: Option<usize>,
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> Option<KeyPress> {
        // Increment index every time this function is called until the end
        // of the vector and then wrap around.
        match self.index {
            Some(index) => {
                if index < self.key_press_vec.len() - 1 {
                    self.index = Some(index + 1);
                } else {
                    self.index = Some(0);
                }
            }
            None => {
                self.index = Some(0);
            }
        }

        let index = self.index?;

        self.key_press_vec.get(index).copied()
    }
}

pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|it| it == '\x1b')
}
