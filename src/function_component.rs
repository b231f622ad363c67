// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Host-side rendering contract. A function component owns a writer and
//! knows how to paint a state as one full frame, how to allocate vertical
//! space for the frame ahead of the first paint, and how to clear that space
//! again on exit. Frames fully replace each other in place; there is no
//! incremental diffing.

use std::io::{Result, Write};

use crossterm::{
    cursor::{MoveToNextLine, MoveToPreviousLine},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

pub trait FunctionComponent<W: Write, S> {
    fn get_write(&mut self) -> &mut W;

    /// Number of display rows the component manages. Must stay constant for
    /// the lifetime of the prompt so that allocation and clearing agree.
    fn calculate_viewport_height(&self, state: &S) -> usize;

    fn render(&mut self, state: &S) -> Result<()>;

    /// Print enough newlines for the viewport (scrolling the terminal if the
    /// cursor is near the bottom), then move the cursor back up to the first
    /// viewport row. Required so that the relative cursor movements used
    /// while rendering land on real rows.
    fn allocate_viewport_height_space(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();

        for _ in 0..viewport_height {
            queue!(writer, Print("\n"))?;
        }
        if viewport_height > 0 {
            queue!(writer, MoveToPreviousLine(viewport_height as u16))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Erase every viewport row and move the cursor back to the first one.
    fn clear_viewport(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();

        for _ in 0..viewport_height {
            queue!(writer, Clear(ClearType::CurrentLine), MoveToNextLine(1))?;
        }
        if viewport_height > 0 {
            queue!(writer, MoveToPreviousLine(viewport_height as u16))?;
        }

        writer.flush()?;
        Ok(())
    }
}
