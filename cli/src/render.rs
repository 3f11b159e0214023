use std::io::{self, Write};

use mazerun_core::Snapshot;

use crate::settings::RenderMode;

/// Draws a frame for the current game state.
pub(crate) trait Renderer {
    fn render(&mut self, out: &mut dyn Write, snapshot: &Snapshot) -> io::Result<()>;
}

pub(crate) fn renderer_for(mode: RenderMode) -> Box<dyn Renderer> {
    match mode {
        RenderMode::Text => Box::new(TextRenderer),
        RenderMode::Json => Box::new(JsonRenderer),
    }
}

#[derive(Debug, Default)]
pub(crate) struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&mut self, out: &mut dyn Write, snapshot: &Snapshot) -> io::Result<()> {
        write!(out, "{snapshot}")?;
        writeln!(
            out,
            "Turn {}, depth limit {}",
            snapshot.turn, snapshot.depth_bound
        )
    }
}

#[derive(Debug, Default)]
pub(crate) struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&mut self, out: &mut dyn Write, snapshot: &Snapshot) -> io::Result<()> {
        serde_json::to_writer(&mut *out, snapshot)?;
        writeln!(out)
    }
}
