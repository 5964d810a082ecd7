//! GameOverView: final score, the high-score name prompt and the table.
//!
//! Pure like [`crate::game_view`]; the driver owns the prompt state and
//! passes it in each frame.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{color_rgb, draw_too_small, Viewport, MIN_VIEWPORT};
use crate::highscore::{HighScore, MAX_NAME_LEN};
use crate::types::Color;

/// Where the player is in the name entry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePrompt<'a> {
    /// Score qualifies; the name typed so far.
    Editing(&'a str),
    /// The entry was written.
    Saved,
    /// Writing the entry failed; the driver logged why.
    SaveFailed,
    /// Score did not make the table.
    NotQualified,
}

#[derive(Debug, Default)]
pub struct GameOverView;

impl GameOverView {
    pub fn render_into(
        &self,
        score: u32,
        prompt: NamePrompt<'_>,
        entries: &[HighScore],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        if !viewport.fits(MIN_VIEWPORT) {
            draw_too_small(fb, viewport);
            return;
        }

        let w = viewport.width;
        let plain = CellStyle::default();
        let mut y = 2;

        fb.put_str_centered(0, w, y, "GAME OVER", CellStyle::fg(color_rgb(Color::Red)).bold());
        y += 1;
        fb.put_str_centered(0, w, y, &format!("Final Score: {}", score), plain);
        y += 2;

        match prompt {
            NamePrompt::Editing(name) => {
                fb.put_str_centered(
                    0,
                    w,
                    y,
                    "New High Score!",
                    CellStyle::fg(color_rgb(Color::Yellow)).bold(),
                );
                y += 1;
                // Pad to the full width so the line does not shift while typing.
                let field = format!("Enter name: {:<width$}", format!("{}_", name), width = MAX_NAME_LEN + 1);
                fb.put_str_centered(0, w, y, &field, plain);
                y += 1;
                fb.put_str_centered(0, w, y, "(Press Enter to save)", plain.dim());
                return;
            }
            NamePrompt::Saved => {
                fb.put_str_centered(
                    0,
                    w,
                    y,
                    "High score saved!",
                    CellStyle::fg(color_rgb(Color::Green)),
                );
                y += 2;
            }
            NamePrompt::SaveFailed => {
                fb.put_str_centered(
                    0,
                    w,
                    y,
                    "Could not save high score",
                    CellStyle::fg(color_rgb(Color::Red)),
                );
                y += 2;
            }
            NamePrompt::NotQualified => {}
        }

        let table_w = (4 + MAX_NAME_LEN + 1 + 10) as u16;
        let table_x = w.saturating_sub(table_w) / 2;

        fb.put_str(table_x, y, "High Scores", plain.bold());
        y += 1;
        let row_style = CellStyle::fg(Rgb::new(200, 200, 200));
        for (i, entry) in entries.iter().take(10).enumerate() {
            let line = format!("{:>2}. {:<width$} {}", i + 1, entry.name, entry.score, width = MAX_NAME_LEN);
            fb.put_str(table_x, y, &line, row_style);
            y += 1;
        }
        if entries.is_empty() {
            fb.put_str(table_x, y, "(none yet)", row_style.dim());
            y += 1;
        }

        y += 1;
        fb.put_str_centered(0, w, y, "Press R to restart", plain.dim());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        score: u32,
        prompt: NamePrompt<'_>,
        entries: &[HighScore],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(score, prompt, entries, viewport, &mut fb);
        fb
    }
}
