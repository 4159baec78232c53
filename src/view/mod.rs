//! CPU rendering for the panel surface
//!
//! Draws the panel chrome (header buttons, workspace tabs, entry rows)
//! into a softbuffer back buffer. Text is rasterized with fontdue using
//! a UI font discovered from well-known system locations; when no font
//! is found the chrome still renders and only labels are missing, in
//! keeping with the fail-soft posture of the rest of the app.

pub mod hit_test;

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use fontdue::{Font, FontSettings, Metrics};
use softbuffer::{Context, Surface};
use winit::window::Window;

use crate::model::AppModel;
use hit_test::{
    add_button_rect, close_button_rect, list_top, pin_button_rect, visible_rows, HEADER_HEIGHT,
    PANEL_PADDING, ROW_HEIGHT, TAB_BAR_HEIGHT, TAB_CLOSE_WIDTH, TAB_WIDTH,
};

// Panel palette (0xAARRGGBB, matching the original dark chrome)
const COLOR_BACKGROUND: u32 = 0xFF282828;
const COLOR_SURFACE: u32 = 0xFF323232;
const COLOR_TAB: u32 = 0xFF3C3C3C;
const COLOR_TAB_ACTIVE: u32 = 0xFF505050;
const COLOR_ACCENT: u32 = 0xFF0078D4;
const COLOR_ACCENT_ACTIVE: u32 = 0xFF008CE8;
const COLOR_TEXT: u32 = 0xFFFFFFFF;
const COLOR_TEXT_DIM: u32 = 0xFFB0B0B0;
const COLOR_FOLDER: u32 = 0xFFE8B339;

/// Candidate UI font locations, checked in order at startup
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

const FONT_SIZE: f32 = 13.0;

type GlyphCache = HashMap<(char, u32), (Metrics, Vec<u8>)>;

/// Panel renderer owning the window surface and back buffer
pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer; softbuffer doesn't guarantee buffer
    /// contents are preserved between frames.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    scale_factor: f64,
    font: Option<Font>,
    glyph_cache: GlyphCache,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let size = window.inner_size();

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(
                NonZeroU32::new(size.width.max(1)).unwrap(),
                NonZeroU32::new(size.height.max(1)).unwrap(),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let font = load_ui_font();
        if font.is_none() {
            tracing::warn!("No UI font found; panel labels will not render");
        }

        Ok(Self {
            surface,
            back_buffer: vec![0u32; size.width as usize * size.height as usize],
            width: size.width,
            height: size.height,
            scale_factor,
            font,
            glyph_cache: HashMap::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width.max(1);
        self.height = height.max(1);
        self.back_buffer = vec![0u32; self.width as usize * self.height as usize];
        self.surface
            .resize(
                NonZeroU32::new(self.width).unwrap(),
                NonZeroU32::new(self.height).unwrap(),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        Ok(())
    }

    /// Panel size in logical pixels
    fn logical_size(&self) -> (f64, f64) {
        (
            self.width as f64 / self.scale_factor,
            self.height as f64 / self.scale_factor,
        )
    }

    /// Paint the whole panel and present it.
    pub fn render(&mut self, model: &AppModel, scroll_offset: usize) -> Result<()> {
        let (logical_w, logical_h) = self.logical_size();

        self.fill(COLOR_BACKGROUND);
        self.draw_header(model, logical_w);
        self.draw_tabs(model);
        self.draw_entries(model, logical_w, logical_h, scroll_offset);

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to acquire surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present frame: {}", e))?;
        Ok(())
    }

    fn draw_header(&mut self, model: &AppModel, logical_w: f64) {
        let pin_color = if model.visibility.is_pinned() {
            COLOR_ACCENT_ACTIVE
        } else {
            COLOR_ACCENT
        };
        self.fill_logical_rect(pin_button_rect(), pin_color);
        self.fill_logical_rect(add_button_rect(), COLOR_ACCENT);
        self.fill_logical_rect(close_button_rect(logical_w), COLOR_ACCENT);

        let pin_label = if model.visibility.is_pinned() {
            "Unpin"
        } else {
            "Pin"
        };
        self.draw_logical_text(pin_button_rect().x + 4.0, 11.0, pin_label, COLOR_TEXT);
        self.draw_logical_text(add_button_rect().x + 8.0, 11.0, "+ Workspace", COLOR_TEXT);
        self.draw_logical_text(
            close_button_rect(logical_w).x + 12.0,
            11.0,
            "x",
            COLOR_TEXT,
        );
    }

    fn draw_tabs(&mut self, model: &AppModel) {
        for workspace in model.registry.list() {
            let index = workspace.display_index;
            let x = PANEL_PADDING + index as f64 * TAB_WIDTH;
            let color = if index == model.active_tab {
                COLOR_TAB_ACTIVE
            } else {
                COLOR_TAB
            };
            self.fill_logical_rect(
                crate::geometry::Rect::new(x, HEADER_HEIGHT, TAB_WIDTH - 2.0, TAB_BAR_HEIGHT),
                color,
            );
            self.draw_logical_text_clipped(
                x + 8.0,
                HEADER_HEIGHT + 7.0,
                &workspace.name,
                COLOR_TEXT,
                x + TAB_WIDTH - TAB_CLOSE_WIDTH - 4.0,
            );
            self.draw_logical_text(
                x + TAB_WIDTH - TAB_CLOSE_WIDTH + 4.0,
                HEADER_HEIGHT + 7.0,
                "x",
                COLOR_TEXT_DIM,
            );
        }
    }

    fn draw_entries(
        &mut self,
        model: &AppModel,
        logical_w: f64,
        logical_h: f64,
        scroll_offset: usize,
    ) {
        let Some(workspace) = model.active_workspace() else {
            self.draw_logical_text(
                PANEL_PADDING,
                list_top() + 8.0,
                "No workspaces. Add one to get started.",
                COLOR_TEXT_DIM,
            );
            return;
        };

        let rows = visible_rows(logical_h);
        for (slot, (index, entry)) in workspace
            .entries
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(rows)
            .enumerate()
        {
            let y = list_top() + slot as f64 * ROW_HEIGHT;
            if model.selected_entry == Some(index) {
                self.fill_logical_rect(
                    crate::geometry::Rect::new(
                        PANEL_PADDING,
                        y,
                        logical_w - PANEL_PADDING * 2.0,
                        ROW_HEIGHT,
                    ),
                    COLOR_ACCENT,
                );
            } else if slot % 2 == 1 {
                self.fill_logical_rect(
                    crate::geometry::Rect::new(
                        PANEL_PADDING,
                        y,
                        logical_w - PANEL_PADDING * 2.0,
                        ROW_HEIGHT,
                    ),
                    COLOR_SURFACE,
                );
            }

            // Folder affordance: a small colored square before the name
            if entry.is_dir {
                self.fill_logical_rect(
                    crate::geometry::Rect::new(PANEL_PADDING + 6.0, y + 7.0, 10.0, 10.0),
                    COLOR_FOLDER,
                );
            }
            self.draw_logical_text_clipped(
                PANEL_PADDING + 22.0,
                y + 5.0,
                &entry.name,
                COLOR_TEXT,
                logical_w - PANEL_PADDING - 4.0,
            );
        }
    }

    // =========================================================================
    // Drawing primitives
    // =========================================================================

    fn fill(&mut self, color: u32) {
        self.back_buffer.fill(color);
    }

    fn fill_logical_rect(&mut self, rect: crate::geometry::Rect, color: u32) {
        let s = self.scale_factor;
        let x1 = (((rect.x + rect.width) * s) as usize).min(self.width as usize);
        let y1 = (((rect.y + rect.height) * s) as usize).min(self.height as usize);
        let x0 = ((rect.x * s).max(0.0) as usize).min(x1);
        let y0 = ((rect.y * s).max(0.0) as usize).min(y1);

        for y in y0..y1 {
            let row = y * self.width as usize;
            self.back_buffer[row + x0..row + x1].fill(color);
        }
    }

    fn draw_logical_text(&mut self, x: f64, y: f64, text: &str, color: u32) {
        let max_x = self.width as f64 / self.scale_factor;
        self.draw_logical_text_clipped(x, y, text, color, max_x);
    }

    /// Rasterize `text` starting at logical `(x, y)` (top of the line),
    /// stopping before `max_x`.
    fn draw_logical_text_clipped(&mut self, x: f64, y: f64, text: &str, color: u32, max_x: f64) {
        let Some(font) = &self.font else { return };

        let px = FONT_SIZE * self.scale_factor as f32;
        let Some(line_metrics) = font.horizontal_line_metrics(px) else {
            return;
        };
        let baseline = (y * self.scale_factor) as f32 + line_metrics.ascent;
        let limit = (max_x * self.scale_factor) as f32;
        let mut pen_x = (x * self.scale_factor) as f32;

        for ch in text.chars() {
            let key = (ch, px.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| font.rasterize(ch, px));
            let metrics = *metrics;

            if pen_x + metrics.advance_width > limit {
                break;
            }

            let glyph_x = pen_x as i32 + metrics.xmin;
            let glyph_y = baseline as i32 - metrics.height as i32 - metrics.ymin;
            blit_glyph(
                &mut self.back_buffer,
                self.width,
                self.height,
                glyph_x,
                glyph_y,
                &metrics,
                bitmap,
                color,
            );

            pen_x += metrics.advance_width;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn blit_glyph(
    buffer: &mut [u32],
    buf_width: u32,
    buf_height: u32,
    x: i32,
    y: i32,
    metrics: &Metrics,
    bitmap: &[u8],
    color: u32,
) {
    for row in 0..metrics.height {
        let dst_y = y + row as i32;
        if dst_y < 0 || dst_y >= buf_height as i32 {
            continue;
        }
        for col in 0..metrics.width {
            let dst_x = x + col as i32;
            if dst_x < 0 || dst_x >= buf_width as i32 {
                continue;
            }
            let coverage = bitmap[row * metrics.width + col];
            if coverage == 0 {
                continue;
            }
            let idx = dst_y as usize * buf_width as usize + dst_x as usize;
            buffer[idx] = blend(buffer[idx], color, coverage);
        }
    }
}

/// Alpha-blend `fg` over `bg` with the glyph coverage value.
fn blend(bg: u32, fg: u32, coverage: u8) -> u32 {
    let a = coverage as u32;
    let inv = 255 - a;
    let blend_channel = |shift: u32| {
        let b = (bg >> shift) & 0xFF;
        let f = (fg >> shift) & 0xFF;
        ((f * a + b * inv) / 255) & 0xFF
    };
    0xFF00_0000 | (blend_channel(16) << 16) | (blend_channel(8) << 8) | blend_channel(0)
}

/// Read the first usable UI font from the candidate system locations.
fn load_ui_font() -> Option<Font> {
    for candidate in FONT_CANDIDATES {
        if let Ok(bytes) = std::fs::read(candidate) {
            match Font::from_bytes(bytes, FontSettings::default()) {
                Ok(font) => {
                    tracing::debug!("Loaded UI font from {}", candidate);
                    return Some(font);
                }
                Err(e) => {
                    tracing::debug!("Skipping font {}: {}", candidate, e);
                }
            }
        }
    }
    None
}
