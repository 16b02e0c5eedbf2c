//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use super::*;
use crate::error::UiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
/// Standard sizes and colours shared by every container and window.
pub struct Style {
    /// Side of glyph buttons (check boxes, paging and close glyphs).
    pub button_size: i32,
    /// Font size of list items and labels added to containers.
    pub item_size: i32,
    /// Height of text fields.
    pub text_entry_height: i32,
    /// Default width of text fields.
    pub text_entry_width: i32,
    /// Font size of window titles.
    pub title_size: i32,
    /// Window border thickness.
    pub border: i32,
    /// Default margin and padding.
    pub padding: i32,
    /// Average glyph width at font size 1.
    pub avg_char_width: f32,
    /// Rows a menu shows before paging.
    pub menu_page_rows: usize,
    pub panel_color: Color,
    pub title_bar_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub text_dim_color: Color,
    pub title_color: Color,
    pub modeless_color: Color,
    pub modeless_text_color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            button_size: 18,
            item_size: 15,
            text_entry_height: 23,
            text_entry_width: 300,
            title_size: 18,
            border: 2,
            padding: 6,
            avg_char_width: 0.5,
            menu_page_rows: 12,
            panel_color: Color::from_rgba(0x202020FF),
            title_bar_color: Color::from_rgba(0x505050FF),
            border_color: Color::from_rgba(0x909090FF),
            text_color: Color::from_rgba(0xFFFFFFFF),
            text_dim_color: Color::from_rgba(0x808080FF),
            title_color: Color::from_rgba(0xFFFFFFFF),
            modeless_color: Color::from_rgba(0xE0E0A0E0),
            modeless_text_color: Color::from_rgba(0x000000FF),
        }
    }
}

impl Style {
    /// Parses a style from TOML; missing keys keep their default value.
    pub fn from_toml(source: &str) -> Result<Self, UiError> { Ok(toml::from_str(source)?) }

    /// Height of a window title bar.
    pub fn title_bar_height(&self) -> i32 { self.title_size + 2 * self.padding }
}

/// Measures rendered text.
pub trait TextMetrics {
    /// Width in pixels of `text` drawn at `font_size`.
    fn text_width(&self, text: &str, font_size: i32) -> i32;
}

/// Approximates every glyph with the same width, proportional to the font size.
pub struct AverageCharMetrics {
    avg_char_width: f32,
}

impl AverageCharMetrics {
    pub fn new(avg_char_width: f32) -> Self { Self { avg_char_width } }
}

impl TextMetrics for AverageCharMetrics {
    fn text_width(&self, text: &str, font_size: i32) -> i32 { (self.avg_char_width * text.chars().count() as f32 * font_size as f32) as i32 }
}

#[cfg(feature = "fontdue-metrics")]
/// Measures text with the advance widths of a real font.
pub struct FontMetrics {
    font: fontdue::Font,
}

#[cfg(feature = "fontdue-metrics")]
impl FontMetrics {
    /// Loads a TrueType or OpenType font from memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self, UiError> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).map_err(|e| UiError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    /// Loads a font file from disk.
    pub fn from_file(path: &str) -> Result<Self, UiError> {
        let data = std::fs::read(path).map_err(|e| UiError::Font(format!("{}: {}", path, e)))?;
        Self::from_bytes(&data)
    }
}

#[cfg(feature = "fontdue-metrics")]
impl TextMetrics for FontMetrics {
    fn text_width(&self, text: &str, font_size: i32) -> i32 {
        let px = font_size as f32;
        text.chars().map(|c| self.font.metrics(c, px).advance_width).sum::<f32>().ceil() as i32
    }
}

#[derive(Clone, Debug)]
/// Asset paths of the stock icons.
pub struct IconSet {
    paths: HashMap<StockIcon, String>,
}

impl IconSet {
    /// An icon set without any asset.
    pub fn empty() -> Self { Self { paths: HashMap::new() } }

    /// Overrides the asset of `icon`.
    pub fn set(&mut self, icon: StockIcon, path: &str) { self.paths.insert(icon, path.to_string()); }

    /// Asset path of `icon`.
    pub fn path(&self, icon: StockIcon) -> Result<&str, UiError> { self.paths.get(&icon).map(|p| p.as_str()).ok_or(UiError::MissingResource(icon)) }
}

impl Default for IconSet {
    fn default() -> Self {
        let mut set = Self::empty();
        for icon in StockIcon::ALL {
            let name = match icon {
                StockIcon::ArrowDown => "arrowDown",
                StockIcon::ArrowLeft => "arrowLeft",
                StockIcon::ArrowRight => "arrowRight",
                StockIcon::ArrowUp => "arrowUp",
                StockIcon::Check => "check",
                StockIcon::Cross => "cross",
                StockIcon::Uncheck => "uncheck",
                StockIcon::Plus => "plus",
                StockIcon::Minus => "minus",
                StockIcon::RadioCheck => "radioCheck",
                StockIcon::RadioUncheck => "radioUncheck",
            };
            set.set(icon, &format!("/assets/{}.png", name));
        }
        set
    }
}

#[derive(Clone)]
/// Everything containers and windows need to size themselves.
pub struct Theme {
    pub style: Rc<Style>,
    pub metrics: Rc<dyn TextMetrics>,
    pub icons: IconSet,
}

impl Theme {
    /// Builds a theme measuring text with the style's average glyph width.
    pub fn new(style: Style) -> Self {
        let metrics = Rc::new(AverageCharMetrics::new(style.avg_char_width));
        Self { style: Rc::new(style), metrics, icons: IconSet::default() }
    }

    /// Replaces the text measurement.
    pub fn with_metrics(mut self, metrics: Rc<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn text_width(&self, text: &str, font_size: i32) -> i32 { self.metrics.text_width(text, font_size) }

    /// Asset path of a stock icon.
    pub fn icon_path(&self, icon: StockIcon) -> Result<&str, UiError> { self.icons.path(icon) }
}

impl Default for Theme {
    fn default() -> Self { Self::new(Style::default()) }
}
