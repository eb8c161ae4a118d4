//! GridView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Coord;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything the view needs for one frame.
///
/// `highlight` holds the cells of the match batch currently flashing;
/// `resolving` dims the input hint while the animation queue drains.
#[derive(Debug, Clone, Copy)]
pub struct GridScene<'a> {
    pub grid: &'a Grid,
    pub cursor: Coord,
    pub score: u32,
    pub pattern_count: usize,
    pub highlight: &'a [Coord],
    pub resolving: bool,
    pub status: &'a str,
}

/// A lightweight terminal renderer for the mark grid.
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square under typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame into an existing framebuffer.
    pub fn render_into(&self, scene: &GridScene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let size = scene.grid.size() as u16;
        let board_px_w = size * self.cell_w;
        let board_px_h = size * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..scene.grid.size() {
            for x in 0..scene.grid.size() {
                self.draw_grid_cell(fb, scene, start_x, start_y, x, y);
            }
        }

        self.draw_side_panel(fb, scene, start_x + frame_w + 2, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &GridScene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        scene: &GridScene<'_>,
        start_x: u16,
        start_y: u16,
        x: i32,
        y: i32,
    ) {
        let marked = scene.grid.is_marked(x, y);
        let highlighted = scene.highlight.contains(&(x, y));
        let under_cursor = scene.cursor == (x, y);

        let mut style = if highlighted {
            FLASH_STYLE
        } else if marked {
            MARK_STYLE
        } else {
            EMPTY_STYLE
        };
        if under_cursor {
            style.bg = CURSOR_BG;
        }

        let ch = if marked || highlighted { 'X' } else { '·' };

        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        // Center glyph.
        let cx = px + self.cell_w / 2;
        let cy = py + self.cell_h / 2;
        fb.set(cx, cy, style.into_cell(ch));
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = BORDER_STYLE;
        for dx in 0..w {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 0..h {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, scene: &GridScene<'_>, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(160, 160, 170),
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(240, 240, 240),
            bold: true,
            ..CellStyle::default()
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x + 9, y, &scene.score.to_string(), value);

        fb.put_str(x, y + 1, "GRID", label);
        let size = scene.grid.size();
        fb.put_str(x + 9, y + 1, &format!("{}x{}", size, size), value);

        fb.put_str(x, y + 2, "PATTERNS", label);
        fb.put_str(x + 9, y + 2, &scene.pattern_count.to_string(), value);

        if scene.resolving {
            let flash = CellStyle {
                fg: Rgb::new(250, 220, 90),
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str(x, y + 4, "MATCH!", flash);
        }

        if !scene.status.is_empty() {
            let warn = CellStyle {
                fg: Rgb::new(250, 120, 110),
                ..CellStyle::default()
            };
            fb.put_str(x, y + 5, scene.status, warn);
        }

        let hint = CellStyle {
            fg: Rgb::new(110, 110, 120),
            ..CellStyle::default()
        };
        fb.put_str(x, y + 7, "arrows move  space mark", hint);
        fb.put_str(x, y + 8, "+/- resize   r rebuild", hint);
        fb.put_str(x, y + 9, "q quit", hint);
    }
}

/// Side panel width reserved to the right of the board.
const PANEL_W: u16 = 26;

const EMPTY_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(90, 90, 100),
    bg: Rgb::new(28, 28, 36),
    bold: false,
};

const MARK_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(240, 240, 240),
    bg: Rgb::new(50, 60, 90),
    bold: true,
};

const FLASH_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(30, 30, 30),
    bg: Rgb::new(250, 220, 90),
    bold: true,
};

const BORDER_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
};

const CURSOR_BG: Rgb = Rgb::new(90, 110, 150);

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_grid() -> Grid {
        let mut grid = Grid::new(2).unwrap();
        grid.toggle(1, 0).unwrap();
        grid
    }

    fn find_char(fb: &FrameBuffer, target: char) -> Vec<(u16, u16)> {
        let mut found = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some(target) {
                    found.push((x, y));
                }
            }
        }
        found
    }

    #[test]
    fn renders_marked_and_empty_glyphs() {
        let grid = scene_grid();
        let scene = GridScene {
            grid: &grid,
            cursor: (0, 0),
            score: 0,
            pattern_count: 3,
            highlight: &[],
            resolving: false,
            status: "",
        };
        let fb = GridView::default().render(&scene, Viewport::new(60, 20));

        assert_eq!(find_char(&fb, 'X').len(), 1);
        assert_eq!(find_char(&fb, '·').len(), 3);
    }

    #[test]
    fn cursor_cell_gets_cursor_background() {
        let grid = scene_grid();
        let scene = GridScene {
            grid: &grid,
            cursor: (0, 1),
            score: 0,
            pattern_count: 3,
            highlight: &[],
            resolving: false,
            status: "",
        };
        let fb = GridView::default().render(&scene, Viewport::new(60, 20));

        let cursor_cells: usize = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|c| c.style.bg) == Some(CURSOR_BG))
            .count();
        // One full grid cell rect carries the cursor background.
        assert_eq!(cursor_cells, 4 * 2);
    }

    #[test]
    fn highlight_overrides_mark_style() {
        let grid = scene_grid();
        let scene = GridScene {
            grid: &grid,
            cursor: (0, 0),
            score: 1,
            pattern_count: 3,
            highlight: &[(1, 0)],
            resolving: true,
            status: "",
        };
        let fb = GridView::default().render(&scene, Viewport::new(60, 20));

        let flashed: usize = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|c| c.style.bg) == Some(FLASH_STYLE.bg))
            .count();
        assert_eq!(flashed, 4 * 2);
    }

    #[test]
    fn status_text_appears_in_panel() {
        let grid = scene_grid();
        let scene = GridScene {
            grid: &grid,
            cursor: (0, 0),
            score: 0,
            pattern_count: 3,
            highlight: &[],
            resolving: false,
            status: "nope",
        };
        let fb = GridView::default().render(&scene, Viewport::new(60, 20));
        assert!(!find_char(&fb, 'n').is_empty());
    }
}
