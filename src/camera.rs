use crate::PixelOffset;
use crate::grid::Grid;
use crate::layout::CellLayout;
use crate::layout::CellRect;

/// Hex values of braille dots
///
/// ```notrust
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Pixels covered by one braille character, horizontally and vertically
pub const CHAR_WIDTH: PixelOffset = 2;
pub const CHAR_HEIGHT: PixelOffset = 4;

/// Render surface for the board. Draws into a pixel buffer and turns it into lines of braille
/// characters, each covering a 2x4 block of pixels.
pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Dots of each braille character, added onto `BRAILLE_EMPTY` when building `fb`
    cp: Vec<u8>,

    /// Width of the pixel buffer
    w: usize,

    /// Height of the pixel buffer
    h: usize,

    /// Whether every cell gets an outline, dead or alive
    show_gridlines: bool,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // Let `w` and `h` refer to width and height of the cell buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer.
        let (bw, bh) = Self::char_size(w, h);

        Self {
            cb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![0; bw * bh],
            w,
            h,
            show_gridlines: true,
        }
    }

    /// A camera whose pixel buffer covers the whole board, plus one pixel on the right and bottom
    /// for the closing gridlines
    pub fn for_layout(layout: &CellLayout) -> Self {
        let (w, h) = Self::layout_size(layout);

        Self::new(w, h)
    }

    /// Reallocate the buffers for a new layout. Drawing options are kept.
    pub fn resize(&mut self, layout: &CellLayout) {
        let (w, h) = Self::layout_size(layout);
        let (bw, bh) = Self::char_size(w, h);

        self.cb = vec![false; w * h];
        self.fb = String::with_capacity(3 * (bw * bh) + bh);
        self.cp = vec![0; bw * bh];
        self.w = w;
        self.h = h;
    }

    pub fn toggle_gridlines(&mut self) {
        self.show_gridlines = !self.show_gridlines;
    }

    pub fn shows_gridlines(&self) -> bool {
        self.show_gridlines
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Turns on every pixel of `rect`. Whatever falls outside of the framebuffer is dropped.
    pub fn fill_rect(&mut self, rect: CellRect) {
        let right = (rect.right as usize).min(self.w);
        let bottom = (rect.bottom as usize).min(self.h);

        for y in rect.top as usize..bottom {
            for x in rect.left as usize..right {
                let i = self.xy_from(x, y);
                self.cb[i] = true;
            }
        }
    }

    /// Turns on the border pixels of `rect`, clipped like [`Camera::fill_rect`]
    pub fn draw_outline(&mut self, rect: CellRect) {
        let CellRect {
            left,
            top,
            right,
            bottom,
        } = rect;

        if right <= left || bottom <= top {
            return;
        }

        for edge in [
            CellRect {
                bottom: top + 1,
                ..rect
            },
            CellRect {
                top: bottom - 1,
                ..rect
            },
            CellRect {
                right: left + 1,
                ..rect
            },
            CellRect {
                left: right - 1,
                ..rect
            },
        ] {
            self.fill_rect(edge);
        }
    }

    /// Draw the board: an outline around every cell when gridlines are on, and a filled rectangle
    /// for every alive cell.
    ///
    /// Neighboring cells share their outline, so with gridlines on an alive cell fills only what
    /// is inside of it.
    pub fn draw_grid(&mut self, grid: &Grid, layout: &CellLayout) {
        for (x, y, state) in grid.cells() {
            let rect = layout.cell_rect(x, y);

            if !self.show_gridlines {
                if state.is_alive() {
                    self.fill_rect(rect);
                }
                continue;
            }

            // reaches one pixel into the next cell, which is where that cell's outline starts
            self.draw_outline(CellRect {
                right: rect.right + 1,
                bottom: rect.bottom + 1,
                ..rect
            });

            if state.is_alive() {
                self.fill_rect(CellRect {
                    left: rect.left + 1,
                    top: rect.top + 1,
                    ..rect
                });
            }
        }
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Turn the pixel buffer into braille, one line of text per 4 rows of pixels
    pub fn render(&mut self) -> &str {
        let (bw, _) = Self::char_size(self.w, self.h);

        // compute new codepoints
        self.cp.fill(0);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = (n % self.w, n / self.w);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] |= Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &dots) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every codepoint from U+2800 to U+28FF is a braille character
            let c = char::from_u32(BRAILLE_EMPTY + dots as u32).unwrap_or(' ');
            self.fb.push(c);
        }
        self.fb.push('\n');

        &self.fb
    }

    fn layout_size(layout: &CellLayout) -> (usize, usize) {
        let (w, h) = layout.surface_size();

        (w as usize + 1, h as usize + 1)
    }

    fn char_size(w: usize, h: usize) -> (usize, usize) {
        (
            w.div_ceil(CHAR_WIDTH as usize),
            h.div_ceil(CHAR_HEIGHT as usize),
        )
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u8 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Camera;
    use crate::grid::Grid;
    use crate::layout::CellLayout;
    use crate::layout::CellRect;

    #[test]
    fn blank() {
        let mut cam = Camera::new(4, 4);

        assert_eq!(cam.render(), "\u{2800}\u{2800}\n");
    }

    #[test]
    fn single_dot() {
        let mut cam = Camera::new(4, 4);
        cam.draw_pixel(0, 0);

        assert_eq!(cam.render(), "\u{2801}\u{2800}\n");
    }

    #[test]
    fn dot_positions() {
        let mut cam = Camera::new(2, 4);
        cam.draw_pixel(1, 3);
        assert_eq!(cam.render(), "\u{2880}\n");

        cam.reset();
        cam.draw_pixel(0, 2);
        assert_eq!(cam.render(), "\u{2804}\n");
    }

    #[test]
    fn fill_rect_clips() {
        let mut cam = Camera::new(2, 4);
        cam.fill_rect(CellRect {
            left: 0,
            top: 0,
            right: 10,
            bottom: 10,
        });

        assert_eq!(cam.render(), "\u{28FF}\n");
    }

    #[test]
    fn odd_size_rounds_up() {
        let mut cam = Camera::new(3, 5);

        assert_eq!(cam.render(), "\u{2800}\u{2800}\n\u{2800}\u{2800}\n");
    }

    fn lit(cam: &Camera, x: usize, y: usize) -> bool {
        cam.cb[cam.xy_from(x, y)]
    }

    #[test]
    fn outline_clips() {
        let mut cam = Camera::new(4, 4);
        cam.draw_outline(CellRect {
            left: 0,
            top: 0,
            right: 3,
            bottom: 10,
        });

        // left column and top row, right column at x = 2, bottom is off the buffer
        assert_eq!(cam.render(), "\u{284F}\u{2847}\n");
    }

    #[test]
    fn dead_cell_has_outline() {
        let layout = CellLayout::new(4, 4);
        let mut cam = Camera::for_layout(&layout);
        cam.draw_grid(&Grid::empty(), &layout);

        // cell (3, 2) covers x in 12..16 and y in 8..12
        for x in 12..=16 {
            assert!(lit(&cam, x, 8), "top edge at x = {x}");
            assert!(lit(&cam, x, 12), "bottom edge at x = {x}");
        }
        for y in 8..=12 {
            assert!(lit(&cam, 12, y), "left edge at y = {y}");
            assert!(lit(&cam, 16, y), "right edge at y = {y}");
        }
        for x in 13..16 {
            for y in 9..12 {
                assert!(!lit(&cam, x, y), "inside at ({x}, {y})");
            }
        }
    }

    #[test]
    fn alive_cell_fills_its_inside() {
        let layout = CellLayout::new(4, 4);
        let mut grid = Grid::empty();
        grid.toggle(3, 2).unwrap();

        let mut cam = Camera::for_layout(&layout);
        cam.draw_grid(&grid, &layout);

        for x in 12..=16 {
            for y in 8..=12 {
                assert!(lit(&cam, x, y), "({x}, {y})");
            }
        }
        assert!(!lit(&cam, 17, 9));
    }

    #[test]
    fn board_outline_is_closed() {
        let layout = CellLayout::new(4, 4);
        let mut cam = Camera::for_layout(&layout);
        cam.draw_grid(&Grid::empty(), &layout);

        assert_eq!((cam.w, cam.h), (65, 81));
        assert!(lit(&cam, 64, 0));
        assert!(lit(&cam, 64, 80));
        assert!(lit(&cam, 0, 80));
    }

    #[test]
    fn empty_board_shows_grid() {
        let layout = CellLayout::new(2, 4);
        let mut cam = Camera::for_layout(&layout);
        cam.draw_grid(&Grid::empty(), &layout);

        let frame = cam.render();
        let lines: Vec<_> = frame.lines().collect();

        assert_eq!(lines.len(), 21);
        assert!(lines.iter().all(|line| line.chars().count() == 17));

        // left edge of cell (1, 1) plus the first two dots of its top edge
        assert_eq!(lines[1].chars().nth(1), Some('\u{284F}'));
        // closing edge on the right
        assert_eq!(lines[1].chars().last(), Some('\u{2847}'));
    }

    #[test]
    fn draws_alive_cells_without_gridlines() {
        let layout = CellLayout::new(2, 4);
        let mut grid = Grid::empty();
        grid.toggle(0, 0).unwrap();
        grid.toggle(15, 19).unwrap();

        let mut cam = Camera::for_layout(&layout);
        cam.toggle_gridlines();
        assert!(!cam.shows_gridlines());
        cam.draw_grid(&grid, &layout);

        let frame = cam.render();
        let lines: Vec<_> = frame.lines().collect();

        assert_eq!(lines[0].chars().next(), Some('\u{28FF}'));
        assert_eq!(lines[19].chars().nth(15), Some('\u{28FF}'));
        assert_eq!(frame.chars().filter(|&c| c == '\u{28FF}').count(), 2);
        assert!(
            frame
                .chars()
                .all(|c| matches!(c, '\u{2800}' | '\u{28FF}' | '\n'))
        );
    }

    #[test]
    fn resize_keeps_gridline_setting() {
        let mut cam = Camera::for_layout(&CellLayout::new(2, 4));
        cam.toggle_gridlines();
        cam.resize(&CellLayout::new(4, 4));

        assert!(!cam.shows_gridlines());
        assert_eq!((cam.w, cam.h), (65, 81));
        assert_eq!(cam.render().lines().count(), 21);
    }
}
