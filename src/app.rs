use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::warn;

use crate::camera::Camera;
use crate::engine::LifeEngine;
use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::io;
use crate::layout::CellLayout;

/// Terminal rows kept below the board for the status and help lines
const FOOTER_ROWS: u16 = 2;

const HELP: &str = "s: start  x: stop  r: reset  g: gridlines  click: toggle cell  q: quit";

/// Everything the frame loop draws from
pub struct App {
    engine: LifeEngine,
    layout: CellLayout,
    camera: Camera,

    /// What the status line currently says
    label: String,
}

impl App {
    /// A fresh board sized for a `cols` x `rows` terminal
    pub fn new(cols: u16, rows: u16) -> Self {
        let layout = board_layout(cols, rows);

        Self {
            engine: LifeEngine::new(),
            camera: Camera::for_layout(&layout),
            layout,
            label: EngineEvent::Reset.status_label(),
        }
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns false once the app should exit
    pub fn handle(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Exit => return false,
            AppEvent::Start => self.engine.start(),
            AppEvent::Stop => self.engine.stop(),
            AppEvent::Reset => self.engine.reset(),
            AppEvent::ToggleGridlines => self.camera.toggle_gridlines(),
            AppEvent::Select { column, row } => {
                let (px, py) = io::terminal_to_pixel(column, row);

                match self.layout.cell_at(px, py) {
                    Some((x, y)) => {
                        self.engine.toggle_cell(x, y);
                    }
                    None => warn!("Terminal is too small to select a cell"),
                }
            }
            AppEvent::Resize { cols, rows } => {
                self.layout = board_layout(cols, rows);
                self.camera.resize(&self.layout);
            }
        }

        true
    }

    /// One tick of the simulation. The label ends up describing the last notification.
    pub fn tick(&mut self) {
        self.engine.step();

        for event in self.engine.drain_events() {
            self.label = event.status_label();
        }
    }

    /// Clear the screen and print the board with the status and help lines beneath it
    pub fn draw<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.camera.reset();
        self.camera.draw_grid(self.engine.grid(), &self.layout);
        let frame = self.camera.render();

        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        if self.layout.is_degenerate() {
            queue!(
                out,
                style::Print("Terminal too small"),
                cursor::MoveToNextLine(1)
            )?;
        } else {
            for line in frame.lines() {
                queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
            }
        }

        execute!(
            out,
            style::Print(&self.label),
            cursor::MoveToNextLine(1),
            style::Print(HELP),
        )
    }
}

/// Fit the board into the terminal, leaving room for the footer and the closing gridlines
fn board_layout(cols: u16, rows: u16) -> CellLayout {
    let (w, h) = io::terminal_pixels(cols, rows.saturating_sub(FOOTER_ROWS));

    CellLayout::fit(w.saturating_sub(1), h.saturating_sub(1))
}

#[cfg(test)]
mod test {
    use super::App;
    use super::board_layout;
    use crate::events::AppEvent;
    use crate::layout::CellLayout;

    // 80x24 leaves 160x88 pixels for the board, so cells are 9 pixels wide and 4 tall

    #[test]
    fn layout_leaves_room_for_footer_and_edges() {
        assert_eq!(board_layout(80, 24), CellLayout::new(9, 4));
        assert!(board_layout(10, 3).is_degenerate());
    }

    #[test]
    fn click_toggles_the_cell_under_it() {
        let mut app = App::new(80, 24);
        assert!(!app.engine().is_alive(1, 1));

        // pixel (11, 6)
        assert!(app.handle(AppEvent::Select { column: 5, row: 1 }));
        assert!(app.engine().is_alive(1, 1));

        assert!(app.handle(AppEvent::Select { column: 5, row: 1 }));
        assert!(!app.engine().is_alive(1, 1));
    }

    #[test]
    fn click_on_glider_kills_it() {
        let mut app = App::new(80, 24);
        assert!(app.engine().is_alive(4, 5));

        // pixel (37, 22)
        app.handle(AppEvent::Select { column: 18, row: 5 });

        assert!(!app.engine().is_alive(4, 5));
        assert_eq!(app.engine().grid().population(), 4);
    }

    #[test]
    fn click_past_the_board_is_ignored() {
        let mut app = App::new(80, 24);
        let before = *app.engine().grid();

        // column 17 of the board
        app.handle(AppEvent::Select { column: 79, row: 0 });

        assert_eq!(*app.engine().grid(), before);
    }

    #[test]
    fn click_on_tiny_terminal_is_ignored() {
        let mut app = App::new(10, 3);
        let before = *app.engine().grid();

        assert!(app.handle(AppEvent::Select { column: 0, row: 0 }));
        assert_eq!(*app.engine().grid(), before);
    }

    #[test]
    fn label_follows_ticks() {
        let mut app = App::new(80, 24);
        assert_eq!(app.label(), "Generation: 0");

        app.tick();
        assert_eq!(app.label(), "Generation: 0");

        app.handle(AppEvent::Start);
        app.tick();
        assert_eq!(app.label(), "Generation: 1");

        app.tick();
        assert_eq!(app.label(), "Generation: 2");

        // the label only changes once the tick drains the notification
        app.handle(AppEvent::Stop);
        assert_eq!(app.label(), "Generation: 2");

        app.tick();
        assert_eq!(app.label(), "Generation: 2 - Game stopped");

        app.handle(AppEvent::Reset);
        app.tick();
        assert_eq!(app.label(), "Generation: 0");
    }

    #[test]
    fn resize_relayouts_the_board() {
        let mut app = App::new(80, 24);
        app.handle(AppEvent::Resize { cols: 10, rows: 3 });

        assert!(app.layout.is_degenerate());
        assert!(app.handle(AppEvent::Select { column: 0, row: 0 }));
        assert_eq!(app.engine().grid().population(), 5);
    }

    #[test]
    fn gridline_toggle_reaches_the_camera() {
        let mut app = App::new(80, 24);
        assert!(app.camera.shows_gridlines());

        app.handle(AppEvent::ToggleGridlines);
        assert!(!app.camera.shows_gridlines());
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut app = App::new(80, 24);

        assert!(!app.handle(AppEvent::Exit));
    }
}
