use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::PixelOffset;
use crate::camera::CHAR_HEIGHT;
use crate::camera::CHAR_WIDTH;
use crate::events::AppEvent;

/// Converts a crossterm event into a gridlife event
///
/// * `s` starts the simulation, `x` stops it and `r` resets the board
/// * `g` shows or hides the cell outlines
/// * `q` or `Ctrl-C` exits
/// * a left click selects the point under the cursor
pub fn convert_event(event: CrossTermEvent) -> Option<AppEvent> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            // some terminals report releases too, only act once per key
            KeyEvent {
                kind: KeyEventKind::Release,
                ..
            } => None,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('q'),
                ..
            } => Some(AppEvent::Exit),
            KeyEvent {
                code: KeyCode::Char('s'),
                ..
            } => Some(AppEvent::Start),
            KeyEvent {
                code: KeyCode::Char('x'),
                ..
            } => Some(AppEvent::Stop),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Some(AppEvent::Reset),
            KeyEvent {
                code: KeyCode::Char('g'),
                ..
            } => Some(AppEvent::ToggleGridlines),
            _ => None,
        },
        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(AppEvent::Select { column, row }),
        CrossTermEvent::Resize(cols, rows) => Some(AppEvent::Resize { cols, rows }),
        _ => None,
    }
}

/// The pixel at the center of a terminal cell
pub fn terminal_to_pixel(column: u16, row: u16) -> (PixelOffset, PixelOffset) {
    (
        column as PixelOffset * CHAR_WIDTH + CHAR_WIDTH / 2,
        row as PixelOffset * CHAR_HEIGHT + CHAR_HEIGHT / 2,
    )
}

/// Number of pixels covered by a `cols` x `rows` area of the terminal
pub fn terminal_pixels(cols: u16, rows: u16) -> (PixelOffset, PixelOffset) {
    (
        cols as PixelOffset * CHAR_WIDTH,
        rows as PixelOffset * CHAR_HEIGHT,
    )
}
