use crate::Generation;

/// Notifications published by the [`LifeEngine`](crate::engine::LifeEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The simulation started running from generation `0`
    Started,

    /// The simulation stopped at `generation`
    Stopped {
        generation: Generation,
        reason: StopReason,
    },

    /// A step produced a changed grid. `generation` is the new count.
    GenerationAdvanced { generation: Generation },

    /// The board went back to its starting pattern
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Someone asked for it
    User,

    /// No cell was alive anymore
    Extinct,

    /// A step left every cell as it was
    Stagnant,
}

impl EngineEvent {
    /// Text for the status line under the board
    pub fn status_label(&self) -> String {
        match self {
            EngineEvent::Started | EngineEvent::Reset => "Generation: 0".to_string(),
            EngineEvent::GenerationAdvanced { generation } => format!("Generation: {generation}"),
            EngineEvent::Stopped { generation, .. } => {
                format!("Generation: {generation} - Game stopped")
            }
        }
    }
}

/// Requests coming from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Start,
    Stop,
    Reset,

    /// Show or hide the cell outlines
    ToggleGridlines,

    /// A point on the screen was selected, in terminal cells
    Select { column: u16, row: u16 },

    /// The terminal changed size
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}

#[cfg(test)]
mod test {
    use super::EngineEvent;
    use super::StopReason;

    #[test]
    fn labels() {
        assert_eq!(EngineEvent::Started.status_label(), "Generation: 0");
        assert_eq!(EngineEvent::Reset.status_label(), "Generation: 0");
        assert_eq!(
            EngineEvent::GenerationAdvanced { generation: 12 }.status_label(),
            "Generation: 12"
        );
        assert_eq!(
            EngineEvent::Stopped {
                generation: 7,
                reason: StopReason::Stagnant
            }
            .status_label(),
            "Generation: 7 - Game stopped"
        );
    }
}
