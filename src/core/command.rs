//! Commands: the discrete events that drive the round engine.
//!
//! Commands arrive one at a time from the presentation layer (player
//! intents) or from the clock (`Tick`, `FinishAnnouncement`). Applied
//! commands are recorded with turn and sequence numbers for replay and
//! debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::CellId;

/// A single engine event.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// The picker chooses a cell.
    SelectCell { cell: CellId },
    /// An announcement pause has elapsed.
    FinishAnnouncement,
    /// One second of countdown has elapsed.
    Tick,
    /// The answering player submits an option.
    SubmitAnswer { option: String },
    /// The answering player declines.
    Pass,
    /// The revealed answer has been seen; close the cell and move on.
    Acknowledge,
}

impl Command {
    pub fn submit(option: impl Into<String>) -> Self {
        Command::SubmitAnswer {
            option: option.into(),
        }
    }

    /// Clock-originated commands, as opposed to player intents.
    #[must_use]
    pub fn is_clock_event(&self) -> bool {
        matches!(self, Command::Tick | Command::FinishAnnouncement)
    }
}

/// A recorded command with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The player acting: the answering player during a round, else the picker.
    pub actor: PlayerId,

    pub command: Command,

    /// Turn number (1-based; one turn per played cell).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl CommandRecord {
    #[must_use]
    pub fn new(actor: PlayerId, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            actor,
            command,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PointValue;

    #[test]
    fn test_clock_events() {
        assert!(Command::Tick.is_clock_event());
        assert!(Command::FinishAnnouncement.is_clock_event());
        assert!(!Command::Pass.is_clock_event());
        assert!(!Command::submit("x").is_clock_event());
    }

    #[test]
    fn test_command_serialization() {
        let cmd = Command::SelectCell {
            cell: CellId::new(2, PointValue::P300),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"selectCell\""));

        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }

    #[test]
    fn test_command_record() {
        let record = CommandRecord::new(PlayerId::new(1), Command::Pass, 3, 5);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CommandRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
        assert_eq!(deserialized.turn, 3);
    }
}
