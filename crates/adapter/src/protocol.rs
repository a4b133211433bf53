//! Protocol module - JSON message types for the line adapter
//!
//! Every message is one JSON object per line. All messages carry `type` and
//! `seq`; engine messages also carry `ts` (milliseconds since the Unix epoch).

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::types::{Cell, Direction, MoveEvent, SpawnedTile, GRID_SIZE};

// ============== Client -> Engine Messages ==============

/// Action named in a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionName {
    Up,
    Down,
    Left,
    Right,
    Restart,
}

impl ActionName {
    /// Map a move action to its direction (`None` for restart)
    pub fn direction(self) -> Option<Direction> {
        match self {
            ActionName::Up => Some(Direction::Up),
            ActionName::Down => Some(Direction::Down),
            ActionName::Left => Some(Direction::Left),
            ActionName::Right => Some(Direction::Right),
            ActionName::Restart => None,
        }
    }

    /// Parse an action name, accepting the short direction aliases
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("restart") {
            return Some(ActionName::Restart);
        }
        Direction::from_str(s).map(ActionName::from)
    }
}

impl From<Direction> for ActionName {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => ActionName::Up,
            Direction::Down => ActionName::Down,
            Direction::Left => ActionName::Left,
            Direction::Right => ActionName::Right,
        }
    }
}

/// Command message: apply one action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMessage {
    pub seq: u64,
    pub action: String,
}

/// Snapshot request: observe without moving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRequest {
    pub seq: u64,
}

// ============== Engine -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    InvalidCommand,
    UnknownMessage,
}

/// Error message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub ts: u64,
    pub code: ErrorCode,
    pub message: String,
}

/// Grid cells, top row first (0 = empty)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedSnapshot {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

impl From<SpawnedTile> for SpawnedSnapshot {
    fn from(value: SpawnedTile) -> Self {
        Self {
            row: value.row,
            col: value.col,
            value: value.value,
        }
    }
}

/// Result of the command this observation answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastEvent {
    pub action: ActionName,
    /// Board changed (always true for restart)
    pub moved: bool,
    pub score_delta: u32,
    pub merges: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub spawned: Option<SpawnedSnapshot>,
}

impl LastEvent {
    pub fn from_move(ev: MoveEvent) -> Self {
        Self {
            action: ev.direction.into(),
            moved: true,
            score_delta: ev.score_delta,
            merges: ev.merges,
            spawned: ev.spawned.map(SpawnedSnapshot::from),
        }
    }

    pub fn rejected(direction: Direction) -> Self {
        Self {
            action: direction.into(),
            moved: false,
            score_delta: 0,
            merges: 0,
            spawned: None,
        }
    }

    pub fn restarted() -> Self {
        Self {
            action: ActionName::Restart,
            moved: true,
            score_delta: 0,
            merges: 0,
            spawned: None,
        }
    }
}

/// Stable hash of the grid (FNV-1a 64), serialized as a hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateHash(pub u64);

impl Serialize for StateHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("{:016x}", self.0))
    }
}

impl<'de> Deserialize<'de> for StateHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        u64::from_str_radix(&s, 16)
            .map(StateHash)
            .map_err(serde::de::Error::custom)
    }
}

/// Game state observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub ts: u64,
    pub playable: bool,
    pub game_over: bool,
    pub won: bool,
    pub episode_id: u32,
    pub moves: u32,
    pub score: u32,
    pub highest_tile: Cell,
    pub board: BoardSnapshot,
    pub legal_moves: Vec<ActionName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_event: Option<LastEvent>,
    pub state_hash: StateHash,
}

// ============== Message Parsing ==============

/// Parsed incoming message
#[derive(Debug, Clone)]
pub enum ParsedMessage {
    Command(CommandMessage),
    Snapshot(SnapshotRequest),
    Unknown(UnknownMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMessage {
    pub seq: u64,
    pub msg_type: String,
}

/// Parse a JSON message from a string
pub fn parse_message(json: &str) -> Result<ParsedMessage, serde_json::Error> {
    #[derive(Debug, Deserialize)]
    #[serde(tag = "type")]
    enum InboundMessage {
        #[serde(rename = "command")]
        Command(CommandMessage),
        #[serde(rename = "snapshot")]
        Snapshot(SnapshotRequest),
    }

    match serde_json::from_str::<InboundMessage>(json) {
        Ok(InboundMessage::Command(m)) => Ok(ParsedMessage::Command(m)),
        Ok(InboundMessage::Snapshot(m)) => Ok(ParsedMessage::Snapshot(m)),
        Err(e) => {
            // Unknown message type is not a hard parse error for the protocol.
            #[derive(Debug, Deserialize)]
            struct Envelope {
                #[serde(rename = "type")]
                msg_type: Option<String>,
                seq: Option<u64>,
            }
            let envelope = serde_json::from_str::<Envelope>(json)?;
            match envelope.msg_type {
                Some(t) if t != "command" && t != "snapshot" => {
                    Ok(ParsedMessage::Unknown(UnknownMessage {
                        seq: envelope.seq.unwrap_or(0),
                        msg_type: t,
                    }))
                }
                _ => Err(e),
            }
        }
    }
}

/// Best-effort `seq` from a line that failed to parse
pub fn salvage_seq(json: &str) -> u64 {
    #[derive(Deserialize)]
    struct SeqOnly {
        seq: Option<u64>,
    }
    serde_json::from_str::<SeqOnly>(json)
        .ok()
        .and_then(|s| s.seq)
        .unwrap_or(0)
}

// ============== Utility Functions ==============

pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        ts: current_timestamp_ms(),
        code,
        message: message.to_string(),
    }
}

pub fn build_observation(
    seq: u64,
    snapshot: &GameSnapshot,
    legal_moves: &[Direction],
    last_event: Option<LastEvent>,
) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        ts: current_timestamp_ms(),
        playable: snapshot.playable(),
        game_over: snapshot.game_over,
        won: snapshot.won,
        episode_id: snapshot.episode_id,
        moves: snapshot.moves,
        score: snapshot.score,
        highest_tile: snapshot.highest_tile,
        board: BoardSnapshot {
            size: GRID_SIZE,
            cells: snapshot.grid,
        },
        legal_moves: legal_moves.iter().map(|&d| ActionName::from(d)).collect(),
        last_event,
        state_hash: StateHash(snapshot.board_hash),
    }
}

fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
