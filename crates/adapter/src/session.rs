//! Session - drives one game from a line-delimited JSON stream
//!
//! Reads one message per line, applies it to the owned [`GameState`] and
//! writes exactly one reply line (an observation or an error). Blank lines
//! are skipped and EOF ends the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::SessionConfig;
use crate::core::{GameState, RandomSource, SimpleRng};
use crate::protocol::{
    build_observation, create_error, parse_message, salvage_seq, ActionName, ErrorCode,
    ErrorMessage, LastEvent, ObservationMessage, ParsedMessage,
};

/// Reply produced for one inbound line
#[derive(Debug, Clone)]
pub enum Reply {
    Observation(ObservationMessage),
    Error(ErrorMessage),
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}

/// One game plus the protocol state around it
pub struct Session<R = SimpleRng> {
    game: GameState<R>,
    config: SessionConfig,
}

impl Session<SimpleRng> {
    /// Start a session with a fresh game seeded from the config
    pub fn new(config: SessionConfig) -> Self {
        let game = GameState::new(config.seed);
        Self::with_game(game, config)
    }
}

impl<R: RandomSource> Session<R> {
    /// Wrap an existing game
    pub fn with_game(game: GameState<R>, config: SessionConfig) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handle one inbound line
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_message(line) {
            Ok(ParsedMessage::Command(cmd)) => match ActionName::parse(&cmd.action) {
                Some(action) => {
                    let event = self.apply(action);
                    Reply::Observation(self.observe(cmd.seq, Some(event)))
                }
                None => {
                    log::warn!("seq {}: unknown action {:?}", cmd.seq, cmd.action);
                    Reply::Error(create_error(
                        cmd.seq,
                        ErrorCode::InvalidCommand,
                        &format!("unknown action: {}", cmd.action),
                    ))
                }
            },
            Ok(ParsedMessage::Snapshot(req)) => Reply::Observation(self.observe(req.seq, None)),
            Ok(ParsedMessage::Unknown(u)) => {
                log::warn!("seq {}: unknown message type {:?}", u.seq, u.msg_type);
                Reply::Error(create_error(
                    u.seq,
                    ErrorCode::UnknownMessage,
                    &format!("unknown message type: {}", u.msg_type),
                ))
            }
            Err(e) => {
                log::warn!("malformed message: {}", e);
                Reply::Error(create_error(
                    salvage_seq(line),
                    ErrorCode::InvalidJson,
                    &e.to_string(),
                ))
            }
        }
    }

    fn apply(&mut self, action: ActionName) -> LastEvent {
        let Some(direction) = action.direction() else {
            self.game.init_game();
            return LastEvent::restarted();
        };

        let moved = self.game.apply_move(direction);
        let event = match self.game.take_last_event() {
            Some(ev) if moved => LastEvent::from_move(ev),
            _ => LastEvent {
                moved,
                ..LastEvent::rejected(direction)
            },
        };

        if self.config.log_board {
            log::info!(
                "{} -> score {}\n{}",
                direction.as_str(),
                self.game.score(),
                self.game.board()
            );
        }
        event
    }

    fn observe(&self, seq: u64, last_event: Option<LastEvent>) -> ObservationMessage {
        let snapshot = self.game.snapshot();
        let legal = self.game.legal_moves();
        build_observation(seq, &snapshot, &legal, last_event)
    }

    /// Serialize a reply as one line (no trailing newline)
    ///
    /// The wire format is always compact; `pretty` only affects the log.
    pub fn encode(&self, reply: &Reply) -> Result<String> {
        match reply {
            Reply::Observation(m) => to_line(m),
            Reply::Error(m) => to_line(m),
        }
    }

    fn log_reply(&self, reply: &Reply) {
        if !self.config.pretty || !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let pretty = match reply {
            Reply::Observation(m) => serde_json::to_string_pretty(m),
            Reply::Error(m) => serde_json::to_string_pretty(m),
        };
        if let Ok(text) = pretty {
            log::debug!("reply:\n{}", text);
        }
    }

    /// Run until `input` reaches EOF, writing one reply per non-blank line
    pub fn run<I, W>(&mut self, input: I, mut output: W) -> Result<()>
    where
        I: BufRead,
        W: Write,
    {
        log::info!("session started (seed {})", self.config.seed);

        for line in input.lines() {
            let line = line.context("failed to read input line")?;
            if line.trim().is_empty() {
                continue;
            }

            let reply = self.handle_line(&line);
            self.log_reply(&reply);
            let encoded = self.encode(&reply)?;
            writeln!(output, "{}", encoded).context("failed to write reply")?;
            output.flush().context("failed to flush output")?;
        }

        log::info!(
            "session ended: episode {}, score {}, moves {}",
            self.game.episode_id(),
            self.game.score(),
            self.game.moves()
        );
        Ok(())
    }
}

fn to_line<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).context("failed to encode reply")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, ScriptedRng};
    use crate::types::Direction;

    fn scripted_session(rows: [[u32; 4]; 4]) -> Session<ScriptedRng> {
        let game = GameState::from_board(Board::from_rows(rows), ScriptedRng::new(vec![0, 9]));
        Session::with_game(game, SessionConfig::default())
    }

    fn observation(reply: Reply) -> ObservationMessage {
        match reply {
            Reply::Observation(o) => o,
            Reply::Error(e) => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn command_moves_and_reports_event() {
        let mut s = scripted_session([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let obs = observation(s.handle_line(r#"{"type":"command","seq":1,"action":"left"}"#));

        assert_eq!(obs.seq, 1);
        assert_eq!(obs.score, 4);
        assert_eq!(obs.board.cells[0], [4, 2, 0, 0]);
        let ev = obs.last_event.unwrap();
        assert_eq!(ev.action, ActionName::Left);
        assert!(ev.moved);
        assert_eq!(ev.score_delta, 4);
        assert_eq!(ev.spawned.map(|t| (t.row, t.col, t.value)), Some((0, 1, 2)));
    }

    #[test]
    fn rejected_move_is_reported_not_errored() {
        let mut s = scripted_session([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let obs = observation(s.handle_line(r#"{"type":"command","seq":2,"action":"left"}"#));
        let ev = obs.last_event.unwrap();
        assert!(!ev.moved);
        assert_eq!(obs.moves, 0);
        assert_eq!(obs.board.cells[0], [2, 4, 0, 0]);
    }

    #[test]
    fn stale_engine_event_is_not_reported_for_rejected_move() {
        // The game arrives with an accepted move whose event nobody took.
        let mut game = GameState::from_board(
            Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]),
            ScriptedRng::new(vec![0, 9]),
        );
        assert!(game.apply_move(Direction::Left));
        let mut s = Session::with_game(game, SessionConfig::default());

        // [4, 2, 0, 0] cannot slide left.
        let obs = observation(s.handle_line(r#"{"type":"command","seq":5,"action":"left"}"#));
        let ev = obs.last_event.unwrap();
        assert!(!ev.moved);
        assert_eq!(ev.score_delta, 0);
        assert_eq!(ev.spawned, None);
        assert_eq!(obs.moves, 1);
    }

    #[test]
    fn restart_starts_new_episode() {
        let mut s = scripted_session([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let obs = observation(s.handle_line(r#"{"type":"command","seq":3,"action":"restart"}"#));
        assert_eq!(obs.episode_id, 1);
        assert_eq!(obs.score, 0);
        assert_eq!(obs.last_event.unwrap().action, ActionName::Restart);
        let tiles = obs.board.cells.iter().flatten().filter(|&&c| c != 0).count();
        assert_eq!(tiles, 2);
    }

    #[test]
    fn unknown_action_is_invalid_command() {
        let mut s = Session::new(SessionConfig::default());
        let before = s.game().snapshot();
        match s.handle_line(r#"{"type":"command","seq":4,"action":"diagonal"}"#) {
            Reply::Error(e) => {
                assert_eq!(e.seq, 4);
                assert_eq!(e.code, ErrorCode::InvalidCommand);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(s.game().snapshot(), before);
    }

    #[test]
    fn malformed_and_unknown_messages() {
        let mut s = Session::new(SessionConfig::default());
        match s.handle_line("{not json") {
            Reply::Error(e) => assert_eq!(e.code, ErrorCode::InvalidJson),
            other => panic!("unexpected {:?}", other),
        }
        match s.handle_line(r#"{"type":"hello","seq":8}"#) {
            Reply::Error(e) => {
                assert_eq!(e.code, ErrorCode::UnknownMessage);
                assert_eq!(e.seq, 8);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn run_writes_one_line_per_message() {
        let mut s = Session::new(SessionConfig::default());
        let input = "{\"type\":\"snapshot\",\"seq\":1}\n\n{\"type\":\"command\",\"seq\":2,\"action\":\"up\"}\n";
        let mut out = Vec::new();
        s.run(input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["type"], "observation");
        }
    }

    #[test]
    fn pretty_config_keeps_wire_compact() {
        let config = SessionConfig {
            pretty: true,
            ..SessionConfig::default()
        };
        let mut s = Session::new(config);
        let input = "{\"type\":\"snapshot\",\"seq\":1}\n{\"type\":\"snapshot\",\"seq\":2}\n";
        let mut out = Vec::new();
        s.run(input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for (i, line) in lines.iter().enumerate() {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["seq"], i as u64 + 1);
        }
    }
}
