//! Plain-text game record export.
//!
//! Writes a PGN-style header block followed by the numbered move history in
//! the engine's coordinate notation and a result token.

use chrono::{Local, NaiveDate};

use crate::game_state::game_state::GameState;

pub const DEFAULT_EVENT: &str = "Chess Trainer Game";

/// Record stamped with today's local date.
pub fn write_game_record(game_state: &GameState) -> String {
    write_game_record_on(game_state, DEFAULT_EVENT, Local::now().date_naive())
}

pub fn write_game_record_on(game_state: &GameState, event: &str, date: NaiveDate) -> String {
    let result = game_state.outcome().result_token();
    let mut out = String::new();

    out.push_str(&format!("[Event \"{}\"]\n", escape_header_value(event)));
    out.push_str(&format!("[Date \"{}\"]\n", date.format("%Y.%m.%d")));
    out.push_str(&format!("[Result \"{result}\"]\n"));
    out.push('\n');

    let history = game_state.history();
    let mut parts = Vec::<String>::with_capacity(history.len() + 1);
    for (ply, notation) in history.iter().enumerate() {
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", (ply / 2) + 1, notation));
        } else {
            parts.push(notation.clone());
        }
    }
    parts.push(result.to_owned());

    out.push_str(&parts.join(" "));
    out.push('\n');
    out
}

fn escape_header_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
