//! Oracle wire format
//!
//! Request: a JSON object `{"player":[x,y],"enemy":[x,y],"bullets":[[x,y],...]}`
//! passed as a single command-line argument.
//! Reply: one line on stdout, `left`, `right`, `up` or `down`. Anything else
//! means the opponent stays put.

use serde::{Deserialize, Serialize};

use crate::sim::{Decision, GameState};

/// World snapshot sent to the oracle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Avatar top-left corner
    pub player: [f32; 2],
    /// Opponent top-left corner
    pub enemy: [f32; 2],
    /// Projectile top-left corners, in spawn order
    pub bullets: Vec<[f32; 2]>,
}

impl DecisionRequest {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player: state.avatar.pos().to_array(),
            enemy: state.opponent.pos().to_array(),
            bullets: state
                .projectiles
                .iter()
                .map(|p| p.rect.pos.to_array())
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Wrap `payload` in double quotes so a shell passes it through as one argument.
///
/// Backslashes, double quotes, `$` and backticks are escaped.
pub fn shell_quote(payload: &str) -> String {
    let mut quoted = String::with_capacity(payload.len() + 8);
    quoted.push('"');
    for c in payload.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Map raw oracle stdout to a decision.
///
/// Trailing CR/LF are stripped; unknown tokens fall back to [`Decision::Stay`].
pub fn parse_reply(raw: &str) -> Decision {
    let token = raw.trim_end_matches(['\r', '\n']);
    match Decision::from_token(token) {
        Some(decision) => decision,
        None if token.is_empty() => {
            log::debug!("Empty oracle reply, staying");
            Decision::Stay
        }
        None => {
            log::debug!("Unrecognized oracle reply {:?}, staying", token);
            Decision::Stay
        }
    }
}
