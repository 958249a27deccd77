//! The chat log: posted roll results and which risks were pushed.
//!
//! Roll results are stored verbatim. The only state that changes after a
//! message is posted is its set of pushed risk indices.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hl_mechanics::{PushRollResult, ThreatOutcome, ThreatRollResult};

use crate::error::{CliError, CliResult};

/// Shortest id prefix accepted when looking up a message.
pub const MIN_ID_PREFIX: usize = 4;

/// What a message carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "lowercase")]
pub enum MessageBody {
    /// A threat roll card.
    Threat(ThreatRollResult),
    /// A Push Yourself card.
    Push(PushRollResult),
}

/// One posted message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message id.
    pub id: Uuid,
    /// When the message was posted.
    pub posted_at: DateTime<Utc>,
    /// Who rolled, if known.
    pub speaker: Option<String>,
    /// The roll result.
    pub body: MessageBody,
    /// Risk indices already pushed on this message.
    #[serde(default)]
    pub pushed: BTreeSet<usize>,
}

impl ChatMessage {
    fn new(speaker: Option<String>, body: MessageBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            posted_at: Utc::now(),
            speaker,
            body,
            pushed: BTreeSet::new(),
        }
    }

    /// Short id for display.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// Check that `risk` on this message can still be pushed: it must exist,
    /// have come up peril or threat, and not be pushed yet.
    pub fn check_pushable(&self, risk: usize) -> CliResult<()> {
        let MessageBody::Threat(result) = &self.body else {
            return Err(CliError::NotAThreatRoll(self.id));
        };
        let Some(die) = result.assigned_dice.get(risk) else {
            return Err(CliError::NoSuchRisk {
                message: self.id,
                risk,
            });
        };
        if matches!(die.outcome, ThreatOutcome::Success | ThreatOutcome::Critical) {
            return Err(CliError::NothingToResist {
                message: self.id,
                risk,
                outcome: die.outcome,
            });
        }
        if self.pushed.contains(&risk) {
            return Err(CliError::AlreadyPushed {
                message: self.id,
                risk,
            });
        }
        Ok(())
    }
}

/// All posted messages, oldest first, bound to the file they live in.
#[derive(Debug, Clone)]
pub struct ChatLog {
    path: PathBuf,
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// An empty log that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            messages: Vec::new(),
        }
    }

    /// Load the log at `path`. A missing file is an empty log.
    pub fn load(path: &Path) -> CliResult<Self> {
        let mut log = Self::new(path);
        match fs::read_to_string(path) {
            Ok(json) => {
                log.messages = serde_json::from_str(&json).map_err(|source| CliError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(CliError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
        Ok(log)
    }

    /// Write the log back to its file.
    pub fn save(&self) -> CliResult<()> {
        let json = serde_json::to_string_pretty(&self.messages).map_err(|source| {
            CliError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json + "\n").map_err(|source| CliError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Post a threat roll. Returns the new message.
    pub fn post_threat(
        &mut self,
        result: ThreatRollResult,
        speaker: Option<String>,
    ) -> &ChatMessage {
        self.post(ChatMessage::new(speaker, MessageBody::Threat(result)))
    }

    /// Post a Push Yourself roll. Returns the new message.
    pub fn post_push(&mut self, result: PushRollResult, speaker: Option<String>) -> &ChatMessage {
        self.post(ChatMessage::new(speaker, MessageBody::Push(result)))
    }

    fn post(&mut self, message: ChatMessage) -> &ChatMessage {
        tracing::info!(id = %message.id, "message posted");
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Find a message by full id or by a unique prefix of its simple form.
    pub fn get(&self, id: &str) -> CliResult<&ChatMessage> {
        let index = self.index_of(id)?;
        Ok(&self.messages[index])
    }

    /// Record that `risk` on message `id` was pushed.
    ///
    /// Fails if the message is unknown, is not a threat roll, has no such
    /// risk, or the risk was already pushed.
    pub fn mark_pushed(&mut self, id: &str, risk: usize) -> CliResult<Uuid> {
        let index = self.index_of(id)?;
        let message = &mut self.messages[index];
        message.check_pushable(risk)?;
        message.pushed.insert(risk);
        tracing::info!(id = %message.id, risk, "risk pushed");
        Ok(message.id)
    }

    /// The `n` most recent messages, oldest first.
    pub fn recent(&self, n: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if nothing has been posted.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn index_of(&self, id: &str) -> CliResult<usize> {
        let needle = id.trim().to_lowercase();
        if let Ok(uuid) = Uuid::parse_str(&needle) {
            return self
                .messages
                .iter()
                .position(|m| m.id == uuid)
                .ok_or_else(|| CliError::MessageNotFound(id.to_string()));
        }
        if needle.len() < MIN_ID_PREFIX {
            return Err(CliError::MessageNotFound(id.to_string()));
        }
        let mut matches = self
            .messages
            .iter()
            .enumerate()
            .filter(|(_, m)| m.id.simple().to_string().starts_with(&needle))
            .map(|(i, _)| i);
        match (matches.next(), matches.next()) {
            (Some(i), None) => Ok(i),
            (Some(_), Some(_)) => Err(CliError::AmbiguousMessage(id.to_string())),
            (None, _) => Err(CliError::MessageNotFound(id.to_string())),
        }
    }
}
