//! In-memory message store.
//!
//! One mutex guards the whole map so that every operation, including the
//! multi-entry reads (`get_all`, `get_all_texts`, `delete_all`), is atomic
//! with respect to concurrent callers. Reads hand out owned copies; the lock
//! never escapes this module.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::message::{Message, ID_PREFIX};

/// Hex digits taken from the random UUID for an id.
const ID_SUFFIX_LEN: usize = 10;

#[derive(Debug)]
struct Entry {
    msg: Message,
    created_seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    messages: HashMap<String, Entry>,
    seq: u64,
    last_created_at: Option<DateTime<Utc>>,
}

/// Process-local message registry keyed by id.
#[derive(Debug, Default)]
pub struct MessageStore {
    inner: Mutex<Inner>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves `Inner` half-updated, so a poisoned guard is reused.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `text` under a fresh id. Validation is the caller's job.
    pub fn create(&self, text: &str) -> Message {
        let mut inner = self.lock();

        let id = loop {
            let candidate = new_id();
            if !inner.messages.contains_key(&candidate) {
                break candidate;
            }
        };

        // Keep creation times non-decreasing across wall clock steps.
        let now = Utc::now();
        let created_at = match inner.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        inner.last_created_at = Some(created_at);

        let msg = Message {
            id: id.clone(),
            text: text.to_string(),
            created_at,
        };

        inner.seq += 1;
        let created_seq = inner.seq;
        inner.messages.insert(
            id,
            Entry {
                msg: msg.clone(),
                created_seq,
            },
        );
        msg
    }

    /// Every stored message, oldest first.
    pub fn get_all(&self) -> Vec<Message> {
        let inner = self.lock();
        let mut entries: Vec<&Entry> = inner.messages.values().collect();
        entries.sort_by_key(|e| e.created_seq);
        entries.into_iter().map(|e| e.msg.clone()).collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Message> {
        self.lock().messages.get(id).map(|e| e.msg.clone())
    }

    /// Remove one message. Returns whether it existed.
    pub fn delete(&self, id: &str) -> bool {
        self.lock().messages.remove(id).is_some()
    }

    /// Remove every message. Returns how many were removed.
    pub fn delete_all(&self) -> usize {
        let mut inner = self.lock();
        let count = inner.messages.len();
        inner.messages.clear();
        count
    }

    /// Texts of all stored messages, for duplicate checks.
    pub fn get_all_texts(&self) -> HashSet<String> {
        self.lock()
            .messages
            .values()
            .map(|e| e.msg.text.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.lock().messages.len()
    }
}

fn new_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    let suffix: String = hex.chars().take(ID_SUFFIX_LEN).collect();
    format!("{ID_PREFIX}{suffix}")
}
