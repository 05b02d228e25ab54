// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value document storage and the per-user transaction collection on top of it.

use crate::error::StoreError;
use crate::models::Transaction;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

const KEY_PREFIX: &str = "@gofinances";

/// String values under string keys. Every write replaces the whole value.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

impl KeyValueStore for Connection {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let v = self
            .query_row(
                "SELECT value FROM storage WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.execute(
            "INSERT INTO storage(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.execute("DELETE FROM storage WHERE key=?1", params![key])?;
        Ok(())
    }
}

pub fn get_json<T: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match kv.get_item(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

pub fn set_json<T: Serialize + ?Sized>(
    kv: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    kv.set_item(key, &raw)
}

pub fn user_key() -> String {
    format!("{}:user", KEY_PREFIX)
}

pub fn transactions_key(user_id: &str) -> String {
    format!("{}:transactions_user:{}", KEY_PREFIX, user_id)
}

/// A user's transactions, kept as one JSON array.
pub struct TransactionStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> TransactionStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        TransactionStore { kv }
    }

    /// Insertion-ordered transactions for `user_id`; empty when nothing is stored.
    pub fn load(&self, user_id: &str) -> Result<Vec<Transaction>, StoreError> {
        let key = transactions_key(user_id);
        let txs: Vec<Transaction> = get_json(self.kv, &key)?.unwrap_or_default();
        tracing::debug!(user_id, count = txs.len(), "loaded transactions");
        Ok(txs)
    }

    /// Read the collection, push `tx`, write the collection back.
    pub fn append(&self, user_id: &str, tx: &Transaction) -> Result<(), StoreError> {
        let key = transactions_key(user_id);
        let mut txs: Vec<Transaction> = get_json(self.kv, &key)?.unwrap_or_default();
        if txs.iter().any(|t| t.id == tx.id) {
            return Err(StoreError::DuplicateId(tx.id.clone()));
        }
        txs.push(tx.clone());
        set_json(self.kv, &key, &txs)?;
        tracing::info!(user_id, id = %tx.id, count = txs.len(), "appended transaction");
        Ok(())
    }
}
