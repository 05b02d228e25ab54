// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::format::Locale;
use rust_decimal::Decimal;

/// Failures of the key-value storage layer and the documents kept in it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The value under `key` is not a valid document of the expected shape.
    #[error("stored value under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("a transaction with id '{0}' already exists")]
    DuplicateId(String),
}

/// A stored record that cannot be rendered.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormatError {
    #[error("transaction '{id}' has a negative amount {amount}")]
    NegativeAmount { id: String, amount: Decimal },
}

/// Reasons a new transaction form is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Amount is required")]
    MissingAmount,

    #[error("Enter a numeric amount")]
    AmountNotNumeric,

    #[error("Amount must be positive")]
    AmountNotPositive,

    #[error("Amount must not exceed {0}")]
    AmountTooLarge(Decimal),

    #[error("Select the transaction type")]
    MissingType,

    #[error("Select the category")]
    MissingCategory,

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

impl ValidationError {
    /// Alert text for the form, in the user's language.
    pub fn message(&self, locale: Locale) -> String {
        if locale == Locale::EnUs {
            return self.to_string();
        }
        match self {
            ValidationError::MissingName => "Informe o nome".to_string(),
            ValidationError::MissingAmount => "Informe o valor".to_string(),
            ValidationError::AmountNotNumeric => "Informe um valor numérico".to_string(),
            ValidationError::AmountNotPositive => "O valor deve ser positivo".to_string(),
            ValidationError::AmountTooLarge(max) => format!("O valor não pode passar de {}", max),
            ValidationError::MissingType => "Selecione o tipo da transação".to_string(),
            ValidationError::MissingCategory => "Selecione a categoria".to_string(),
            ValidationError::UnknownCategory(key) => format!("Categoria desconhecida '{}'", key),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider refused or failed to produce an identity.
    #[error("{provider} sign-in failed: {reason}")]
    Provider {
        provider: &'static str,
        reason: String,
    },

    #[error("{0} sign-in is not available on this device")]
    Unavailable(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}
