// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors raised by the data client and the input forms.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Input rejected before anything was written.
    #[error("{0}")]
    Validation(String),

    /// The record does not exist for the current owner.
    #[error("{entity} '{identifier}' not found")]
    NotFound {
        entity: &'static str,
        identifier: String,
    },

    /// A stored value failed to decode.
    #[error("Invalid {field} '{value}' stored in database")]
    Corrupt { field: &'static str, value: String },

    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

impl BudgetError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn account_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity: "Account",
            identifier: identifier.to_string(),
        }
    }

    pub fn category_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity: "Category",
            identifier: identifier.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type BudgetResult<T> = std::result::Result<T, BudgetError>;
