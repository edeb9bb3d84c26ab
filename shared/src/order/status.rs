//! Order-item status state machine
//!
//! ```text
//! pending <-> preparing <-> ready -> delivered
//!    ^------------------------'
//! ```
//!
//! Any state among pending/preparing/ready may move to any other of the
//! three, including itself. `delivered` is only reachable from `ready` and
//! has no outgoing edges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::OrderItem;

/// Status of a single order item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Whether the edge `self -> next` is legal
    pub fn can_transition_to(&self, next: ItemStatus) -> bool {
        match (self, next) {
            (Self::Delivered, _) => false,
            (Self::Ready, Self::Delivered) => true,
            (_, Self::Delivered) => false,
            _ => true,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Illegal item status edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move item from {from} to {to}")]
pub struct InvalidTransition {
    pub from: ItemStatus,
    pub to: ItemStatus,
}

/// When `startedAt` / `completedAt` are stamped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPolicy {
    /// Stamp only when the field is unset; bouncing back keeps the first time
    #[default]
    FirstEntry,
    /// Re-stamp on every transition into the state
    EveryEntry,
}

impl FromStr for TimestampPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_entry" => Ok(Self::FirstEntry),
            "every_entry" => Ok(Self::EveryEntry),
            other => Err(format!("unknown timestamp policy: {other}")),
        }
    }
}

impl TimestampPolicy {
    fn stamp(&self, slot: &mut Option<DateTime<Utc>>, now: DateTime<Utc>) {
        if *self == Self::EveryEntry || slot.is_none() {
            *slot = Some(now);
        }
    }
}

impl OrderItem {
    /// Move this item to `next`, stamping timestamps per `policy`
    ///
    /// On error the item is left untouched.
    pub fn apply_status(
        &mut self,
        next: ItemStatus,
        policy: TimestampPolicy,
        now: DateTime<Utc>,
    ) -> Result<(), InvalidTransition> {
        if !self.status.can_transition_to(next) {
            return Err(InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        match next {
            ItemStatus::Preparing => policy.stamp(&mut self.started_at, now),
            ItemStatus::Ready => policy.stamp(&mut self.completed_at, now),
            ItemStatus::Pending | ItemStatus::Delivered => {}
        }
        self.status = next;
        Ok(())
    }
}
