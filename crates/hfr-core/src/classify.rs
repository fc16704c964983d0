//! Change classification
//!
//! The single business rule governing re-submission of an existing asset:
//! byte-for-byte equal fingerprints mean only the owner changes (ownership
//! transfer); differing fingerprints mean the payload is replaced under the
//! original identity (content update).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::MeasurementRecord;

/// Outcome of comparing a stored fingerprint with a newly computed one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Payload unchanged; only the owner attribute moves
    OwnershipTransfer,
    /// Payload changed; the full record is replaced, identity preserved
    ContentUpdate,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::OwnershipTransfer => write!(f, "ownership transfer"),
            ChangeKind::ContentUpdate => write!(f, "content update"),
        }
    }
}

/// Classify an incoming fingerprint against the stored one.
///
/// Exact string equality only; fingerprints are opaque digests and partial
/// or case-insensitive comparison would be wrong.
pub fn classify(stored: &str, incoming: &str) -> ChangeKind {
    if stored == incoming {
        ChangeKind::OwnershipTransfer
    } else {
        ChangeKind::ContentUpdate
    }
}

/// Produce the record value that replaces `existing` for a re-submission.
///
/// On transfer, the stored payload, statistics, and fingerprint are kept and
/// only the owner changes. On update, the freshly ingested record replaces
/// everything except the identity id, which survives the update.
pub fn apply_change(
    existing: &MeasurementRecord,
    incoming: MeasurementRecord,
    new_owner: &str,
) -> (ChangeKind, MeasurementRecord) {
    let kind = classify(&existing.fingerprint, &incoming.fingerprint);
    debug!(id = %existing.id, change = %kind, "Classified re-submission");

    let record = match kind {
        ChangeKind::OwnershipTransfer => MeasurementRecord {
            owner: new_owner.to_string(),
            ..existing.clone()
        },
        ChangeKind::ContentUpdate => MeasurementRecord {
            id: existing.id.clone(),
            owner: new_owner.to_string(),
            ..incoming
        },
    };

    (kind, record)
}
