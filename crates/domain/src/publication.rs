//! State publication — what leaves the pipeline towards subscribers.

use serde::{Deserialize, Serialize};

use crate::address::IeeeAddress;
use crate::id::PublicationId;
use crate::payload::Payload;
use crate::time::{Timestamp, now};

/// A named device's translated state, ready for delivery to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePublication {
    /// Unique id of this publication.
    pub id: PublicationId,
    /// Device the state belongs to.
    pub address: IeeeAddress,
    /// Translated application-level state.
    pub payload: Payload,
    /// When the publication was created.
    pub timestamp: Timestamp,
}

impl StatePublication {
    /// Create a publication stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(address: IeeeAddress, payload: Payload) -> Self {
        Self {
            id: PublicationId::new(),
            address,
            payload,
            timestamp: now(),
        }
    }
}
