//! Per-event discovery handling.
//!
//! Each tag presentation walks a short state machine:
//!
//! - `Idle`: no tag yet
//! - `Resolving`: capability list received, access mode being negotiated
//! - `Identified`: access mode resolved and identifier encoded
//! - `Rejected`: no supported technology
//!
//! # Valid Transitions
//!
//! - Idle → Resolving → Identified
//! - Idle → Resolving → Rejected
//!
//! `Identified` and `Rejected` are terminal for the event. A tag without a
//! usable serial still ends in `Identified`, with no identifier.
//!
//! # Examples
//!
//! ```
//! use tagscan_core::{Error, TagDiscovered, discovery};
//!
//! let event = TagDiscovered::new(vec!["formatable".to_string()], Some(vec![0x00, 0x00]));
//! let read = discovery::handle(&event).unwrap();
//! assert_eq!(read.tag_id, None);
//!
//! let event = TagDiscovered::new(vec![], Some(vec![0x01]));
//! assert_eq!(discovery::handle(&event), Err(Error::UnsupportedTagFormat));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, TagDiscovered, TagRead, codec, resolver};

/// Phase of a single discovery event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryState {
    /// No tag present.
    Idle,

    /// Capability list received, resolver running.
    Resolving,

    /// Tag resolved; identifier (possibly absent) produced.
    Identified,

    /// Tag advertised no supported technology.
    Rejected,
}

impl fmt::Display for DiscoveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state_str = match self {
            DiscoveryState::Idle => "Idle",
            DiscoveryState::Resolving => "Resolving",
            DiscoveryState::Identified => "Identified",
            DiscoveryState::Rejected => "Rejected",
        };
        write!(f, "{}", state_str)
    }
}

impl DiscoveryState {
    /// Check if transition to target state is valid from this state.
    ///
    /// ```
    /// use tagscan_core::discovery::DiscoveryState;
    ///
    /// assert!(DiscoveryState::Idle.can_transition_to(&DiscoveryState::Resolving));
    /// assert!(!DiscoveryState::Idle.can_transition_to(&DiscoveryState::Identified));
    /// ```
    pub fn can_transition_to(&self, target: &DiscoveryState) -> bool {
        matches!(
            (self, target),
            (DiscoveryState::Idle, DiscoveryState::Resolving)
                | (
                    DiscoveryState::Resolving,
                    DiscoveryState::Identified | DiscoveryState::Rejected
                )
        )
    }

    /// Check if the event has reached its outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DiscoveryState::Identified | DiscoveryState::Rejected)
    }
}

/// Tracks one discovery event through its states.
///
/// A `Discovery` is consumed by [`run`](Self::run), so every event yields
/// exactly one outcome.
#[derive(Debug)]
pub struct Discovery<'a> {
    event: &'a TagDiscovered,
    state: DiscoveryState,
}

impl<'a> Discovery<'a> {
    /// Start tracking a discovery event in the `Idle` state.
    pub fn new(event: &'a TagDiscovered) -> Self {
        Self {
            event,
            state: DiscoveryState::Idle,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> DiscoveryState {
        self.state
    }

    fn transition_to(&mut self, target: DiscoveryState) {
        debug_assert!(
            self.state.can_transition_to(&target),
            "invalid discovery transition from {} to {}",
            self.state,
            target
        );
        debug!("Discovery state: {} -> {}", self.state, target);
        self.state = target;
    }

    /// Resolve the access mode and encode the identifier.
    ///
    /// Returns the final state together with the outcome.
    pub fn run(mut self) -> (DiscoveryState, Result<TagRead>) {
        self.transition_to(DiscoveryState::Resolving);

        match resolver::resolve(&self.event.technologies) {
            Ok(access_mode) => {
                let tag_id = codec::encode(self.event.id.as_deref());
                self.transition_to(DiscoveryState::Identified);
                (
                    self.state,
                    Ok(TagRead {
                        access_mode,
                        tag_id,
                    }),
                )
            }
            Err(e) => {
                self.transition_to(DiscoveryState::Rejected);
                (self.state, Err(e))
            }
        }
    }
}

/// Handle one discovery event.
///
/// # Errors
///
/// Returns [`Error::UnsupportedTagFormat`](crate::Error::UnsupportedTagFormat)
/// if the tag advertises no supported technology. A missing or all-zero serial
/// is not an error.
pub fn handle(event: &TagDiscovered) -> Result<TagRead> {
    Discovery::new(event).run().1
}
