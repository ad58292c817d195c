//! Tag discovery dispatcher.
//!
//! This module provides the [`TagDispatcher`], which runs a reader in its own
//! async task, feeds every discovered tag through
//! [`tagscan_core::discovery::handle`] and delivers the outcome to the host as
//! a [`TagEvent`].
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────┐  resume / pause   ┌──────────────┐
//!  Host ──────────►│ Dispatch     │──────────────────►│ Reader task  │
//!  lifecycle       │ Handle       │                   │ (session +   │
//!                  │              │◄──────────────────│  discovery)  │
//!                  └──────────────┘     TagEvent      └──────────────┘
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tagscan_hardware::dispatcher::{DispatchConfig, TagDispatcher, TagEvent};
//! use tagscan_hardware::devices::AnyTagReader;
//! use tagscan_hardware::mock::MockTagReader;
//!
//! #[tokio::main]
//! async fn main() -> tagscan_hardware::Result<()> {
//!     let mut dispatcher = TagDispatcher::new(DispatchConfig::default());
//!
//!     let (reader, _handle) = MockTagReader::new();
//!     dispatcher.register_reader(AnyTagReader::Mock(reader));
//!
//!     let mut handle = dispatcher.start();
//!
//!     while let Some(event) = handle.recv().await {
//!         if let TagEvent::Read { read, .. } = event {
//!             println!("tagId: {:?}", read.tag_id);
//!         }
//!     }
//!
//!     handle.shutdown().await?;
//!     Ok(())
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tagscan_core::constants::DEFAULT_EVENT_CAPACITY;
use tagscan_core::{Error, TagRead, discovery};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tracing::{debug, error, info, trace, warn};

use crate::devices::AnyTagReader;
use crate::session::PollingSession;
use crate::{HardwareError, Result, ScannedTag};

/// Delay after a failed reader call before polling again.
const ERROR_BACKOFF_MS: u64 = 100;

/// Outcome of one discovery event, as delivered to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagEvent {
    /// Tag resolved; the identifier may be absent.
    Read {
        /// Access mode and identifier.
        read: TagRead,

        /// When the reader saw the tag.
        timestamp: DateTime<Utc>,
    },

    /// Tag advertised no supported technology.
    Rejected {
        /// When the reader saw the tag.
        timestamp: DateTime<Utc>,
    },
}

impl TagEvent {
    /// Event name hosts subscribe to.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Read { .. } => "nfcRead",
            Self::Rejected { .. } => "nfcUnsupported",
        }
    }

    /// Get the read outcome, if the tag was resolved.
    pub fn as_read(&self) -> Option<&TagRead> {
        match self {
            Self::Read { read, .. } => Some(read),
            Self::Rejected { .. } => None,
        }
    }
}

/// Dispatcher configuration.
///
/// Every field has a default, so hosts can load partial configuration:
///
/// ```
/// use tagscan_hardware::dispatcher::DispatchConfig;
///
/// let config: DispatchConfig = serde_json::from_str(r#"{"forward_rejections": false}"#).unwrap();
/// assert!(!config.forward_rejections);
/// assert!(config.start_polling);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Capacity of the event channel to the host.
    pub event_capacity: usize,

    /// Deliver [`TagEvent::Rejected`] for unsupported tags.
    ///
    /// When off, unsupported tags are only logged and the host receives no
    /// event for them, so it no longer sees exactly one outcome per tap.
    pub forward_rejections: bool,

    /// Start polling as soon as the dispatcher starts, without waiting for the
    /// first [`DispatchHandle::resume`].
    pub start_polling: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_EVENT_CAPACITY,
            forward_rejections: true,
            start_polling: true,
        }
    }
}

/// Polling state the host last asked for.
///
/// Held in a `watch` channel: the reader task only acts on the latest value,
/// so lifecycle calls never wait on the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionCommand {
    Resume,
    Pause,
}

/// Handle for receiving tag events and driving the polling lifecycle.
///
/// [`shutdown`](Self::shutdown) stops polling and ends the reader task.
/// Dropping the handle aborts the task without disabling polling.
pub struct DispatchHandle {
    /// Event receiver for consuming tag events.
    event_rx: mpsc::Receiver<TagEvent>,

    /// Lifecycle commands for the reader task.
    control_tx: watch::Sender<SessionCommand>,

    /// Running reader task.
    tasks: JoinSet<Result<()>>,
}

impl DispatchHandle {
    /// Receive the next tag event.
    ///
    /// Returns `None` once the reader task has terminated.
    pub async fn recv(&mut self) -> Option<TagEvent> {
        self.event_rx.recv().await
    }

    /// Host became active: enable polling.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader task has already terminated.
    pub async fn resume(&self) -> Result<()> {
        self.send(SessionCommand::Resume)
    }

    /// Host was suspended: disable polling.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader task has already terminated.
    pub async fn pause(&self) -> Result<()> {
        self.send(SessionCommand::Pause)
    }

    fn send(&self, command: SessionCommand) -> Result<()> {
        self.control_tx
            .send(command)
            .map_err(|_| HardwareError::disconnected("NFC reader task stopped"))
    }

    /// Stop polling and wait for the reader task to finish.
    ///
    /// Undelivered events are discarded. Completes even if the host stopped
    /// reading events.
    ///
    /// # Errors
    ///
    /// Returns the error that ended the reader task, e.g.
    /// [`HardwareError::Disconnected`] when the reader went away. Panics in
    /// the task are logged only.
    pub async fn shutdown(self) -> Result<()> {
        let Self {
            event_rx,
            control_tx,
            mut tasks,
        } = self;

        // Closing both channels ends the reader loop, including a task
        // blocked on a full event channel.
        drop(control_tx);
        drop(event_rx);

        let mut outcome = Ok(());
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => debug!("NFC reader task finished"),
                Ok(Err(e)) => {
                    warn!("NFC reader task ended with error: {}", e);
                    if outcome.is_ok() {
                        outcome = Err(e);
                    }
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => error!("NFC reader task panicked: {}", e),
            }
        }

        outcome
    }
}

/// Result of one wait in the reader loop.
enum Step {
    /// The host changed the requested polling state, or closed the channel.
    Command(std::result::Result<(), watch::error::RecvError>),
    Scanned(Result<Option<ScannedTag>>),
}

/// Runs a reader and turns its discoveries into [`TagEvent`]s.
///
/// # Lifecycle
///
/// 1. Create the dispatcher with configuration
/// 2. Register the host's reader, if it has one
/// 3. Call `start()` to spawn the reader task and get the handle
/// 4. Forward host lifecycle changes with `resume()`/`pause()`
/// 5. Receive events until shutdown
pub struct TagDispatcher {
    /// Registered reader.
    reader: Option<AnyTagReader>,

    /// Configuration.
    config: DispatchConfig,
}

impl TagDispatcher {
    /// Create a new dispatcher with configuration.
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            reader: None,
            config,
        }
    }

    /// Register the reader to poll.
    ///
    /// Without a registered reader the dispatcher still starts, but never
    /// produces events.
    pub fn register_reader(&mut self, reader: AnyTagReader) {
        self.reader = Some(reader);
    }

    /// Check if a reader is registered.
    pub fn has_reader(&self) -> bool {
        self.reader.is_some()
    }

    /// Get the configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Spawn the reader task and return the handle.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(self) -> DispatchHandle {
        let (event_tx, event_rx) = mpsc::channel(self.config.event_capacity.max(1));
        let initial = if self.config.start_polling {
            SessionCommand::Resume
        } else {
            SessionCommand::Pause
        };
        let (control_tx, control_rx) = watch::channel(initial);

        let session = PollingSession::new(self.reader);
        let mut tasks = JoinSet::new();
        tasks.spawn(Self::reader_task(
            session,
            control_rx,
            event_tx,
            self.config.clone(),
        ));

        DispatchHandle {
            event_rx,
            control_tx,
            tasks,
        }
    }

    /// Resolve a scanned tag into the event to deliver, if any.
    fn process(scanned: ScannedTag, forward_rejections: bool) -> Option<TagEvent> {
        match discovery::handle(&scanned.tag) {
            Ok(read) => {
                debug!(
                    "Tag read: access_mode={} tag_id={:?}",
                    read.access_mode,
                    read.tag_id_str()
                );
                Some(TagEvent::Read {
                    read,
                    timestamp: scanned.timestamp,
                })
            }
            Err(Error::UnsupportedTagFormat) => {
                warn!(
                    "Unsupported tag tapped: technologies={:?}",
                    scanned.tag.technologies
                );
                forward_rejections.then_some(TagEvent::Rejected {
                    timestamp: scanned.timestamp,
                })
            }
            Err(e) => {
                error!("Discovery failed: {}", e);
                None
            }
        }
    }

    async fn reader_task(
        mut session: PollingSession<AnyTagReader>,
        mut control_rx: watch::Receiver<SessionCommand>,
        tx: mpsc::Sender<TagEvent>,
        config: DispatchConfig,
    ) -> Result<()> {
        if *control_rx.borrow_and_update() == SessionCommand::Resume {
            session.start().await;
        }
        info!("NFC reader task started (state: {:?})", session.state());

        let outcome = loop {
            let polling = session.is_active();
            let step = tokio::select! {
                changed = control_rx.changed() => Step::Command(changed),
                scanned = session.next_tag(), if polling => Step::Scanned(scanned),
            };

            match step {
                Step::Command(Ok(())) => {
                    let command = *control_rx.borrow_and_update();
                    match command {
                        SessionCommand::Resume => session.start().await,
                        SessionCommand::Pause => session.stop().await,
                    };
                }
                Step::Command(Err(_)) => break Ok(()),
                Step::Scanned(Ok(Some(scanned))) => {
                    if let Some(event) = Self::process(scanned, config.forward_rejections)
                        && tx.send(event).await.is_err()
                    {
                        debug!("Event receiver dropped");
                        break Ok(());
                    }
                }
                Step::Scanned(Ok(None)) => trace!("Ignoring discovery event without a tag"),
                Step::Scanned(Err(e)) if e.is_disconnected() => {
                    error!("NFC reader disconnected: {}", e);
                    break Err(e);
                }
                Step::Scanned(Err(e)) => {
                    let signal: Error = e.into();
                    warn!("Discovery event dropped: {}", signal);
                    tokio::time::sleep(tokio::time::Duration::from_millis(ERROR_BACKOFF_MS))
                        .await;
                }
            }
        };

        session.stop().await;
        info!("NFC reader task stopped");
        outcome
    }
}
