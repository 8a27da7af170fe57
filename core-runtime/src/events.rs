//! # Event Bus System
//!
//! Provides an event-driven channel for the catalog using
//! `tokio::sync::broadcast`. Hosts subscribe to learn what the user did
//! (searches, paging, opened books, theme changes) without coupling to the
//! presenter.
//!
//! ## Overview
//!
//! The event bus system consists of:
//! - **Event Types**: Strongly-typed enum hierarchies per concern
//! - **EventBus**: Central broadcast channel for publishing events
//! - **EventStream**: Wrapper for consuming events with filtering
//!
//! Only the channel half of tokio is used: sends never block and receivers
//! are polled with `try_recv`, so no async runtime is required and the bus
//! works on the browser's single thread.
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{CoreEvent, EventBus, EventStream, PaginationEvent};
//!
//! let event_bus = EventBus::new(16);
//! let mut stream = EventStream::new(event_bus.subscribe())
//!     .filter(|event| matches!(event, CoreEvent::Pagination(_)));
//!
//! event_bus
//!     .emit(CoreEvent::Pagination(PaginationEvent::PageRevealed {
//!         page_depth: 2,
//!         revealed: 36,
//!         remaining: 4,
//!     }))
//!     .ok();
//!
//! assert!(matches!(stream.try_recv(), Some(Ok(CoreEvent::Pagination(_)))));
//! assert!(stream.try_recv().is_none());
//! ```
//!
//! ## Error Handling
//!
//! - **`RecvError::Lagged(n)`**: Subscriber fell behind and missed `n` events.
//!   Non-fatal; the subscriber continues with newer events.
//! - **`RecvError::Closed`**: All senders were dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 64;

// ============================================================================
// Core Event Types
// ============================================================================

/// Top-level event enum encompassing all event categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum CoreEvent {
    /// Search form submissions
    Search(SearchEvent),
    /// "Show more" paging
    Pagination(PaginationEvent),
    /// Book detail overlay
    Detail(DetailEvent),
    /// Settings overlay
    Settings(SettingsEvent),
}

impl CoreEvent {
    /// Returns a human-readable description of the event.
    pub fn description(&self) -> &str {
        match self {
            CoreEvent::Search(e) => e.description(),
            CoreEvent::Pagination(e) => e.description(),
            CoreEvent::Detail(e) => e.description(),
            CoreEvent::Settings(e) => e.description(),
        }
    }

    /// Returns the severity level of the event.
    pub fn severity(&self) -> EventSeverity {
        match self {
            CoreEvent::Detail(DetailEvent::NotFound { .. }) => EventSeverity::Warning,
            CoreEvent::Pagination(PaginationEvent::Exhausted { .. }) => EventSeverity::Debug,
            CoreEvent::Search(SearchEvent::Completed { .. }) => EventSeverity::Info,
            CoreEvent::Settings(_) => EventSeverity::Info,
            _ => EventSeverity::Debug,
        }
    }
}

/// Event severity levels for filtering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventSeverity {
    /// Debug-level events (verbose)
    Debug,
    /// Informational events
    Info,
    /// Warning events
    Warning,
    /// Error events
    Error,
}

// ============================================================================
// Search Events
// ============================================================================

/// Events related to search submissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum SearchEvent {
    /// A new result set replaced the previous one.
    Completed {
        /// Trimmed title query, empty when unconstrained.
        title: String,
        /// Author id, `None` for "any".
        author: Option<String>,
        /// Genre id, `None` for "any".
        genre: Option<String>,
        /// Number of matching records.
        matches: usize,
    },
}

impl SearchEvent {
    fn description(&self) -> &str {
        match self {
            SearchEvent::Completed { .. } => "Search completed",
        }
    }
}

// ============================================================================
// Pagination Events
// ============================================================================

/// Events related to revealing further pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum PaginationEvent {
    /// A further page was appended.
    PageRevealed {
        /// Page depth after advancing.
        page_depth: usize,
        /// Records appended by this step.
        revealed: usize,
        /// Records still hidden.
        remaining: usize,
    },
    /// "Show more" was requested with nothing left to reveal.
    Exhausted {
        /// Page depth, unchanged.
        page_depth: usize,
    },
}

impl PaginationEvent {
    fn description(&self) -> &str {
        match self {
            PaginationEvent::PageRevealed { .. } => "Page revealed",
            PaginationEvent::Exhausted { .. } => "No more records to reveal",
        }
    }
}

// ============================================================================
// Detail Events
// ============================================================================

/// Events related to the book detail overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum DetailEvent {
    /// Detail overlay opened for a book.
    Opened {
        /// The book id.
        book_id: String,
    },
    /// Detail overlay closed.
    Closed,
    /// A preview referenced a book that is not in the store.
    NotFound {
        /// The requested id.
        book_id: String,
    },
}

impl DetailEvent {
    fn description(&self) -> &str {
        match self {
            DetailEvent::Opened { .. } => "Book detail opened",
            DetailEvent::Closed => "Book detail closed",
            DetailEvent::NotFound { .. } => "Book not found",
        }
    }
}

// ============================================================================
// Settings Events
// ============================================================================

/// Events related to the settings overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum SettingsEvent {
    /// A theme was applied.
    ThemeChanged {
        /// `"day"` or `"night"`.
        theme: String,
    },
}

impl SettingsEvent {
    fn description(&self) -> &str {
        match self {
            SettingsEvent::ThemeChanged { .. } => "Theme changed",
        }
    }
}

// ============================================================================
// Event Bus
// ============================================================================

/// Central event bus for publishing and subscribing to events.
///
/// Uses `tokio::sync::broadcast` internally, which provides:
/// - Multiple producers (clone the `EventBus`)
/// - Multiple consumers (each `subscribe()` creates a new receiver)
/// - Non-blocking sends (events are cloned for each subscriber)
/// - Lagging detection (slow subscribers get `RecvError::Lagged`)
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CoreEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer size.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; `CoreConfig::validate` rejects that
    /// before a bus is built from configuration.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an error
    /// if there are no active subscribers.
    pub fn emit(&self, event: CoreEvent) -> Result<usize, SendError<CoreEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber to receive events.
    ///
    /// Past events are not replayed.
    pub fn subscribe(&self) -> Receiver<CoreEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ============================================================================
// Event Stream Wrapper
// ============================================================================

/// Type alias for event filter functions.
type EventFilter = Box<dyn Fn(&CoreEvent) -> bool + Send + Sync>;

/// A wrapper around `broadcast::Receiver` with optional filtering.
pub struct EventStream {
    receiver: Receiver<CoreEvent>,
    filter: Option<EventFilter>,
}

impl EventStream {
    /// Creates a new event stream from a receiver.
    pub fn new(receiver: Receiver<CoreEvent>) -> Self {
        Self {
            receiver,
            filter: None,
        }
    }

    /// Adds a filter function to this stream.
    ///
    /// Only events that match the filter will be returned by `try_recv()`.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&CoreEvent) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(predicate));
        self
    }

    /// Attempts to receive the next matching event without blocking.
    ///
    /// Returns `None` if no matching events are currently buffered.
    pub fn try_recv(&mut self) -> Option<Result<CoreEvent, RecvError>> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    let Some(filter) = &self.filter else {
                        return Some(Ok(event));
                    };

                    if filter(&event) {
                        return Some(Ok(event));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => return None,
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    return Some(Err(RecvError::Lagged(n)))
                }
                Err(broadcast::error::TryRecvError::Closed) => return Some(Err(RecvError::Closed)),
            }
        }
    }

    /// Drains every buffered matching event, skipping lag notifications.
    pub fn drain(&mut self) -> Vec<CoreEvent> {
        let mut events = Vec::new();
        while let Some(next) = self.try_recv() {
            match next {
                Ok(event) => events.push(event),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
        events
    }
}

impl fmt::Debug for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
