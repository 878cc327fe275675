//! # Event Bus Module
//!
//! Publish/subscribe notifications from the scene engine to its views.
//!
//! ## Overview
//!
//! - The scene engine publishes typed events without knowing its observers
//! - Views subscribe with a filter and re-read editor state when notified
//! - Handlers run synchronously on the publishing call; async observers can
//!   take a broadcast receiver instead
//!
//! Each editor session owns its own bus; there is no global instance.
//!
//! ## Usage
//!
//! ```rust
//! use spacekit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, FileEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::File]),
//!     |event| {
//!         if let AppEvent::File(file) = event {
//!             println!("{}", file.description());
//!         }
//!     },
//! );
//!
//! bus.notify(AppEvent::File(FileEvent::Cleared));
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
