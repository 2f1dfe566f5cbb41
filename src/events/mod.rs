//! # Events Module
//!
//! The pipeline never prints. It emits events through a channel and the
//! CLI decides how to render them.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Group(GroupEvent::DuplicateFound { path, .. }) = event {
//!             println!("Duplicate found: {}", path.display());
//!         }
//!     }
//! });
//!
//! detector.run_with_events(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
