//! # Oceannotes Architecture
//!
//! Oceannotes is a **UI-agnostic note store**. It owns a local-first note
//! collection and gives any frontend the same contract: CRUD plus search,
//! durable snapshots, and synchronous change notifications.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Consumer (page/editor/sidebar — not in this crate)         │
//! │  - Renders, routes, debounces input                         │
//! │  - Calls the repository, subscribes to snapshots            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repo.rs)                                       │
//! │  - Authoritative collection, sorted by recency              │
//! │  - Validates/normalizes, persists, publishes                │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                      │
//!                    ▼                      ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Storage (store/)        │  │  Publisher (publisher.rs)    │
//! │  - SnapshotStore trait   │  │  - Callback fan-out          │
//! │  - FileStore, InMemory   │  │  - Replays latest snapshot   │
//! └──────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Single writer, copy-on-read.** The repository alone mutates the
//!   collection; every caller gets owned clones, never a live handle, so
//!   no consumer can corrupt internal state through a returned reference.
//! - **Graceful degradation over strict validation.** Blank titles are
//!   normalized, unknown ids are no-ops, corrupt snapshots reseed, and
//!   failed writes are logged and swallowed. Nothing here is fatal.
//! - **Explicit construction.** There is no global repository instance;
//!   consumers build one ([`repo::NoteRepository::open`]) and pass it to
//!   whatever needs it, which is also what keeps the crate testable.
//!
//! ## Module Overview
//!
//! - [`repo`]: the note repository — the entry point for all operations
//! - [`model`]: `Note`, drafts, and normalization rules
//! - [`store`]: snapshot persistence (file-backed and in-memory)
//! - [`publisher`]: observer registration and snapshot broadcast
//! - [`view`]: pure derivation of presentation state for consumers
//! - [`id`]: unique id generation, with a documented-weaker fallback
//! - [`env`]: optional environment configuration (future backend URL)
//! - [`error`]: error types internal to the storage layer
//!
//! Logging goes through the `log` facade; binding an implementation is the
//! consumer's responsibility.

pub mod env;
pub mod error;
pub mod id;
pub mod model;
pub mod publisher;
pub mod repo;
pub mod store;
pub mod view;
