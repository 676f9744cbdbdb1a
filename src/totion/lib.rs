//! # Totion Architecture
//!
//! Totion is a single-screen terminal notebook. Notes are plain files in one
//! flat directory (`~/.totion`); the application lets you browse, create,
//! edit, save and delete them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses arguments, sets up logging and the terminal       │
//! │  - Reads events, draws frames, owns the exit code           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (ui/) + key mapping (keymap.rs)               │
//! │  - Turns crossterm events into Actions                      │
//! │  - Renders App state with ratatui; never mutates it         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State machine (app.rs) + widget state (widgets/)           │
//! │  - Idle / CreatingFile / Editing, plus the list overlay     │
//! │  - Turns one Action into at most a few store calls          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event Flow
//!
//! Everything is single-threaded. One terminal event is read, mapped to an
//! [`app::Action`], fully handled (including any file I/O), and the frame is
//! redrawn before the next event is read. There are no timers and no
//! background work.
//!
//! ## Testing Strategy
//!
//! - **State machine** (`app.rs`): transition tests against `InMemoryStore`.
//! - **Storage** (`store/fs.rs`, `tests/`): real files in a `TempDir`.
//! - **Rendering** (`ui/`): smoke tests through ratatui's `TestBackend`.
//! - **Binary** (`tests/cli.rs`): exit codes and startup failures.
//!
//! ## Module Overview
//!
//! - [`app`]: the interaction state machine
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: note summaries, sessions, name validation
//! - [`widgets`]: filename input, filterable list, editor helpers
//! - [`keymap`]: key bindings
//! - [`ui`]: ratatui rendering
//! - [`config`]: storage and log locations
//! - [`error`]: error types

pub mod app;
pub mod config;
pub mod error;
pub mod keymap;
pub mod model;
pub mod store;
pub mod ui;
pub mod widgets;
