//! Server Module
//!
//! Initializes and configures the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState
//! ├── config.rs       - Database pool and migrations
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig` is loaded by the binary
//! 2. **Database**: pool opened, migrations applied
//! 3. **Session manager**: hasher, codec and store assembled
//! 4. **Router**: routes, auth middleware and tracing configured

/// Application state management
pub mod state;

/// Database loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, create_app_with_store};
pub use state::AppState;
