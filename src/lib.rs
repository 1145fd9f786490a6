//! # trigger-gateway
//!
//! Webhook gateway that registers git repository triggers.
//!
//! Every inbound request is tagged with a correlation ID and logged before
//! its handler runs. The trigger endpoint records the webhook's remote and
//! branch in a [`store::RepoStore`], backed by PostgreSQL in production.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Router (api/)
//!     │
//!     ├── Pipeline (pipeline/)
//!     │     set_request_id ──► log_request ──► terminal handler
//!     │
//!     ├── REST Handlers (api/handlers/)
//!     │
//!     ├── RepoStore (store/)
//!     │
//!     └── PostgreSQL │ in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod store;
