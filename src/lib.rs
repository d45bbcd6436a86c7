//! # Client Admin
//!
//! The core of a client administration console: a searchable, sortable, paginated
//! client list over an in-process store, with a "new client" flow and row
//! activation that opens the edit view.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic [`ResourceActor`](framework::ResourceActor) owns a store, answers CRUD
//! requests, and publishes immutable snapshots to [`Snapshots`](framework::Snapshots)
//! subscribers.
//!
//! ### 2. The Records ([`model`], [`client_actor`], [`services`])
//! [`Client`](model::Client) records, their actor, and the
//! [`ClientService`](services::ClientService) wrapper that doubles as the
//! create-record service.
//!
//! ### 3. The View ([`view`])
//! [`RecordListView`](view::RecordListView): a pure [`render`](view::render) function
//! plus handlers for snapshots, search, sorting, paging, creation and row activation.
//!
//! ### 4. The Shell ([`navigation`], [`notification`], [`i18n`], [`config`])
//! Capabilities the view calls out to, expressed as traits with in-process
//! implementations.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Starts and stops the actor; sets up tracing.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- --locale fr --seed 12
//! ```

pub mod client_actor;
pub mod config;
pub mod framework;
pub mod i18n;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod notification;
pub mod services;
pub mod view;
