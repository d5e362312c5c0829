//! VoiceTask - voice-driven task list client
//!
//! This crate provides the core functionality for recording voice memos,
//! transcribing them through a backend endpoint, and managing a task list
//! held by a remote REST API.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (cpal, HTTP, config, etc.)
//! - **CLI**: Command-line interface, argument parsing, and interactive shell

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
