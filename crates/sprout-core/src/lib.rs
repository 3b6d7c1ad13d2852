//! Sprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprout
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           sprout-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, LayoutService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, VersionControl, Catalog)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sprout-adapters (Infrastructure)     │
//! │ (LocalFilesystem, GitCli, InMemory...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ScaffoldKind, Blueprint, ScaffoldReport)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprout_core::{
//!     application::{ScaffoldRequest, ScaffoldService},
//!     domain::{Blueprint, ScaffoldKind},
//! };
//!
//! // 1. Pick a blueprint
//! let blueprint = Blueprint::builtin(ScaffoldKind::Terraform);
//!
//! // 2. Run it through the service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, vcs);
//! let report = service.run(&ScaffoldRequest::new("./", "foo", blueprint));
//! assert!(report.is_clean());
//! ```

pub mod domain;

pub mod application;

pub mod error;
