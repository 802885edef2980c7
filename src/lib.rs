//! # Availability Engine
//!
//! Weekly operating-schedule and time-slot configuration engine for a
//! services-marketplace back office.
//!
//! This crate implements the authoring side of bookable-item availability:
//! per-weekday schedules with a time window and a slot-generation strategy,
//! one-off unavailable dates, bulk edits across the week, and the serializer
//! that projects the editable state into the minimal persisted shape.
//!
//! ## Features
//!
//! - **Time arithmetic**: "HH:MM" parsing/formatting and evenly spaced slot
//!   generation within a window
//! - **Per-day schedules**: enabled flag, window bounds, auto vs. custom slot
//!   strategy, sorted/deduplicated custom slot lists
//! - **Weekly bulk operations**: toggle-all, weekday/weekend presets, uniform
//!   window/mode/interval application, and selective custom-slot bulk edits
//! - **Unavailable dates**: a date-sorted, duplicate-free set of exception
//!   dates with free-text reasons
//! - **Serialization**: the normalized payload consumed by storage and the
//!   downstream availability resolver, plus hydration back from it
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for the persisted payload shape
//! - [`config`]: environment-driven authoring defaults
//! - [`models`]: the editable schedule state and its operations
//!
//! Persistence, authentication, routing, and booking-time availability
//! resolution are external collaborators; this crate performs no I/O of its
//! own beyond reading its defaults from the environment.

pub mod api;

pub mod config;
pub mod models;
