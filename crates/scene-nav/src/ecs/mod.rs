//! # Scene Storage
//!
//! The host side of the navigator: entity handles, the hierarchy contract,
//! and a concrete scene container.
//!
//! ## Module Overview
//!
//! - [`entity`] — Generational entity handles
//! - [`hierarchy`] — The [`Hierarchy`] contract and pre-order [`Walk`]
//! - [`world`] — [`World`], the bundled scene container

pub mod entity;
pub mod hierarchy;
pub mod world;

pub use entity::Entity;
pub use hierarchy::{Hierarchy, Walk};
pub use world::World;
