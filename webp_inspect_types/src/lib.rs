//! # `webp_inspect_types`
//!
//! Plain data types describing the structure of a WebP file.
//!
//! These are produced by the `webp_inspect` crate. Nothing in here parses
//! anything; each type is just a named record of what was found in the file.

#![forbid(unsafe_code)]

pub mod anim;
pub mod container;
pub mod document;
pub mod extended;
pub mod fourcc;

pub use anim::{
    AnimationFrame, AnimationMeta, BackgroundColor, BlendMethod, DisposeMethod, ScanEnd,
};
pub use container::{ChunkHeader, ContainerHeader, Variant};
pub use document::{Diagnostic, WebpDocument};
pub use extended::{Canvas, ExtendedFeatures};
pub use fourcc::FourCc;
