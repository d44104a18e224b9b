//! starbuild-lib: the model and serializer behind `starbuild`
//!
//! This crate provides everything needed to produce a STARBUILD descriptor
//! without any terminal I/O:
//! - `descriptor`: the `BuildDescriptor`/`Package` model and its builder
//! - `options`: the three-state option selector
//! - `render`: deterministic serialization to STARBUILD text
//! - `generate`: writing the artifact to disk
//! - `template`: saving and loading wizard templates

pub mod consts;
pub mod descriptor;
pub mod generate;
pub mod options;
pub mod parse;
pub mod render;
pub mod suggest;
pub mod template;
