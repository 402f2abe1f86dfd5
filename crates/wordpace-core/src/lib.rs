//! Word pacing core: tokenizer, delay policies, playback engine and the
//! input/view plumbing consumed by a presentation shell.
//!
//! The crate never reads a clock. Every time-dependent call takes a
//! monotonic `now_ms`, so the same engine runs under a terminal loop, an
//! embedded executor or a test.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod app;
pub mod content;
pub mod input;
pub mod pacing;
pub mod playback;
pub mod render;
pub mod text_policy;
