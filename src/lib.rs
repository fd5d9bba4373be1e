//! # fix-canvas
//!
//! A CLI tool that resets the canvas header of Pure Data patch files.
//!
//! Every `*.pd` file in the `../src/` directory (relative to the directory
//! holding the executable) has its first line replaced with
//! `#N canvas 0 0 640 480 10;`. All following lines are kept byte-for-byte.
//!
//! ## Usage
//!
//! ```bash
//! fix-canvas
//! # Updated: synth.pd
//! # Updated: mixer.pd
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`rewriter`] - Patch discovery and in-place rewriting
//! - [`header`] - First-line replacement on raw file contents
//! - [`target`] - Patch directory resolution
//! - [`error`] - Filesystem error type
//! - [`logging`] - Diagnostic log setup

pub mod cli;
pub mod error;
pub mod header;
pub mod logging;
pub mod rewriter;
pub mod target;
