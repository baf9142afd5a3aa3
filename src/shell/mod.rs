//! The command dispatch core of the portfolio terminal.
//!
//! Everything in this module is UI-free: a [`Session`] owns the
//! scrollback transcript and the input buffer, [`Command`] enumerates
//! the built-in commands, and [`DeferredClear`] carries the one
//! out-of-band effect (`clear` replaces the transcript after a short
//! delay). The TUI and the `exec` subcommand both drive the same
//! `Session::submit` contract.

pub mod command;
pub mod deferred;
pub mod session;

pub use command::{Command, CommandOutput, Effect};
pub use deferred::{DeferredClear, CLEAR_DELAY};
pub use session::{Session, SessionState, CLEAR_NOTICE, PROMPT_MARKER};
