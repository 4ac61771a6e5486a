//! Shell emulation engine.
//!
//! The terminal is a fake shell: a line editor feeds an enum-keyed command
//! table, and a few commands hand their completion to a tick scheduler that
//! animates dots before opening a profile link. All per-session state lives
//! in [`Session`]; output goes through the [`Display`] and [`LinkOpener`]
//! traits so the engine never touches a concrete widget.

mod completion;
mod content;
mod editor;
mod host;
mod interpreter;
mod registry;
mod scheduler;
mod session;

#[cfg(test)]
pub(crate) mod testing;

/// Outcome of a tab completion request.
pub use completion::{AutocompleteResult, complete};
/// What a single key press did to the input line.
pub use editor::KeyOutcome;
/// Output and link-opening capabilities supplied by the display adapter.
pub use host::{Display, Host, LinkOpener};
/// Output produced by a command.
pub use interpreter::{CommandOutput, DeployRequest, dispatch};
/// Static command and virtual file tables.
pub use registry::{COMMANDS, CommandEntry, CommandId, FILES, VirtualFile};
/// Deferred task handles and tick sources.
pub use scheduler::{DeferredTask, FixedTicks, RandomTicks, TaskId, TaskKind, TickSource};
/// Mutable state of one running shell.
pub use session::{NextPrompt, Session};
