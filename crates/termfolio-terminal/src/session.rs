//! Per-session shell state.

use termfolio_types::config::{DeployPolicy, ShellConfig};
use termfolio_types::error::Result;
use termfolio_types::input::KeyEvent;

use crate::content;
use crate::editor::{self, KeyOutcome};
use crate::host::Host;
use crate::interpreter::{CommandOutput, DeployRequest, dispatch};
use crate::scheduler::{DeferredTask, RandomTicks, Scheduler, TaskId, TickSource};

/// Who writes the prompt after a submitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPrompt {
    /// The caller writes it now.
    Now,
    /// A scheduled task writes it when it fires.
    Deferred,
    /// Nobody: the display was cleared and stays blank.
    Suppressed,
}

/// Mutable state of one running shell.
///
/// Created when the widget mounts and dropped when it unmounts. Nothing in
/// here is shared between sessions; dropping a session drops its pending
/// tasks with it.
pub struct Session {
    pub(crate) input: String,
    config: ShellConfig,
    scheduler: Scheduler,
    ticks: Box<dyn TickSource>,
}

impl Session {
    /// A session drawing deploy tick counts at random.
    pub fn new(config: ShellConfig) -> Result<Self> {
        Self::with_tick_source(config, Box::new(RandomTicks::new()))
    }

    /// A session with an explicit tick source (tests pin it with
    /// [`FixedTicks`](crate::FixedTicks)). Fails if `config` does not
    /// validate.
    pub fn with_tick_source(config: ShellConfig, ticks: Box<dyn TickSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            input: String::new(),
            config,
            scheduler: Scheduler::new(),
            ticks,
        })
    }

    /// The line typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Fake working directory. No command changes it.
    pub fn current_path(&self) -> &str {
        &self.config.current_path
    }

    pub fn prompt(&self) -> String {
        self.config.prompt()
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Pending tasks in creation order.
    pub fn pending(&self) -> impl Iterator<Item = &DeferredTask> {
        self.scheduler.tasks()
    }

    /// Virtual time since mount.
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// How long the host may sleep before the next tick is due.
    pub fn time_to_next_tick(&self) -> Option<u64> {
        self.scheduler.time_to_next_tick()
    }

    /// Greet the user: animate the banner, or just prompt.
    pub fn mount(&mut self, host: &mut Host<'_>) {
        if self.config.boot_banner {
            let id = self.scheduler.start_banner(
                content::BANNER,
                self.config.banner_line_interval_ms,
                host.display,
            );
            log::debug!("boot banner running as {id:?}");
        } else {
            host.display.write(&self.prompt());
        }
    }

    /// Feed one key event through the line editor.
    pub fn handle_key(&mut self, event: &KeyEvent, host: &mut Host<'_>) -> KeyOutcome {
        let outcome = editor::handle_key(self, event, host);
        log::debug!("{:?} -> {outcome:?}", event.key);
        outcome
    }

    /// Run one already-trimmed input line and print its output.
    ///
    /// Empty lines print nothing and leave the prompt to the caller. `clear`
    /// leaves the display blank, like the clear shortcut.
    pub fn submit(&mut self, line: &str, host: &mut Host<'_>) -> NextPrompt {
        let Some(output) = dispatch(line, &self.config) else {
            return NextPrompt::Now;
        };
        for text in output.immediate_lines() {
            host.display.write_line(text);
        }
        match output {
            CommandOutput::Text(_) => NextPrompt::Now,
            CommandOutput::Clear => {
                host.display.clear();
                self.input.clear();
                NextPrompt::Suppressed
            },
            CommandOutput::Deploy(req) => self.start_deploy(&req, host),
        }
    }

    fn start_deploy(&mut self, req: &DeployRequest, host: &mut Host<'_>) -> NextPrompt {
        match self.config.deploy_policy {
            DeployPolicy::Overlap => {},
            DeployPolicy::CancelPrevious => {
                let cancelled = self.scheduler.cancel_deploys();
                if !cancelled.is_empty() {
                    log::info!(
                        "{} replaced {} running deploy(s)",
                        req.command.name(),
                        cancelled.len()
                    );
                }
            },
            DeployPolicy::Reject => {
                if self.scheduler.has_running_deploy() {
                    log::info!("{} rejected: deploy already running", req.command.name());
                    host.display.write_line(content::DEPLOY_BUSY);
                    return NextPrompt::Now;
                }
            },
        }
        let ticks = self.ticks.draw(self.config.tick_range());
        self.scheduler.start_deploy(req, ticks, host.display);
        NextPrompt::Deferred
    }

    /// Advance the session clock, running any ticks that fall due.
    pub fn advance(&mut self, elapsed_ms: u64, host: &mut Host<'_>) -> Vec<TaskId> {
        let prompt = self.prompt();
        self.scheduler.advance(elapsed_ms, &prompt, host)
    }

    /// Stop a pending task without firing it.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.scheduler.cancel(id)
    }

    /// Tear down: cancel every outstanding task. Returns how many there were.
    pub fn shutdown(&mut self) -> usize {
        self.scheduler.cancel_all()
    }
}
