//! Deferred animation tasks.
//!
//! The scheduler owns a virtual clock that only moves when the host calls
//! [`Scheduler::advance`]. Every task ticks at its own fixed interval; due
//! ticks across tasks run in due-time order, ties broken by creation order.
//! A task leaves the pending set when it fires or is cancelled.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::host::{Display, Host};
use crate::interpreter::DeployRequest;
use crate::registry::CommandId;

/// Picks how many dots a deploy animates before it fires.
pub trait TickSource {
    /// Draw a tick count from `range` (inclusive, never empty).
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Uniform random tick counts.
pub struct RandomTicks {
    rng: StdRng,
}

impl RandomTicks {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for RandomTicks {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Always draws the same count, clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTicks(pub u32);

impl TickSource for FixedTicks {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.clamp(*range.start(), *range.end())
    }
}

/// Handle to a pending task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// What a task does on each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Append a dot per tick; after the last one, open `url` and re-prompt.
    Deploy {
        command: CommandId,
        url: String,
        ticks_elapsed: u32,
        ticks_required: u32,
    },
    /// Print one banner line per tick; after the last one, prompt.
    Banner {
        lines: &'static [&'static str],
        next_line: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskState {
    Running,
    Fired,
}

/// A task in the pending set. Always running; fired tasks are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredTask {
    id: TaskId,
    kind: TaskKind,
    interval_ms: u64,
    next_due_ms: u64,
}

impl DeferredTask {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Virtual time of the next tick.
    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    pub fn is_deploy(&self) -> bool {
        matches!(self.kind, TaskKind::Deploy { .. })
    }

    fn step(&mut self, prompt: &str, host: &mut Host<'_>) -> TaskState {
        match &mut self.kind {
            TaskKind::Deploy {
                command,
                url,
                ticks_elapsed,
                ticks_required,
            } => {
                host.display.write(".");
                *ticks_elapsed += 1;
                log::debug!(
                    "{} tick {}/{}",
                    command.name(),
                    ticks_elapsed,
                    ticks_required
                );
                if *ticks_elapsed < *ticks_required {
                    return TaskState::Running;
                }
                host.display.write_line("");
                log::info!("{} deployed, opening {url}", command.name());
                host.links.open_external(url);
                host.display.write(prompt);
                TaskState::Fired
            },
            TaskKind::Banner { lines, next_line } => match lines.get(*next_line) {
                Some(line) => {
                    host.display.write_line(line);
                    *next_line += 1;
                    TaskState::Running
                },
                None => {
                    host.display.write(prompt);
                    TaskState::Fired
                },
            },
        }
    }
}

/// Pending tasks plus the virtual clock they tick against.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<DeferredTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[cfg(test)]
    fn get(&self, id: TaskId) -> Option<&DeferredTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Pending tasks in creation order.
    pub fn tasks(&self) -> impl Iterator<Item = &DeferredTask> {
        self.tasks.iter()
    }

    pub fn has_running_deploy(&self) -> bool {
        self.tasks.iter().any(DeferredTask::is_deploy)
    }

    /// Milliseconds until the earliest pending tick, if any.
    pub fn time_to_next_tick(&self) -> Option<u64> {
        self.tasks
            .iter()
            .map(|t| t.next_due_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// Write the deploy label and start ticking.
    pub fn start_deploy(
        &mut self,
        req: &DeployRequest,
        ticks_required: u32,
        display: &mut dyn Display,
    ) -> TaskId {
        display.write(&req.label);
        let id = self.push(
            TaskKind::Deploy {
                command: req.command,
                url: req.url.clone(),
                ticks_elapsed: 0,
                ticks_required,
            },
            req.interval_ms,
        );
        log::info!(
            "scheduled {} as {id:?}: {ticks_required} ticks every {}ms",
            req.command.name(),
            req.interval_ms
        );
        id
    }

    /// Print the first banner line now and the rest one per interval.
    pub fn start_banner(
        &mut self,
        lines: &'static [&'static str],
        interval_ms: u64,
        display: &mut dyn Display,
    ) -> TaskId {
        let next_line = match lines.first() {
            Some(first) => {
                display.write_line(first);
                1
            },
            None => 0,
        };
        self.push(TaskKind::Banner { lines, next_line }, interval_ms)
    }

    fn push(&mut self, kind: TaskKind, interval_ms: u64) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(DeferredTask {
            id,
            kind,
            interval_ms,
            next_due_ms: self.now_ms.saturating_add(interval_ms),
        });
        id
    }

    /// Drop a pending task without firing it. Returns false if it already
    /// fired or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            log::info!("cancelled {id:?}");
        }
        removed
    }

    /// Cancel every running deploy, leaving other tasks alone.
    pub fn cancel_deploys(&mut self) -> Vec<TaskId> {
        let ids: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|t| t.is_deploy())
            .map(|t| t.id)
            .collect();
        for &id in &ids {
            self.cancel(id);
        }
        ids
    }

    /// Cancel everything. Returns how many tasks were pending.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        if n > 0 {
            log::info!("cancelled {n} pending task(s)");
        }
        n
    }

    /// Move the clock forward by `elapsed_ms`, running every tick that falls
    /// due on the way. Returns the tasks that fired, in firing order.
    pub fn advance(&mut self, elapsed_ms: u64, prompt: &str, host: &mut Host<'_>) -> Vec<TaskId> {
        let target = self.now_ms.saturating_add(elapsed_ms);
        let mut fired = Vec::new();

        while let Some(idx) = self.next_due_index(target) {
            let task = &mut self.tasks[idx];
            self.now_ms = task.next_due_ms;
            match task.step(prompt, host) {
                TaskState::Running => {
                    task.next_due_ms = task.next_due_ms.saturating_add(task.interval_ms);
                },
                TaskState::Fired => {
                    let done = self.tasks.remove(idx);
                    fired.push(done.id);
                },
            }
        }

        self.now_ms = target;
        fired
    }

    fn next_due_index(&self, target: u64) -> Option<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.next_due_ms <= target)
            .min_by_key(|(_, t)| (t.next_due_ms, t.id))
            .map(|(i, _)| i)
    }
}
