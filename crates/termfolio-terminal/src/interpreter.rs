//! Command dispatch.
//!
//! Input lines are split on whitespace; the first word picks a handler from
//! the enum-keyed table and the rest become its arguments. Handlers are pure:
//! they describe output, and the session performs the writes.

use termfolio_types::config::ShellConfig;

use crate::content;
use crate::registry::{COMMANDS, CommandId, VirtualFile};

/// A request to animate a deploy and then open `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub command: CommandId,
    /// Lines printed before the animation starts.
    pub preamble: Vec<String>,
    /// Text the dots are appended to. Written without a newline.
    pub label: String,
    pub url: String,
    pub interval_ms: u64,
}

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Lines to print, in order.
    Text(Vec<String>),
    /// Erase the display.
    Clear,
    /// Hand the rest of the command to the scheduler. The prompt is deferred.
    Deploy(DeployRequest),
}

impl CommandOutput {
    fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Text(lines.into_iter().map(Into::into).collect())
    }

    /// True if the caller must not print the next prompt itself.
    pub fn defers(&self) -> bool {
        matches!(self, Self::Deploy(_))
    }

    /// Lines to print immediately, before any scheduled work.
    pub fn immediate_lines(&self) -> &[String] {
        match self {
            Self::Text(lines) => lines,
            Self::Deploy(req) => &req.preamble,
            Self::Clear => &[],
        }
    }
}

/// Uniform handler signature shared by every command.
type Handler = fn(&[&str], &ShellConfig) -> CommandOutput;

impl CommandId {
    fn handler(self) -> Handler {
        match self {
            Self::Help => help,
            Self::Whoami => whoami,
            Self::Ls => ls,
            Self::Cat => cat,
            Self::Cd => cd,
            Self::Banner => banner,
            Self::Clear => clear,
            Self::Linkedin => linkedin,
            Self::Gitlab => gitlab,
            Self::Github => github,
        }
    }

    /// Run this command with already-split arguments.
    pub fn execute(self, args: &[&str], config: &ShellConfig) -> CommandOutput {
        (self.handler())(args, config)
    }
}

/// Parse and run one input line.
///
/// Returns `None` for an empty or whitespace-only line: nothing is dispatched
/// and nothing should be printed. Unknown commands are not errors; they
/// produce a hint line.
pub fn dispatch(line: &str, config: &ShellConfig) -> Option<CommandOutput> {
    let mut words = line.split_whitespace();
    let name = words.next()?;
    let args: Vec<&str> = words.collect();

    let output = match CommandId::from_name(name) {
        Some(id) => {
            log::debug!("dispatch {} with {} arg(s)", id.name(), args.len());
            id.execute(&args, config)
        },
        None => {
            log::debug!("unknown command: {name}");
            CommandOutput::lines([format!(
                "command not found: {name}. Try 'help' to get started"
            )])
        },
    };
    Some(output)
}

fn help(_args: &[&str], _config: &ShellConfig) -> CommandOutput {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|c| format!("  {:10} {}", c.name, c.description)),
    );
    CommandOutput::Text(lines)
}

fn whoami(_args: &[&str], _config: &ShellConfig) -> CommandOutput {
    CommandOutput::lines(content::WHOAMI.iter().copied())
}

fn ls(_args: &[&str], _config: &ShellConfig) -> CommandOutput {
    CommandOutput::lines([content::LISTING])
}

fn cat(args: &[&str], _config: &ShellConfig) -> CommandOutput {
    match args.first().copied().and_then(VirtualFile::find) {
        Some(file) => CommandOutput::lines(file.body.iter().copied()),
        None => CommandOutput::lines([content::FILE_NOT_FOUND]),
    }
}

// The prompt path is fixed; cd only acknowledges.
fn cd(_args: &[&str], _config: &ShellConfig) -> CommandOutput {
    CommandOutput::lines([content::CD_ACK])
}

fn banner(_args: &[&str], _config: &ShellConfig) -> CommandOutput {
    CommandOutput::lines(content::BANNER.iter().copied())
}

fn clear(_args: &[&str], _config: &ShellConfig) -> CommandOutput {
    CommandOutput::Clear
}

fn linkedin(_args: &[&str], config: &ShellConfig) -> CommandOutput {
    CommandOutput::Deploy(DeployRequest {
        command: CommandId::Linkedin,
        preamble: Vec::new(),
        label: "Deploying my LinkedIn profile".to_string(),
        url: config.linkedin_url.clone(),
        interval_ms: config.linkedin_interval_ms,
    })
}

fn gitlab(_args: &[&str], config: &ShellConfig) -> CommandOutput {
    CommandOutput::Deploy(DeployRequest {
        command: CommandId::Gitlab,
        preamble: Vec::new(),
        label: "Deploying my GitLab profile".to_string(),
        url: config.gitlab_url.clone(),
        interval_ms: config.gitlab_interval_ms,
    })
}

fn github(_args: &[&str], config: &ShellConfig) -> CommandOutput {
    CommandOutput::Deploy(DeployRequest {
        command: CommandId::Github,
        preamble: vec![content::GITHUB_NOTE.to_string()],
        label: "Deploying my GitHub profile".to_string(),
        url: config.github_url.clone(),
        interval_ms: config.github_interval_ms,
    })
}
