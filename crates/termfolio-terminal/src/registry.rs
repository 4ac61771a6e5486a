//! Static command and virtual file tables.
//!
//! Declaration order matters: `help` lists commands in table order and tab
//! completion reports ambiguous candidates in table order.

use crate::content;

/// Identity of a recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Help,
    Whoami,
    Ls,
    Cat,
    Cd,
    Banner,
    Clear,
    Linkedin,
    Gitlab,
    Github,
}

impl CommandId {
    /// Resolve a typed command name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS.iter().find(|c| c.name == name).map(|c| c.id)
    }

    /// The name the user types.
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Whoami => "whoami",
            Self::Ls => "ls",
            Self::Cat => "cat",
            Self::Cd => "cd",
            Self::Banner => "banner",
            Self::Clear => "clear",
            Self::Linkedin => "linkedin",
            Self::Gitlab => "gitlab",
            Self::Github => "github",
        }
    }
}

/// One row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub id: CommandId,
    pub name: &'static str,
    /// One-line description for `help`.
    pub description: &'static str,
}

/// Every recognized command, in help/completion order.
pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        id: CommandId::Help,
        name: "help",
        description: "List available commands",
    },
    CommandEntry {
        id: CommandId::Whoami,
        name: "whoami",
        description: "Who is behind this terminal",
    },
    CommandEntry {
        id: CommandId::Ls,
        name: "ls",
        description: "List files",
    },
    CommandEntry {
        id: CommandId::Cat,
        name: "cat",
        description: "Print a file (cat <file>)",
    },
    CommandEntry {
        id: CommandId::Cd,
        name: "cd",
        description: "Change directory (simulated)",
    },
    CommandEntry {
        id: CommandId::Banner,
        name: "banner",
        description: "Print the welcome banner",
    },
    CommandEntry {
        id: CommandId::Clear,
        name: "clear",
        description: "Clear the terminal",
    },
    CommandEntry {
        id: CommandId::Linkedin,
        name: "linkedin",
        description: "Open my LinkedIn profile",
    },
    CommandEntry {
        id: CommandId::Gitlab,
        name: "gitlab",
        description: "Open my GitLab profile",
    },
    CommandEntry {
        id: CommandId::Github,
        name: "github",
        description: "Open my GitHub profile",
    },
];

/// A read-only file `cat` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualFile {
    pub name: &'static str,
    pub body: &'static [&'static str],
}

impl VirtualFile {
    /// Exact-name lookup. No paths, no case folding.
    pub fn find(name: &str) -> Option<&'static VirtualFile> {
        FILES.iter().find(|f| f.name == name)
    }
}

/// The virtual file table, in `ls` order.
pub const FILES: &[VirtualFile] = &[
    VirtualFile {
        name: "MyCV.txt",
        body: content::CV_BODY,
    },
    VirtualFile {
        name: "AboutMe.txt",
        body: content::ABOUT_BODY,
    },
];
