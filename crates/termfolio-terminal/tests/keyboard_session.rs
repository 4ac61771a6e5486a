//! End-to-end sessions driven through key events only.

use termfolio_terminal::{
    COMMANDS, Display, FixedTicks, Host, KeyOutcome, LinkOpener, Session, TaskKind,
};
use termfolio_types::config::ShellConfig;
use termfolio_types::input::{Key, KeyEvent};

const PROMPT: &str = "Christian_Egelund_Hansen/.../cv$ ";

/// A fake terminal: renders writes into a string and tracks opened links.
#[derive(Default)]
struct Screen {
    text: String,
    clears: usize,
}

impl Display for Screen {
    fn write_line(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    fn write(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn clear(&mut self) {
        self.text.clear();
        self.clears += 1;
    }
}

#[derive(Default)]
struct Browser {
    opened: Vec<String>,
}

impl LinkOpener for Browser {
    fn open_external(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

struct Shell {
    session: Session,
    screen: Screen,
    browser: Browser,
}

impl Shell {
    fn mounted(ticks: u32) -> Self {
        let config = ShellConfig {
            boot_banner: false,
            ..ShellConfig::default()
        };
        let mut shell = Self {
            session: Session::with_tick_source(config, Box::new(FixedTicks(ticks)))
                .expect("default config is valid"),
            screen: Screen::default(),
            browser: Browser::default(),
        };
        let mut host = Host::new(&mut shell.screen, &mut shell.browser);
        shell.session.mount(&mut host);
        shell
    }

    fn press(&mut self, event: KeyEvent) -> KeyOutcome {
        let mut host = Host::new(&mut self.screen, &mut self.browser);
        self.session.handle_key(&event, &mut host)
    }

    fn type_line(&mut self, text: &str) -> KeyOutcome {
        for ch in text.chars() {
            self.press(KeyEvent::char(ch));
        }
        self.press(KeyEvent::plain(Key::Enter))
    }

    fn wait(&mut self, ms: u64) -> usize {
        let mut host = Host::new(&mut self.screen, &mut self.browser);
        self.session.advance(ms, &mut host).len()
    }

    fn prompts(&self) -> usize {
        self.screen.text.matches(PROMPT).count()
    }
}

#[test]
fn mount_shows_prompt() {
    let shell = Shell::mounted(3);
    assert_eq!(shell.screen.text, PROMPT);
}

#[test]
fn help_then_whoami_transcript() {
    let mut shell = Shell::mounted(3);
    shell.type_line("help");
    shell.type_line("whoami");
    let text = &shell.screen.text;
    for entry in COMMANDS {
        assert!(text.contains(entry.name), "help is missing {}", entry.name);
    }
    assert!(text.contains("Hello!"));
    assert_eq!(shell.prompts(), 3);
}

#[test]
fn unique_prefixes_tab_complete_to_full_names() {
    for entry in COMMANDS {
        for len in 1..entry.name.len() {
            let prefix = &entry.name[..len];
            let sharers = COMMANDS
                .iter()
                .filter(|c| c.name.starts_with(prefix))
                .count();
            if sharers != 1 {
                continue;
            }
            let mut shell = Shell::mounted(3);
            for ch in prefix.chars() {
                shell.press(KeyEvent::char(ch));
            }
            assert_eq!(shell.press(KeyEvent::plain(Key::Tab)), KeyOutcome::Completed);
            assert_eq!(shell.session.input(), entry.name);
        }
    }
}

#[test]
fn ambiguous_prefix_lists_and_keeps_buffer() {
    let mut shell = Shell::mounted(3);
    shell.press(KeyEvent::char('c'));
    assert_eq!(shell.press(KeyEvent::plain(Key::Tab)), KeyOutcome::Listed);
    assert_eq!(shell.session.input(), "c");
    assert!(shell.screen.text.ends_with(&format!("\ncat cd clear\n{PROMPT}c")));
}

#[test]
fn blank_enter_prints_no_command_output() {
    let mut shell = Shell::mounted(3);
    shell.type_line("  ");
    assert_eq!(shell.session.input(), "");
    assert_eq!(shell.screen.text, format!("{PROMPT}  \n{PROMPT}"));
}

#[test]
fn backspace_on_empty_line_does_nothing() {
    let mut shell = Shell::mounted(3);
    let before = shell.screen.text.clone();
    assert_eq!(shell.press(KeyEvent::plain(Key::Backspace)), KeyOutcome::Ignored);
    assert_eq!(shell.session.input().len(), 0);
    assert_eq!(shell.screen.text, before);
}

#[test]
fn cat_files_and_missing_file() {
    let mut shell = Shell::mounted(3);
    shell.type_line("cat AboutMe.txt");
    shell.type_line("cat MyCV.txt");
    shell.type_line("cat passwords.txt");
    let text = &shell.screen.text;
    assert_eq!(text.matches("cat: file not found").count(), 1);
    assert!(text.contains(&format!("cat passwords.txt\ncat: file not found\n{PROMPT}")));
}

#[test]
fn linkedin_deploys_after_exact_ticks() {
    let mut shell = Shell::mounted(4);
    assert_eq!(
        shell.type_line("linkedin"),
        KeyOutcome::Submitted { deferred: true }
    );
    let pending: Vec<_> = shell.session.pending().collect();
    assert_eq!(pending.len(), 1);
    assert!(matches!(
        pending[0].kind(),
        TaskKind::Deploy {
            ticks_required: 4,
            ..
        }
    ));

    assert_eq!(shell.prompts(), 1);
    assert_eq!(shell.wait(800 * 4 - 1), 0);
    assert_eq!(shell.prompts(), 1);
    assert!(shell.browser.opened.is_empty());

    assert_eq!(shell.wait(1), 1);
    assert_eq!(shell.browser.opened.len(), 1);
    assert_eq!(shell.browser.opened[0], shell.session.config().linkedin_url);
    assert_eq!(shell.prompts(), 2);
    assert!(
        shell
            .screen
            .text
            .ends_with(&format!("Deploying my LinkedIn profile....\n{PROMPT}"))
    );
}

#[test]
fn typing_during_a_deploy_still_works() {
    let mut shell = Shell::mounted(3);
    shell.type_line("gitlab");
    shell.wait(800);
    shell.type_line("ls");
    assert!(shell.screen.text.contains("AboutMe.txt"));
    shell.wait(1600);
    assert_eq!(shell.browser.opened.len(), 1);
}

#[test]
fn cd_does_not_change_later_prompts() {
    let mut shell = Shell::mounted(3);
    shell.type_line("cd projects");
    shell.type_line("cd ../..");
    shell.type_line("ls");
    assert_eq!(shell.prompts(), 4);
    assert_eq!(shell.session.current_path(), "Christian_Egelund_Hansen/.../cv");
}

#[test]
fn clear_command_and_shortcut() {
    let mut shell = Shell::mounted(3);
    shell.type_line("whoami");
    assert_eq!(shell.type_line("clear"), KeyOutcome::Cleared);
    assert_eq!(shell.screen.clears, 1);
    assert_eq!(shell.session.input(), "");
    assert_eq!(shell.screen.text, "");

    shell.press(KeyEvent::char('h'));
    assert_eq!(shell.press(KeyEvent::ctrl('k')), KeyOutcome::Cleared);
    assert_eq!(shell.screen.clears, 2);
    assert_eq!(shell.session.input(), "");
    assert_eq!(shell.screen.text, "");
}

#[test]
fn unknown_command_hint() {
    let mut shell = Shell::mounted(3);
    shell.type_line("rm -rf /");
    assert!(
        shell
            .screen
            .text
            .contains("command not found: rm. Try 'help' to get started")
    );
}
