//! Canned text shown by the shell.

/// Welcome banner, one display line per entry.
pub const BANNER: &[&str] = &[
    r"",
    r"  _    _        _                                 _                                               _           _  _",
    r" | |  | |      | |                               | |                                             | |         (_)| |",
    r" | |  | |  ___ | |  ___   ___   _ __ ___    ___  | |_   ___    _ __ ___   _   _  __      __  ___ | |__   ___  _ | |_   ___",
    r" | |/\| | / _ \| | / __| / _ \ | '_ ` _ \  / _ \ | __| / _ \  | '_ ` _ \ | | | | \ \ /\ / / / _ \| '_ \ / __|| || __| / _ \",
    r" \  /\  /|  __/| || (__ | (_) || | | | | ||  __/ | |_ | (_) | | | | | | || |_| |  \ V  V / |  __/| |_) |\__ \| || |_ |  __/ _",
    r"  \/  \/  \___||_| \___| \___/ |_| |_| |_| \___|  \__| \___/  |_| |_| |_| \__, |   \_/\_/   \___||_.__/ |___/|_| \__| \___|( )",
    r"                                                                          __/ |                                           |/",
    r"                                                                         |___/",
    r"",
];

pub const WHOAMI: &[&str] = &[
    "Hello!",
    "",
    "I am Christian Egelund Hansen - Computer scientist studying at Syddansk Universitet",
    "",
];

/// Directory listing printed by `ls`.
pub const LISTING: &str = "MyCV.txt     AboutMe.txt   projects/";

pub const CV_BODY: &[&str] = &[
    "Christian Egelund Hansen",
    "Computer science student, Syddansk Universitet",
    "",
    "The full CV lives on LinkedIn. Type 'linkedin' to open it.",
];

pub const ABOUT_BODY: &[&str] = &[
    "Everything in this terminal is canned, so feel free to poke around.",
    "Type 'help' for the command list, or 'github' and 'gitlab' for code.",
];

pub const CD_ACK: &str = "cd command simulated";

pub const FILE_NOT_FOUND: &str = "cat: file not found";

pub const GITHUB_NOTE: &str =
    "Most of my projects live on GitLab; GitHub holds mirrors and contributions.";

pub const DEPLOY_BUSY: &str = "deploy already in progress, please wait";
