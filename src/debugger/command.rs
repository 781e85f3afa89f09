/// What a debugger command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Next,
    List,
    Stack,
    Information,
    Help,
    Quit,
    /// Reserved for reload-and-restart. No alias produces it yet.
    Restart,
}

/// One parsed operator command. `count` only matters for `List` and `Stack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub count: i32,
}

pub const DEFAULT_LIST_COUNT: i32 = 10;
pub const DEFAULT_STACK_COUNT: i32 = 20;

/// Alias table, matched case-insensitively. `r`/`restart` are left out on
/// purpose, so they parse as unknown input.
const ALIASES: &[(&str, CommandKind)] = &[
    ("h", CommandKind::Help),
    ("help", CommandKind::Help),
    ("q", CommandKind::Quit),
    ("quit", CommandKind::Quit),
    ("i", CommandKind::Information),
    ("info", CommandKind::Information),
    ("infomation", CommandKind::Information),
    ("l", CommandKind::List),
    ("list", CommandKind::List),
    ("s", CommandKind::Stack),
    ("stack", CommandKind::Stack),
    ("n", CommandKind::Next),
    ("next", CommandKind::Next),
];

fn lookup(token: &str) -> Option<CommandKind> {
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
        .map(|(_, kind)| *kind)
}

/// Window sizes used when `list` or `stack` comes without a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDefaults {
    pub list: i32,
    pub stack: i32,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            list: DEFAULT_LIST_COUNT,
            stack: DEFAULT_STACK_COUNT,
        }
    }
}

impl CommandKind {
    fn default_count(self, defaults: WindowDefaults) -> i32 {
        match self {
            CommandKind::List => defaults.list,
            CommandKind::Stack => defaults.stack,
            _ => 0,
        }
    }

    fn takes_count(self) -> bool {
        matches!(self, CommandKind::List | CommandKind::Stack)
    }
}

impl Command {
    /// Parse one line of operator input. `None` is the "wrong format" case.
    ///
    /// Tokens are split on single spaces, so `list  5` has an empty middle
    /// token and is rejected.
    pub fn parse(line: &str) -> Option<Command> {
        Self::parse_with(line, WindowDefaults::default())
    }

    /// Like [`Command::parse`], with caller-chosen window sizes.
    pub fn parse_with(line: &str, defaults: WindowDefaults) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let tokens: Vec<&str> = line.split(' ').collect();

        match tokens.as_slice() {
            [verb] => {
                let kind = lookup(verb)?;
                Some(Command {
                    kind,
                    count: kind.default_count(defaults),
                })
            }
            [verb, arg] => {
                let count = arg.parse::<i32>().ok()?;
                let kind = lookup(verb).filter(|k| k.takes_count())?;
                Some(Command { kind, count })
            }
            _ => None,
        }
    }
}
