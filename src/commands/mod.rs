//! Command definitions for the interactive assistant
//!
//! Defines the closed set of commands a user can type, and the outcome the
//! dispatcher hands back for each of them.

mod dispatcher;

pub use dispatcher::Dispatcher;

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct Command {
    /// Command token (what user types)
    pub name: &'static str,
    /// Argument synopsis
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Which handler runs it
    pub kind: CommandKind,
}

/// One variant per command token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    Close,
    Exit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        usage: "hello",
        description: "Greet the assistant",
        kind: CommandKind::Hello,
    },
    Command {
        name: "add",
        usage: "add <name> <phone>",
        description: "Add a contact, or another phone to an existing one",
        kind: CommandKind::Add,
    },
    Command {
        name: "change",
        usage: "change <name> <old phone> <new phone>",
        description: "Replace one of a contact's phones",
        kind: CommandKind::Change,
    },
    Command {
        name: "phone",
        usage: "phone <name>",
        description: "Show a contact's phones",
        kind: CommandKind::Phone,
    },
    Command {
        name: "all",
        usage: "all",
        description: "List every contact",
        kind: CommandKind::All,
    },
    Command {
        name: "add-birthday",
        usage: "add-birthday <name> <DD.MM.YYYY>",
        description: "Set a contact's birthday",
        kind: CommandKind::AddBirthday,
    },
    Command {
        name: "show-birthday",
        usage: "show-birthday <name>",
        description: "Show a contact's birthday",
        kind: CommandKind::ShowBirthday,
    },
    Command {
        name: "birthdays",
        usage: "birthdays",
        description: "Birthdays to celebrate in the coming week",
        kind: CommandKind::Birthdays,
    },
    Command {
        name: "delete",
        usage: "delete <name>",
        description: "Remove a contact",
        kind: CommandKind::Delete,
    },
    Command {
        name: "help",
        usage: "help",
        description: "Show this list",
        kind: CommandKind::Help,
    },
    Command {
        name: "close",
        usage: "close",
        description: "Save and quit",
        kind: CommandKind::Close,
    },
    Command {
        name: "exit",
        usage: "exit",
        description: "Save and quit",
        kind: CommandKind::Exit,
    },
];

impl CommandKind {
    /// Resolve a command token; tokens are expected in lower case
    pub fn from_token(token: &str) -> Option<Self> {
        COMMANDS.iter().find(|c| c.name == token).map(|c| c.kind)
    }

    /// The table entry for this command
    pub fn command(self) -> &'static Command {
        let index = match self {
            Self::Hello => 0,
            Self::Add => 1,
            Self::Change => 2,
            Self::Phone => 3,
            Self::All => 4,
            Self::AddBirthday => 5,
            Self::ShowBirthday => 6,
            Self::Birthdays => 7,
            Self::Delete => 8,
            Self::Help => 9,
            Self::Close => 10,
            Self::Exit => 11,
        };
        &COMMANDS[index]
    }

    pub fn usage(self) -> &'static str {
        self.command().usage
    }

    /// Whether the command can change the address book
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Change | Self::AddBirthday | Self::Delete
        )
    }
}

/// What the dispatcher returns for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to show the user
    pub message: String,
    /// Whether the interaction loop should stop
    pub exit: bool,
}

impl Outcome {
    /// A reply that keeps the session going
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }

    /// A reply that ends the session
    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_one_entry() {
        let kinds = [
            CommandKind::Hello,
            CommandKind::Add,
            CommandKind::Change,
            CommandKind::Phone,
            CommandKind::All,
            CommandKind::AddBirthday,
            CommandKind::ShowBirthday,
            CommandKind::Birthdays,
            CommandKind::Delete,
            CommandKind::Help,
            CommandKind::Close,
            CommandKind::Exit,
        ];
        for kind in kinds {
            let count = COMMANDS.iter().filter(|c| c.kind == kind).count();
            assert_eq!(count, 1, "{:?}", kind);
            assert_eq!(kind.command().kind, kind);
            assert_eq!(CommandKind::from_token(kind.command().name), Some(kind));
        }
        assert_eq!(COMMANDS.len(), kinds.len());
    }

    #[test]
    fn test_from_token() {
        assert_eq!(CommandKind::from_token("add-birthday"), Some(CommandKind::AddBirthday));
        assert_eq!(CommandKind::from_token("close"), Some(CommandKind::Close));
        assert_eq!(CommandKind::from_token("ADD"), None);
        assert_eq!(CommandKind::from_token("remove"), None);
        assert_eq!(CommandKind::from_token(""), None);
    }

    #[test]
    fn test_usage_and_mutation() {
        assert_eq!(CommandKind::Add.usage(), "add <name> <phone>");
        assert!(CommandKind::Change.is_mutating());
        assert!(!CommandKind::Phone.is_mutating());
        assert!(!CommandKind::Birthdays.is_mutating());
    }

    #[test]
    fn test_outcome_constructors() {
        assert!(!Outcome::reply("hi").exit);
        assert!(Outcome::exit("bye").exit);
    }
}
