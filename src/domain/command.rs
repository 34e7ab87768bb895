//! Bot command model.
//!
//! The command surface is small and fixed, so it is modelled as a tagged
//! enum parsed from a command name plus its string options. The
//! registration schema lives next to it in [`COMMAND_SPECS`].

/// Errors produced while turning a raw invocation into a [`BotCommand`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing required option '{option}' for /{command}")]
    MissingOption {
        command: &'static str,
        option: &'static str,
    },
}

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    AddDomain { domain: String },
    RemoveDomain { domain: String },
    ListDomains,
    Archive { url: String },
}

pub const ADD_DOMAIN: &str = "adddomain";
pub const REMOVE_DOMAIN: &str = "removedomain";
pub const LIST_DOMAINS: &str = "listdomains";
pub const ARCHIVE: &str = "archive";

impl BotCommand {
    /// Parses a command from its name and `(option name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError::UnknownCommand`] for names outside the
    /// command set and [`CommandParseError::MissingOption`] when a required
    /// option is absent.
    pub fn parse(name: &str, options: &[(&str, &str)]) -> Result<Self, CommandParseError> {
        let option = |command: &'static str, key: &'static str| {
            options
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
                .ok_or(CommandParseError::MissingOption {
                    command,
                    option: key,
                })
        };

        match name {
            ADD_DOMAIN => Ok(BotCommand::AddDomain {
                domain: option(ADD_DOMAIN, "domain")?,
            }),
            REMOVE_DOMAIN => Ok(BotCommand::RemoveDomain {
                domain: option(REMOVE_DOMAIN, "domain")?,
            }),
            LIST_DOMAINS => Ok(BotCommand::ListDomains),
            ARCHIVE => Ok(BotCommand::Archive {
                url: option(ARCHIVE, "url")?,
            }),
            other => Err(CommandParseError::UnknownCommand(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BotCommand::AddDomain { .. } => ADD_DOMAIN,
            BotCommand::RemoveDomain { .. } => REMOVE_DOMAIN,
            BotCommand::ListDomains => LIST_DOMAINS,
            BotCommand::Archive { .. } => ARCHIVE,
        }
    }

    /// Domain management is restricted to guild administrators.
    pub fn requires_admin(&self) -> bool {
        !matches!(self, BotCommand::Archive { .. })
    }
}

/// A single string option in a command's registration schema.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Registration schema for one slash command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub option: Option<OptionSpec>,
    pub admin_only: bool,
}

pub const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        name: ADD_DOMAIN,
        description: "Add a domain to the monitored list",
        option: Some(OptionSpec {
            name: "domain",
            description: "example.com",
        }),
        admin_only: true,
    },
    CommandSpec {
        name: REMOVE_DOMAIN,
        description: "Remove a domain from the monitored list",
        option: Some(OptionSpec {
            name: "domain",
            description: "example.com",
        }),
        admin_only: true,
    },
    CommandSpec {
        name: LIST_DOMAINS,
        description: "Show all monitored domains",
        option: None,
        admin_only: true,
    },
    CommandSpec {
        name: ARCHIVE,
        description: "Return the archived version of any URL",
        option: Some(OptionSpec {
            name: "url",
            description: "Full URL to archive",
        }),
        admin_only: false,
    },
];

/// The user who invoked a command.
#[derive(Debug, Clone)]
pub struct Invoker {
    pub tag: String,
    pub is_admin: bool,
    pub guild_id: Option<u64>,
}
