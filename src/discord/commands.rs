//! Conversion between the bot command model and Discord's slash commands.

use serenity::all::{
    CommandDataOption, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::domain::command::{BotCommand, COMMAND_SPECS, CommandParseError, CommandSpec, Invoker};

/// Builds the global slash command definitions.
///
/// Administrator-only commands are hidden from members without the
/// Administrator permission and are not available in direct messages.
pub fn create_commands() -> Vec<CreateCommand> {
    COMMAND_SPECS.iter().map(create_command).collect()
}

#[allow(deprecated)]
fn create_command(spec: &CommandSpec) -> CreateCommand {
    let mut command = CreateCommand::new(spec.name).description(spec.description);

    if let Some(option) = spec.option {
        command = command.add_option(
            CreateCommandOption::new(CommandOptionType::String, option.name, option.description)
                .required(true),
        );
    }

    if spec.admin_only {
        command = command
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .dm_permission(false);
    }

    command
}

/// Collects the string options of an interaction as `(name, value)` pairs.
fn string_options(options: &[CommandDataOption]) -> Vec<(&str, &str)> {
    options
        .iter()
        .filter_map(|o| o.value.as_str().map(|v| (o.name.as_str(), v)))
        .collect()
}

/// Parses a slash command interaction into a [`BotCommand`].
///
/// # Errors
///
/// Returns [`CommandParseError`] for unknown names or missing options.
pub fn parse_interaction(interaction: &CommandInteraction) -> Result<BotCommand, CommandParseError> {
    let options = string_options(&interaction.data.options);
    BotCommand::parse(&interaction.data.name, &options)
}

/// Describes the user behind an interaction.
///
/// Permissions come from the resolved member of a guild interaction; in
/// direct messages nobody is an administrator.
pub fn invoker_of(interaction: &CommandInteraction) -> Invoker {
    let is_admin = interaction
        .member
        .as_ref()
        .and_then(|m| m.permissions)
        .is_some_and(|p| p.administrator());

    Invoker {
        tag: interaction.user.tag(),
        is_admin,
        guild_id: interaction.guild_id.map(|g| g.get()),
    }
}
