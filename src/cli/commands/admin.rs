use clap::{Arg, Command};

pub const CMD_ADMIN: &str = "admin";

pub const CMD_USERS: &str = "users";
pub const CMD_TOGGLE: &str = "toggle";
pub const CMD_MAIL: &str = "mail";
pub const CMD_DELETE: &str = "delete";

pub const ARG_USER_ID: &str = "user-id";

fn user_id() -> Arg {
    Arg::new(ARG_USER_ID).help("User id").required(true)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.subcommand(
        Command::new(CMD_ADMIN)
            .about("User management (admin role required)")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Command::new(CMD_USERS).about("List users with statistics"))
            .subcommand(
                Command::new(CMD_TOGGLE)
                    .about("Activate or deactivate a user")
                    .arg(user_id()),
            )
            .subcommand(
                Command::new(CMD_MAIL)
                    .about("Show a user's inbox and sent mail")
                    .arg(user_id()),
            )
            .subcommand(Command::new(CMD_DELETE).about("Delete a user").arg(user_id())),
    )
}
