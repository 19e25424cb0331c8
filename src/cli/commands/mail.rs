use crate::features::mail::Folder;
use clap::{builder::PossibleValuesParser, Arg, Command};

pub const CMD_DASHBOARD: &str = "dashboard";
pub const CMD_MAIL: &str = "mail";

pub const CMD_LIST: &str = "list";
pub const CMD_SHOW: &str = "show";
pub const CMD_READ: &str = "read";
pub const CMD_DELETE: &str = "delete";
pub const CMD_SEARCH: &str = "search";
pub const CMD_SEND: &str = "send";
pub const CMD_DRAFT: &str = "draft";

pub const ARG_FOLDER: &str = "folder";
pub const ARG_ID: &str = "id";
pub const ARG_QUERY: &str = "query";
pub const ARG_TO: &str = "to";
pub const ARG_SUBJECT: &str = "subject";
pub const ARG_BODY: &str = "body";
pub const ARG_MARK_READ: &str = "mark-read";
pub const ARG_REMOVE: &str = "remove";

fn id() -> Arg {
    Arg::new(ARG_ID).help("Mail id").required(true)
}

fn compose_args(command: Command, required: bool) -> Command {
    command
        .arg(
            Arg::new(ARG_TO)
                .short('t')
                .long("to")
                .help("Recipient email address")
                .required(required),
        )
        .arg(
            Arg::new(ARG_SUBJECT)
                .short('s')
                .long("subject")
                .help("Subject line")
                .required(required),
        )
        .arg(
            Arg::new(ARG_BODY)
                .short('b')
                .long("body")
                .help("Message body")
                .required(required),
        )
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    let folders = Folder::ALL.map(Folder::as_str);

    command
        .subcommand(
            Command::new(CMD_DASHBOARD)
                .about("Overview of inbox, sent and drafts")
                .arg(
                    Arg::new(ARG_MARK_READ)
                        .long("read")
                        .value_name("ID")
                        .help("Mark a mail read before showing the overview"),
                )
                .arg(
                    Arg::new(ARG_REMOVE)
                        .long("delete")
                        .value_name("ID")
                        .help("Delete a mail before showing the overview")
                        .conflicts_with(ARG_MARK_READ),
                ),
        )
        .subcommand(
            Command::new(CMD_MAIL)
                .about("Read, search and write mail")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new(CMD_LIST).about("List a folder").arg(
                        Arg::new(ARG_FOLDER)
                            .short('f')
                            .long("folder")
                            .help("Folder to list")
                            .default_value(Folder::Inbox.as_str())
                            .value_parser(PossibleValuesParser::new(folders)),
                    ),
                )
                .subcommand(
                    Command::new(CMD_SHOW)
                        .about("Show a mail and mark it read")
                        .arg(id()),
                )
                .subcommand(Command::new(CMD_READ).about("Mark a mail as read").arg(id()))
                .subcommand(Command::new(CMD_DELETE).about("Delete a mail").arg(id()))
                .subcommand(
                    Command::new(CMD_SEARCH)
                        .about("Search your mail")
                        .arg(Arg::new(ARG_QUERY).help("Search terms").required(true)),
                )
                .subcommand(compose_args(
                    Command::new(CMD_SEND).about("Send a mail"),
                    true,
                ))
                .subcommand(compose_args(
                    Command::new(CMD_DRAFT).about("Save a draft"),
                    false,
                )),
        )
}
