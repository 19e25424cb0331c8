use crate::{
    cli::{
        actions::{admin, auth, dashboard, mail, Action},
        commands::{admin as admin_cmd, auth as auth_cmd, mail as mail_cmd},
        globals::GlobalArgs,
    },
    features::mail::{ComposeForm, Folder},
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

fn string(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: {id}"))
}

fn optional(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn secret(matches: &ArgMatches, id: &str) -> Result<SecretString> {
    string(matches, id).map(SecretString::from)
}

fn compose_form(matches: &ArgMatches) -> ComposeForm {
    ComposeForm::new(
        optional(matches, mail_cmd::ARG_TO),
        optional(matches, mail_cmd::ARG_SUBJECT),
        optional(matches, mail_cmd::ARG_BODY),
    )
}

fn auth_command(name: &str, matches: &ArgMatches) -> Result<Option<auth::Command>> {
    let command = match name {
        auth_cmd::CMD_REGISTER => auth::Command::Register {
            name: string(matches, auth_cmd::ARG_NAME)?,
            email: string(matches, auth_cmd::ARG_EMAIL)?,
            password: secret(matches, auth_cmd::ARG_PASSWORD)?,
            confirm_password: secret(matches, auth_cmd::ARG_CONFIRM_PASSWORD)?,
        },
        auth_cmd::CMD_LOGIN => auth::Command::Login {
            email: string(matches, auth_cmd::ARG_EMAIL)?,
            password: secret(matches, auth_cmd::ARG_PASSWORD)?,
        },
        auth_cmd::CMD_LOGOUT => auth::Command::Logout,
        auth_cmd::CMD_WHOAMI => auth::Command::WhoAmI,
        auth_cmd::CMD_OTP => auth::Command::Otp {
            email: string(matches, auth_cmd::ARG_EMAIL)?,
        },
        auth_cmd::CMD_RESET_PASSWORD => auth::Command::ResetPassword {
            email: string(matches, auth_cmd::ARG_EMAIL)?,
            otp: string(matches, auth_cmd::ARG_OTP)?,
            new_password: secret(matches, auth_cmd::ARG_NEW_PASSWORD)?,
            confirm_password: secret(matches, auth_cmd::ARG_CONFIRM_PASSWORD)?,
        },
        _ => return Ok(None),
    };
    Ok(Some(command))
}

fn mail_command(matches: &ArgMatches) -> Result<mail::Command> {
    let (name, sub) = matches
        .subcommand()
        .context("missing mail subcommand")?;

    Ok(match name {
        mail_cmd::CMD_LIST => {
            let folder = string(sub, mail_cmd::ARG_FOLDER)?;
            mail::Command::List {
                folder: folder.parse::<Folder>().map_err(|err| anyhow!(err))?,
            }
        }
        mail_cmd::CMD_SHOW => mail::Command::Show {
            id: string(sub, mail_cmd::ARG_ID)?,
        },
        mail_cmd::CMD_READ => mail::Command::Read {
            id: string(sub, mail_cmd::ARG_ID)?,
        },
        mail_cmd::CMD_DELETE => mail::Command::Delete {
            id: string(sub, mail_cmd::ARG_ID)?,
        },
        mail_cmd::CMD_SEARCH => mail::Command::Search {
            query: string(sub, mail_cmd::ARG_QUERY)?,
        },
        mail_cmd::CMD_SEND => mail::Command::Send(compose_form(sub)),
        mail_cmd::CMD_DRAFT => mail::Command::Draft(compose_form(sub)),
        other => return Err(anyhow!("unknown mail command: {other}")),
    })
}

fn admin_command(matches: &ArgMatches) -> Result<admin::Command> {
    let (name, sub) = matches
        .subcommand()
        .context("missing admin subcommand")?;

    Ok(match name {
        admin_cmd::CMD_USERS => admin::Command::Users,
        admin_cmd::CMD_TOGGLE => admin::Command::Toggle {
            id: string(sub, admin_cmd::ARG_USER_ID)?,
        },
        admin_cmd::CMD_MAIL => admin::Command::Mail {
            id: string(sub, admin_cmd::ARG_USER_ID)?,
        },
        admin_cmd::CMD_DELETE => admin::Command::Delete {
            id: string(sub, admin_cmd::ARG_USER_ID)?,
        },
        other => return Err(anyhow!("unknown admin command: {other}")),
    })
}

fn dashboard_change(matches: &ArgMatches) -> Option<dashboard::Change> {
    if let Some(id) = matches.get_one::<String>(mail_cmd::ARG_MARK_READ) {
        return Some(dashboard::Change::MarkRead(id.clone()));
    }
    matches
        .get_one::<String>(mail_cmd::ARG_REMOVE)
        .map(|id| dashboard::Change::Delete(id.clone()))
}

/// # Errors
/// Returns an error if required arguments are missing or the subcommand is
/// unknown.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::from_matches(matches);
    let (name, sub) = matches.subcommand().context("missing command")?;

    if let Some(command) = auth_command(name, sub)? {
        return Ok(Action::Auth(auth::Args { globals, command }));
    }

    match name {
        mail_cmd::CMD_DASHBOARD => Ok(Action::Dashboard(dashboard::Args {
            globals,
            change: dashboard_change(sub),
        })),
        mail_cmd::CMD_MAIL => Ok(Action::Mail(mail::Args {
            globals,
            command: mail_command(sub)?,
        })),
        admin_cmd::CMD_ADMIN => Ok(Action::Admin(admin::Args {
            globals,
            command: admin_command(sub)?,
        })),
        other => Err(anyhow!("unknown command: {other}")),
    }
}
