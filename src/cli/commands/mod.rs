pub mod admin;
pub mod auth;
pub mod logging;
pub mod mail;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_STATE_DIR: &str = "state-dir";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("webmail")
        .about("Webmail client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long("api-url")
                .help("Base URL of the mail API")
                .long_help(
                    "Base URL of the mail API, including any path prefix, example: https://mail.tld/api",
                )
                .env("WEBMAIL_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_STATE_DIR)
                .long("state-dir")
                .help("Directory holding the stored session")
                .env("WEBMAIL_STATE_DIR")
                .global(true),
        );

    let command = auth::with_args(command);
    let command = mail::with_args(command);
    let command = admin::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "webmail");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Webmail client".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_globals() {
        temp_env::with_vars(
            [
                ("WEBMAIL_API_URL", None::<&str>),
                ("WEBMAIL_STATE_DIR", None),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "webmail",
                    "--api-url",
                    "https://mail.tld/api",
                    "--state-dir",
                    "/tmp/webmail",
                    "whoami",
                ]);
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("https://mail.tld/api".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_STATE_DIR).cloned(),
                    Some("/tmp/webmail".to_string())
                );
                assert_eq!(matches.subcommand_name(), Some(auth::CMD_WHOAMI));
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("WEBMAIL_API_URL", Some("https://mail.tld/api")),
                ("WEBMAIL_STATE_DIR", Some("/tmp/webmail")),
                ("WEBMAIL_PASSWORD", Some("secret1")),
                ("WEBMAIL_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches =
                    new().get_matches_from(vec!["webmail", "login", "--email", "a@b.io"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("https://mail.tld/api".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                let login = matches.subcommand_matches(auth::CMD_LOGIN);
                assert_eq!(
                    login.and_then(|m| m.get_one::<String>(auth::ARG_PASSWORD).cloned()),
                    Some("secret1".to_string())
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("WEBMAIL_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["webmail", "logout"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("WEBMAIL_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["webmail".to_string(), "logout".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_mail_list_defaults_to_inbox() {
        let matches = new().get_matches_from(vec!["webmail", "mail", "list"]);
        let list = matches
            .subcommand_matches(mail::CMD_MAIL)
            .and_then(|m| m.subcommand_matches(mail::CMD_LIST));
        assert_eq!(
            list.and_then(|m| m.get_one::<String>(mail::ARG_FOLDER).cloned()),
            Some("inbox".to_string())
        );
    }

    #[test]
    fn test_mail_list_rejects_unknown_folder() {
        let result = new().try_get_matches_from(vec!["webmail", "mail", "list", "-f", "spam"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_send_requires_all_fields() {
        let result =
            new().try_get_matches_from(vec!["webmail", "mail", "send", "--to", "b@c.io"]);
        assert!(result.is_err());

        let result = new().try_get_matches_from(vec!["webmail", "mail", "draft", "-s", "Plans"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_admin_toggle_takes_id() {
        let matches = new().get_matches_from(vec!["webmail", "admin", "toggle", "42"]);
        let toggle = matches
            .subcommand_matches(admin::CMD_ADMIN)
            .and_then(|m| m.subcommand_matches(admin::CMD_TOGGLE));
        assert_eq!(
            toggle.and_then(|m| m.get_one::<String>(admin::ARG_USER_ID).cloned()),
            Some("42".to_string())
        );
    }
}
