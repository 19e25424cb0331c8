use clap::{Arg, Command};

pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_OTP: &str = "otp";
pub const CMD_RESET_PASSWORD: &str = "reset-password";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_OTP: &str = "otp";
pub const ARG_NEW_PASSWORD: &str = "new-password";

fn email() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email address")
        .required(true)
}

fn secret(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create an account")
                .arg(
                    Arg::new(ARG_NAME)
                        .short('n')
                        .long("name")
                        .help("Full name")
                        .required(true),
                )
                .arg(email())
                .arg(secret(ARG_PASSWORD, "Password, at least 6 characters"))
                .arg(secret(ARG_CONFIRM_PASSWORD, "Password confirmation")),
        )
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in and store the session")
                .arg(email())
                .arg(secret(ARG_PASSWORD, "Account password").env("WEBMAIL_PASSWORD")),
        )
        .subcommand(Command::new(CMD_LOGOUT).about("Forget the stored session"))
        .subcommand(Command::new(CMD_WHOAMI).about("Show the signed-in user"))
        .subcommand(
            Command::new(CMD_OTP)
                .about("Request a password reset code by email")
                .arg(email()),
        )
        .subcommand(
            Command::new(CMD_RESET_PASSWORD)
                .about("Reset the password with an emailed code")
                .arg(email())
                .arg(
                    Arg::new(ARG_OTP)
                        .long("otp")
                        .help("6-digit code received by email")
                        .required(true),
                )
                .arg(secret(ARG_NEW_PASSWORD, "New password, at least 6 characters"))
                .arg(secret(ARG_CONFIRM_PASSWORD, "New password confirmation")),
        )
}
