use crate::{
    cli::{
        actions::{authorize, render, request_failed, sign_in_failed},
        globals::GlobalArgs,
    },
    features::auth::{
        client,
        forms::{validate_otp_email, RegisterForm, ResetPasswordForm},
        types::Credentials,
    },
};
use anyhow::{anyhow, Result};
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub enum Command {
    Register {
        name: String,
        email: String,
        password: SecretString,
        confirm_password: SecretString,
    },
    Login {
        email: String,
        password: SecretString,
    },
    Logout,
    WhoAmI,
    Otp {
        email: String,
    },
    ResetPassword {
        email: String,
        otp: String,
        new_password: SecretString,
        confirm_password: SecretString,
    },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Handle the auth commands
/// # Errors
/// Returns an error if validation or the backend call fails.
pub async fn execute(args: Args) -> Result<()> {
    let auth = args.globals.context()?;

    match args.command {
        Command::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let registration = RegisterForm {
                name,
                email,
                password,
                confirm_password,
            }
            .validate()?;

            let response = auth
                .register(&registration)
                .await
                .map_err(|err| sign_in_failed(&auth, &err, "Registration failed"))?;
            debug!(signed_in = auth.is_authenticated(), "registration complete");

            println!(
                "{}",
                response
                    .message
                    .unwrap_or_else(|| "Registration successful".to_string())
            );
        }

        Command::Login { email, password } => {
            let credentials = Credentials::new(email, password);
            auth.login(&credentials)
                .await
                .map_err(|err| sign_in_failed(&auth, &err, "Login failed"))?;

            match auth.user() {
                Some(user) => println!("Signed in as {} <{}>", user.name, user.email),
                None => println!("Signed in"),
            }
        }

        Command::Logout => {
            auth.logout()?;
            println!("Signed out");
        }

        Command::WhoAmI => {
            authorize(&auth, false)?;
            let user = client::current_user(auth.api())?
                .ok_or_else(|| anyhow!("Signed in, but no user profile is stored."))?;
            render::user_summary(&user);
        }

        Command::Otp { email } => {
            let email = validate_otp_email(&email)?;
            let ack = client::request_otp(auth.api(), &email)
                .await
                .map_err(|err| request_failed(&auth, &err, "Failed to send OTP"))?;
            println!(
                "{}",
                ack.message
                    .unwrap_or_else(|| "OTP sent to your email".to_string())
            );
        }

        Command::ResetPassword {
            email,
            otp,
            new_password,
            confirm_password,
        } => {
            let request = ResetPasswordForm {
                email,
                otp,
                new_password,
                confirm_password,
            }
            .validate()?;

            let ack = client::reset_password(auth.api(), &request)
                .await
                .map_err(|err| request_failed(&auth, &err, "Failed to reset password"))?;
            println!(
                "{}",
                ack.message
                    .unwrap_or_else(|| "Password reset successful".to_string())
            );
        }
    }

    Ok(())
}
