use std::io::{self, IsTerminal};

use aksaraya_api_models::{LoginRequest, RegisterRequest};
use aksaraya_client::auth::{sign_in, sign_up};
use aksaraya_client::{ClientError, FallbackMessage};
use anyhow::anyhow;

use crate::cli::{LoginArgs, OutputFormat, RegisterArgs, WhoamiArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_user;

pub(crate) async fn handle_login(ctx: &AppContext, args: LoginArgs) -> CliResult<()> {
    let password = resolve_password(args.password)?;
    let request = LoginRequest {
        email: args.email.trim().to_string(),
        password,
    };

    let mut session = ctx.session();
    let user = sign_in(&ctx.api, &mut session, &request)
        .await
        .map_err(|err| CliError::from_client(&err, FallbackMessage::Login))?;

    println!("Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub(crate) async fn handle_register(ctx: &AppContext, args: RegisterArgs) -> CliResult<()> {
    let password = resolve_password(args.password)?;
    let request = RegisterRequest {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        password,
    };

    let mut session = ctx.session();
    let user = sign_up(&ctx.api, &mut session, &request)
        .await
        .map_err(|err| CliError::from_client(&err, FallbackMessage::Register))?;

    println!("Account created; logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub(crate) fn handle_logout(ctx: &AppContext) -> CliResult<()> {
    let mut session = ctx.session();
    session.logout().map_err(CliError::from)?;
    println!("Logged out (cleared {})", ctx.session_file.display());
    Ok(())
}

pub(crate) async fn handle_whoami(
    ctx: &AppContext,
    args: WhoamiArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let mut session = ctx.session();
    if !session.is_authenticated() {
        return Err(CliError::from(ClientError::Unauthenticated));
    }
    if args.refresh && session.refresh_user(&ctx.api).await.is_none() {
        eprintln!("warning: could not refresh the account; showing the stored copy");
    }
    let user = session
        .user()
        .ok_or_else(|| CliError::from(ClientError::Unauthenticated))?;
    render_user(user, format)
}

fn resolve_password(password: Option<String>) -> CliResult<String> {
    if let Some(password) = password {
        if password.is_empty() {
            return Err(CliError::validation("password cannot be empty"));
        }
        return Ok(password);
    }

    if io::stdin().is_terminal() {
        let password = rpassword::prompt_password("Password: ")
            .map_err(|err| CliError::failure(anyhow!("failed to read password: {err}")))?;
        if password.is_empty() {
            return Err(CliError::validation("password cannot be empty"));
        }
        Ok(password)
    } else {
        Err(CliError::validation(
            "password required; supply via --password or AKSARAYA_PASSWORD when running non-interactively",
        ))
    }
}
