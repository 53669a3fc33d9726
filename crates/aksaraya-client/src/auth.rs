//! Login and registration flows.

use aksaraya_api_models::{LoginRequest, RegisterRequest, User};

use crate::api::CatalogApi;
use crate::error::{ClientError, ClientResult};
use crate::session::{SessionPersistence, SessionStore};

/// Log in with `request` and store the resulting session.
///
/// # Errors
///
/// Returns the transport error (the session stays empty) or the persistence error.
pub async fn sign_in<A, P>(
    api: &A,
    session: &mut SessionStore<P>,
    request: &LoginRequest,
) -> ClientResult<User>
where
    A: CatalogApi + ?Sized,
    P: SessionPersistence,
{
    validate_credentials(&request.email, &request.password)?;
    let response = api.login(request).await.inspect_err(|err| {
        tracing::warn!(error = %err, "login rejected");
    })?;
    session.login(response.user.clone(), response.token)?;
    Ok(response.user)
}

/// Register an account, then log in with the same credentials.
///
/// # Errors
///
/// Returns the registration error without attempting a login, or any
/// [`sign_in`] error.
pub async fn sign_up<A, P>(
    api: &A,
    session: &mut SessionStore<P>,
    request: &RegisterRequest,
) -> ClientResult<User>
where
    A: CatalogApi + ?Sized,
    P: SessionPersistence,
{
    if request.name.trim().is_empty() {
        return Err(ClientError::Validation {
            field: "name",
            reason: "Nama wajib diisi.",
        });
    }
    validate_credentials(&request.email, &request.password)?;
    api.register(request).await.inspect_err(|err| {
        tracing::warn!(error = %err, "registration rejected");
    })?;
    let login = LoginRequest {
        email: request.email.clone(),
        password: request.password.clone(),
    };
    sign_in(api, session, &login).await
}

fn validate_credentials(email: &str, password: &str) -> ClientResult<()> {
    if email.trim().is_empty() {
        return Err(ClientError::Validation {
            field: "email",
            reason: "Email wajib diisi.",
        });
    }
    if password.is_empty() {
        return Err(ClientError::Validation {
            field: "password",
            reason: "Kata sandi wajib diisi.",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_credentials;

    #[test]
    fn blank_credentials_fail_locally() {
        assert!(validate_credentials("", "x").is_err());
        assert!(validate_credentials("a@b.c", "").is_err());
        assert!(validate_credentials("a@b.c", "secret").is_ok());
    }
}
