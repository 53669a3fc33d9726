//! `localStorage` persistence for the session.
//!
//! The token is stored raw under `token`; the user as JSON under `user`.

use aksaraya_api_models::User;
use aksaraya_client::{ClientError, ClientResult, SessionPersistence, SessionSnapshot};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const TOKEN_KEY: &str = "token";
pub(crate) const USER_KEY: &str = "user";

/// Session persistence backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

fn storage_error(operation: &'static str, detail: impl std::fmt::Debug) -> ClientError {
    ClientError::Storage {
        operation,
        detail: format!("{detail:?}"),
    }
}

impl SessionPersistence for BrowserStorage {
    fn load(&self) -> ClientResult<SessionSnapshot> {
        let token = LocalStorage::raw()
            .get_item(TOKEN_KEY)
            .map_err(|err| storage_error("read", err))?
            .filter(|token| !token.trim().is_empty());
        let user = match LocalStorage::get::<User>(USER_KEY) {
            Ok(user) => Some(user),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => return Err(storage_error("decode", err)),
        };
        Ok(SessionSnapshot { token, user })
    }

    fn save(&self, snapshot: &SessionSnapshot) -> ClientResult<()> {
        match &snapshot.token {
            Some(token) => LocalStorage::raw()
                .set_item(TOKEN_KEY, token)
                .map_err(|err| storage_error("write", err))?,
            None => LocalStorage::delete(TOKEN_KEY),
        }
        match &snapshot.user {
            Some(user) => {
                LocalStorage::set(USER_KEY, user).map_err(|err| storage_error("write", err))?;
            }
            None => LocalStorage::delete(USER_KEY),
        }
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        Ok(())
    }
}
