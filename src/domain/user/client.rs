//! Users sub-client: the user accessors.

use crate::client::BoardClient;
use crate::domain::user::wire::{EverybodyResponse, UserResponse};
use crate::domain::user::User;
use crate::error::{DomainFailure, UNABLE_TO_GET_USER};
use crate::http::RequestOutcome;
use crate::network::{EVERYBODY_PATH, USER_PATH};

use serde::de::DeserializeOwned;

pub struct Users<'a> {
    pub(crate) client: &'a BoardClient,
}

impl<'a> Users<'a> {
    /// Fetch the signed-in user.
    pub async fn get(&self) -> Result<User, DomainFailure> {
        let resp: UserResponse = self.fetch(USER_PATH).await?;
        User::try_from(resp).map_err(|e| DomainFailure::decode(UNABLE_TO_GET_USER, e))
    }

    /// Fetch every user, in the order the server sent them.
    pub async fn everybody(&self) -> Result<Vec<User>, DomainFailure> {
        let resp: EverybodyResponse = self.fetch(EVERYBODY_PATH).await?;
        tracing::debug!(count = resp.len(), "Fetched user list");

        resp.into_iter()
            .map(|entry| {
                User::try_from(entry).map_err(|e| DomainFailure::decode(UNABLE_TO_GET_USER, e))
            })
            .collect()
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainFailure> {
        match self.client.http.perform_get(path).await {
            RequestOutcome::Success(payload) => payload
                .json::<T>()
                .await
                .map_err(|e| DomainFailure::decode(UNABLE_TO_GET_USER, e)),
            RequestOutcome::Failure(failure) => {
                Err(DomainFailure::from_request(UNABLE_TO_GET_USER, failure))
            }
        }
    }
}
