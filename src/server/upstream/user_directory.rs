use log::{error, warn};
use reqwest::Client;
use crate::server::controller::error::CustomError;
use crate::server::model::config::UpstreamConfig;
use crate::server::model::user::GetUsersResponse;

/// Client for the user directory service
#[derive(Debug, Clone)]
pub(crate) struct UserDirectory {
    client: Client,
    users_url: String,
}

impl UserDirectory {
    pub fn new(config: &UpstreamConfig) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            users_url: config.users_url(),
        })
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    /// fetch user ids, in the order the directory returned them
    pub async fn fetch_users(&self) -> Result<Vec<String>, CustomError> {
        let res = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = res.status();
        if !status.is_success() {
            warn!("user directory at {} responded with {}", self.users_url, status);
            return Err(CustomError::UpstreamStatus { status: status.as_u16() });
        }

        let body = res.bytes().await.map_err(|e| self.transport_error(e))?;
        let GetUsersResponse { users } = GetUsersResponse::from_slice(&body).map_err(|e| {
            warn!("failed to decode user directory body, {}", e);
            CustomError::MalformedUpstreamBody
        })?;

        users.ok_or_else(|| {
            warn!("user directory body has no users field");
            CustomError::MissingUsers
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> CustomError {
        if e.is_timeout() {
            warn!("timeout calling user directory at {}", self.users_url);
            return CustomError::Timeout;
        }
        error!("failed to call user directory at {}, {}", self.users_url, e);
        CustomError::UpstreamUnavailable
    }
}
