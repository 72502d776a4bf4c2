use serde_json::{Map, Value};

/// Body returned by the user directory on `GET /users`
#[derive(Debug)]
pub(crate) struct GetUsersResponse {
    pub users: Option<Vec<String>>,
}

impl GetUsersResponse {
    /// decode a JSON object body; arrays and scalars are rejected
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let mut fields: Map<String, Value> = serde_json::from_slice(body)?;
        let users = match fields.remove("users") {
            None | Some(Value::Null) => None,
            Some(users) => Some(serde_json::from_value(users)?),
        };
        Ok(Self { users })
    }
}
