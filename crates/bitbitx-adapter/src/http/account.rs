/*
[INPUT]:  Registration/login credentials
[OUTPUT]: Account creation results and populated sessions
[POS]:    HTTP layer - account service calls
[UPDATE]: When account endpoints or session extraction change
*/

use serde_json::Value;
use tracing::debug;

use crate::auth::Session;
use crate::http::{BitbitxClient, BitbitxError, Result};
use crate::types::{Command, RegisterRequest, SERVICE_LOGIN, SERVICE_REGISTER};

impl BitbitxClient {
    /// Register a new account.
    ///
    /// serviceId `dna_register`. Succeeds on returnCode "0"; any other
    /// code fails with the server's returnMsg. Never touches the session.
    pub async fn register(&self, request: RegisterRequest) -> Result<()> {
        let command = Command::new(SERVICE_REGISTER)
            .param("mobile", request.mobile)
            .param("email", request.email)
            .param("name", request.name)
            .param("password", request.password)
            .param("pay_pwd", request.pay_password);

        let response = self.call(&command).await?;
        response.into_params()?;
        Ok(())
    }

    /// Log in and populate the client session.
    ///
    /// serviceId `dna_personLogin`. On success the uuid comes from
    /// `returnParams.f01` (sent as a number, converted to its decimal
    /// string) and the token from `returnParams.token`; both are stored
    /// in the session manager and returned. On failure the session is
    /// left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let command = Command::new(SERVICE_LOGIN)
            .param("username", username)
            .param("password", password);

        let response = self.call(&command).await?;
        let params = response.into_params()?;

        let uuid = uint_param(&params, "f01")?.to_string();
        let token = string_param(&params, "token")?;

        self.session().set(uuid.clone(), token.clone());
        debug!(uuid = %uuid, "login succeeded");

        Ok(Session { uuid, token })
    }
}

/// Read a numeric returnParams field, accepting the integer, float and
/// numeric-string encodings the server has been seen to use.
fn uint_param(params: &Value, key: &str) -> Result<u64> {
    let value = params
        .get(key)
        .ok_or_else(|| BitbitxError::MalformedResponse(format!("missing returnParams.{key}")))?;

    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().map(|f| f as u64))
            .ok_or_else(|| {
                BitbitxError::MalformedResponse(format!("returnParams.{key} is not unsigned"))
            }),
        Value::String(text) => text.parse().map_err(|_| {
            BitbitxError::MalformedResponse(format!("returnParams.{key} is not numeric"))
        }),
        _ => Err(BitbitxError::MalformedResponse(format!(
            "returnParams.{key} has unexpected type"
        ))),
    }
}

fn string_param(params: &Value, key: &str) -> Result<String> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            BitbitxError::MalformedResponse(format!("missing returnParams.{key}"))
        })
}
