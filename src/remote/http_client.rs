use super::*;

impl RemoteClient {
    /// Turns a response into its JSON payload, mapping HTTP failures and
    /// `{"success": false}` bodies to [`GatewayError::Status`].
    pub(super) async fn read_json(
        &self,
        resp: reqwest::Response,
        label: &'static str,
    ) -> Result<Value, GatewayError> {
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| GatewayError::Transport { label, source })?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(v) => v,
                Err(source) if status.is_success() => {
                    return Err(GatewayError::Decode { label, source });
                }
                Err(_) => Value::String(String::from_utf8_lossy(&bytes).trim().to_string()),
            }
        };

        if !status.is_success() {
            return Err(GatewayError::Status {
                label,
                status: status.as_u16(),
                message: failure_message(status, &body),
            });
        }
        if body.get("success") == Some(&Value::Bool(false)) {
            return Err(GatewayError::Status {
                label,
                status: status.as_u16(),
                message: failure_message(status, &body),
            });
        }
        Ok(body)
    }
}

/// Best-effort human-readable reason from an error payload.
pub(super) fn failure_message(status: reqwest::StatusCode, body: &Value) -> String {
    let from_body = match body {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => ["message", "error", "error_type"]
            .iter()
            .filter_map(|k| map.get(*k).and_then(Value::as_str))
            .find(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    };
    if let Some(msg) = from_body {
        return msg;
    }

    match status {
        reqwest::StatusCode::UNAUTHORIZED => "unauthorized (check the account secret)".to_string(),
        reqwest::StatusCode::FORBIDDEN => "forbidden".to_string(),
        reqwest::StatusCode::NOT_FOUND => {
            "not found (check the api url and the requested id)".to_string()
        }
        s => s
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("http {}", s.as_u16())),
    }
}
