use reqwasm::http::Request;
use web_sys::AbortSignal;

use crate::error::FetchError;
use crate::models::user::{User, UsersPage};

/// Fetches one page of users. Aborting `signal` cancels the request.
pub async fn fetch_users(url: &str, signal: &AbortSignal) -> Result<Vec<User>, FetchError> {
    let response = Request::get(url)
        .abort_signal(Some(signal))
        .send()
        .await
        .map_err(|err| transport_error(url, signal, err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let page: UsersPage = response.json().await.map_err(|err| {
        if signal.aborted() {
            FetchError::Aborted {
                url: url.to_string(),
            }
        } else {
            FetchError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    })?;

    Ok(page.data)
}

fn transport_error(url: &str, signal: &AbortSignal, message: String) -> FetchError {
    if signal.aborted() {
        FetchError::Aborted {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message,
        }
    }
}
