//! HTTP bindings for the event service, or canned data under `mock`.

use async_trait::async_trait;
use event_board_shared::{DeleteResponse, EventApi, EventApiError, EventsResponse};
#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;

#[cfg(not(feature = "mock"))]
use crate::config;
#[cfg(feature = "mock")]
use crate::models;

/// Event service client backed by `fetch`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpEventApi;

#[cfg(not(feature = "mock"))]
fn network_error(err: gloo_net::Error) -> EventApiError {
    EventApiError::Network(format!("{:?}", err))
}

/// URL and `Authorization` value for deleting event `id`.
///
/// Without a stored token the header is left off entirely.
#[cfg(not(feature = "mock"))]
fn delete_request_parts(id: &str, token: Option<&str>) -> (String, Option<String>) {
    let url = config::api_url(&format!("delete/{}", urlencoding::encode(id)));
    let authorization = token.map(|token| format!("Bearer {token}"));
    (url, authorization)
}

#[async_trait(?Send)]
impl EventApi for HttpEventApi {
    /// 获取即将开始和已过期的活动
    async fn fetch_events(&self) -> Result<EventsResponse, EventApiError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::get_mock_events());
        }

        #[cfg(not(feature = "mock"))]
        {
            let url = config::api_url("getevents");

            let response = Request::get(&url)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(network_error)?;

            if !response.ok() {
                let body = response.text().await.unwrap_or_default();
                return Err(EventApiError::Status {
                    status: response.status(),
                    body,
                });
            }

            response
                .json::<EventsResponse>()
                .await
                .map_err(|e| EventApiError::Decode(format!("{:?}", e)))
        }
    }

    async fn delete_event(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<DeleteResponse, EventApiError> {
        #[cfg(feature = "mock")]
        {
            let _ = token;
            return Ok(DeleteResponse {
                status: 200,
                body: serde_json::json!({ "deleted": id }).to_string(),
            });
        }

        #[cfg(not(feature = "mock"))]
        {
            let (url, authorization) = delete_request_parts(id, token);

            let mut request = Request::delete(&url).header("Content-Type", "application/json");
            if let Some(authorization) = authorization {
                request = request.header("Authorization", &authorization);
            }

            let response = request.send().await.map_err(network_error)?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            Ok(DeleteResponse {
                status,
                body,
            })
        }
    }
}
