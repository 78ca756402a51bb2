//! HTTP API Client
//!
//! Typed wrappers around the apostas REST endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::body::ResponseBody;
use super::error::{ApiError, ApiResult};
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::model::{
    Aposta, ApostaId, ApostaPayload, LoginRequest, LoginResponse, RegisterRequest, Resumo, User,
};

/// Client for the apostas API over any [`Transport`]
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        let response: LoginResponse = self
            .call(HttpRequest::new(Method::Post, "/api/login").json(to_json(request)?))
            .await?;
        Ok(response.user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.call_unit(HttpRequest::new(Method::Post, "/api/register").json(to_json(request)?))
            .await
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.call_unit(HttpRequest::new(Method::Post, "/api/logout"))
            .await
    }

    pub async fn profile(&self) -> ApiResult<User> {
        self.call(HttpRequest::new(Method::Get, "/api/profile"))
            .await
    }

    pub async fn list_apostas(&self) -> ApiResult<Vec<Aposta>> {
        self.call(HttpRequest::new(Method::Get, "/api/apostas"))
            .await
    }

    pub async fn resumo(&self) -> ApiResult<Resumo> {
        self.call(HttpRequest::new(Method::Get, "/api/apostas/resumo"))
            .await
    }

    pub async fn create_aposta(&self, payload: &ApostaPayload) -> ApiResult<Aposta> {
        self.call(HttpRequest::new(Method::Post, "/api/apostas").json(to_json(payload)?))
            .await
    }

    pub async fn update_aposta(&self, id: ApostaId, payload: &ApostaPayload) -> ApiResult<Aposta> {
        self.call(
            HttpRequest::new(Method::Put, format!("/api/apostas/{}", id)).json(to_json(payload)?),
        )
        .await
    }

    pub async fn delete_aposta(&self, id: ApostaId) -> ApiResult<()> {
        self.call_unit(HttpRequest::new(Method::Delete, format!("/api/apostas/{}", id)))
            .await
    }

    async fn exchange(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(%method, %path, error = %e, "request failed to connect");
            ApiError::from(e)
        })?;

        if !response.is_success() {
            tracing::debug!(%method, %path, status = response.status, "request rejected");
            return Err(ApiError::Status {
                status: response.status,
                body: ResponseBody::from_response(&response),
            });
        }

        Ok(response)
    }

    async fn call<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        let response = self.exchange(request).await?;
        ResponseBody::from_response(&response)
            .decode()
            .map_err(ApiError::Decode)
    }

    async fn call_unit(&self, request: HttpRequest) -> ApiResult<()> {
        self.exchange(request).await.map(|_| ())
    }
}

fn to_json<S: Serialize>(value: &S) -> ApiResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
