//! 浏览器 HTTP 客户端
//!
//! 基于 `gloo-net` 的 fetch 封装，实现核心库的 `HttpClient`。
//! 只有请求无法完成时才返回错误，非 2xx 状态照常作为响应交给上层处理。

use gloo_net::http::{Method, RequestBuilder};
use mappoints::request::reason_phrase;
use mappoints::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};

/// fetch 阶段的错误
#[derive(Debug)]
pub enum HttpError {
    /// 请求构建失败
    RequestBuildFailed(String),
    /// 网络请求失败
    NetworkError(String),
    /// 响应体读取失败
    ResponseReadFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "request could not be built: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "{}", msg),
            HttpError::ResponseReadFailed(msg) => write!(f, "response could not be read: {}", msg),
        }
    }
}

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        TransportError::new(err.to_string())
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    async fn fetch(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = RequestBuilder::new(&req.url).method(method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let res = match req.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| HttpError::NetworkError(e.to_string()))?;

        let status = res.status();
        // HTTP/2 下 statusText 为空
        let status_text = match res.status_text() {
            text if text.is_empty() => reason_phrase(status).to_string(),
            text => text,
        };
        let body = res
            .text()
            .await
            .map_err(|e| HttpError::ResponseReadFailed(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let (verb, url) = (req.method, req.url.clone());
        self.fetch(req).await.map_err(|e| {
            log::warn!("[Http] {} {} failed: {}", verb.as_str(), url, e);
            TransportError::from(e)
        })
    }
}
