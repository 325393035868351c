use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    NotFound,
    UnexpectedStatusCode(StatusCode),
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

impl APIError {
    fn new(variant: APIErrorVariant, message: String) -> Self {
        Self { variant, message }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
        }
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        self.client.request(method, &url)
    }

    async fn check_status_code(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> Result<Response, APIError> {
        let status = res.status();
        if status == expected_status_code {
            return Ok(res);
        }

        let variant = match status {
            StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            _ => APIErrorVariant::UnexpectedStatusCode(status),
        };
        let message = res.text().await.unwrap_or_default();
        Err(APIError::new(variant, message))
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Result<Response, reqwest::Error>,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = res.map_err(|e| APIError::new(APIErrorVariant::Network, e.to_string()))?;
        let res = self.check_status_code(res, expected_status_code).await?;
        res.json::<T>()
            .await
            .map_err(|e| APIError::new(APIErrorVariant::MalformedResponse, e.to_string()))
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::GET, path).send().await;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn get_with_query<T: for<'de> Deserialize<'de>, Q: Serialize>(
        &self,
        query: &Q,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::GET, path).query(query).send().await;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::POST, path).json(&body).send().await;
        self.handle_api_response(res, expected_status_code).await
    }
}
