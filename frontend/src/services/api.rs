use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::endpoint::{Endpoint, Method};
use shared::response::{decode_listing, decode_response};
use shared::{
    ApiError, ApiOutcome, Client, CreateBillRequest, Listing, PayBillRequest, PaymentRecord,
    PendingBill,
};

use super::logging::Logger;

const COMPONENT: &str = "api";

/// API client for the billing backend.
///
/// Every method issues exactly one request. Transport failures come back as
/// `Err`, anything the server answered comes back as an [`ApiOutcome`].
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// `base_url` must already be validated and free of a trailing slash
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(&self.base_url)
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.url(endpoint);
        match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
    }

    /// Fetch the client directory
    pub async fn list_clients(&self) -> Result<ApiOutcome<Vec<Client>>, ApiError> {
        let endpoint = Endpoint::Clients;
        let request = self
            .request(&endpoint)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let (status, body) = Self::send(request, &endpoint).await?;
        decode_response(status, &body)
    }

    /// Create a bill; the created record is returned as-is
    pub async fn create_bill(&self, bill: &CreateBillRequest) -> Result<ApiOutcome<Value>, ApiError> {
        self.post_json(Endpoint::CreateBill, bill).await
    }

    /// Mark a bill as paid
    pub async fn pay_bill(&self, payment: &PayBillRequest) -> Result<ApiOutcome<Value>, ApiError> {
        self.post_json(Endpoint::PayBill, payment).await
    }

    pub async fn list_pending_bills(
        &self,
        client_id: &str,
    ) -> Result<ApiOutcome<Listing<PendingBill>>, ApiError> {
        self.get_listing(Endpoint::PendingBills(client_id)).await
    }

    /// Payment history ordered by `updatedAt`, oldest first
    pub async fn list_payment_history(
        &self,
        client_id: &str,
    ) -> Result<ApiOutcome<Listing<PaymentRecord>>, ApiError> {
        let outcome = self
            .get_listing::<PaymentRecord>(Endpoint::PaymentHistory(client_id))
            .await?;

        Ok(outcome.map(|listing| match listing {
            Listing::Found(mut records) => {
                PaymentRecord::sort_history(&mut records);
                Listing::Found(records)
            }
            Listing::Empty => Listing::Empty,
        }))
    }

    async fn get_listing<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
    ) -> Result<ApiOutcome<Listing<T>>, ApiError> {
        let request = self
            .request(&endpoint)
            .header("Content-Type", "application/json")
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let (status, body) = Self::send(request, &endpoint).await?;
        decode_listing(status, &body)
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<ApiOutcome<Value>, ApiError> {
        let request = self
            .request(&endpoint)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let (status, body) = Self::send(request, &endpoint).await?;
        decode_response(status, &body)
    }

    async fn send(request: Request, endpoint: &Endpoint<'_>) -> Result<(u16, String), ApiError> {
        let label = endpoint.to_string();
        Logger::debug_with_component(COMPONENT, &format!("{} ...", label));

        let response: Response = request.send().await.map_err(|e| {
            Logger::warn_with_component(COMPONENT, &format!("{} failed: {}", label, e));
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Logger::warn_with_component(COMPONENT, &format!("{} body unreadable: {}", label, e));
            ApiError::Transport(e.to_string())
        })?;

        Logger::debug_with_component(COMPONENT, &format!("{} -> {}", label, status));
        Ok((status, body))
    }
}
