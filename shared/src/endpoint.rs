//! Routes of the billing API.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One remote operation. Client ids are path segments that were already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Clients,
    CreateBill,
    PayBill,
    PendingBills(&'a str),
    PaymentHistory(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::CreateBill | Endpoint::PayBill => Method::Post,
            Endpoint::Clients | Endpoint::PendingBills(_) | Endpoint::PaymentHistory(_) => Method::Get,
        }
    }

    /// Path relative to the API base URL, with a leading slash
    pub fn path(&self) -> String {
        match self {
            Endpoint::Clients => "/clients".to_string(),
            Endpoint::CreateBill => "/bills".to_string(),
            Endpoint::PayBill => "/payments".to_string(),
            Endpoint::PendingBills(client_id) => format!("/clients/{}/pending-bills", client_id),
            Endpoint::PaymentHistory(client_id) => format!("/clients/{}/payment-history", client_id),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path())
    }
}

/// `GET /clients/100/pending-bills`, used as the log label of a request
impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method().as_str(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        let routes = [
            (Endpoint::Clients, "GET /clients"),
            (Endpoint::CreateBill, "POST /bills"),
            (Endpoint::PayBill, "POST /payments"),
            (Endpoint::PendingBills("100"), "GET /clients/100/pending-bills"),
            (Endpoint::PaymentHistory("500"), "GET /clients/500/payment-history"),
        ];

        for (endpoint, expected) in routes {
            assert_eq!(endpoint.to_string(), expected);
        }
    }

    #[test]
    fn test_only_writes_are_posts() {
        assert_eq!(Endpoint::CreateBill.method(), Method::Post);
        assert_eq!(Endpoint::PayBill.method(), Method::Post);
        assert_eq!(Endpoint::Clients.method(), Method::Get);
        assert_eq!(Endpoint::PendingBills("200").method(), Method::Get);
        assert_eq!(Endpoint::PaymentHistory("200").method(), Method::Get);
    }

    #[test]
    fn test_url_joins_base() {
        assert_eq!(
            Endpoint::PendingBills("300").url("http://localhost:3001"),
            "http://localhost:3001/clients/300/pending-bills"
        );
        assert_eq!(Endpoint::CreateBill.url("https://api.example.com/v1"), "https://api.example.com/v1/bills");
    }
}
