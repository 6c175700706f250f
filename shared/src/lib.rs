use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod billing_period;
pub mod config;
pub mod directory;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod response;
pub mod validation;
pub mod workflow;

pub use billing_period::{BillingPeriod, PeriodPolicy};
pub use error::{ApiError, ConfigError, ValidationError};
pub use response::{ApiOutcome, Listing};

/// A billed customer as listed by the client directory endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
}

/// Kind of utility a bill is issued for.
///
/// The serialized form is the exact label the billing API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Water,
    #[serde(rename = "Natural Gas")]
    NaturalGas,
    Sewer,
    Electricity,
    Internet,
    Rent,
    Phone,
}

impl ServiceType {
    /// All service types in the order they are offered in forms
    pub const ALL: [ServiceType; 7] = [
        ServiceType::Water,
        ServiceType::NaturalGas,
        ServiceType::Sewer,
        ServiceType::Electricity,
        ServiceType::Internet,
        ServiceType::Rent,
        ServiceType::Phone,
    ];

    /// Wire label, also used as the display text
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Water => "Water",
            ServiceType::NaturalGas => "Natural Gas",
            ServiceType::Sewer => "Sewer",
            ServiceType::Electricity => "Electricity",
            ServiceType::Internet => "Internet",
            ServiceType::Rent => "Rent",
            ServiceType::Phone => "Phone",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .iter()
            .copied()
            .find(|service| service.label() == s)
            .ok_or_else(|| ValidationError::UnknownServiceType(s.to_string()))
    }
}

/// Service type as reported on a listed bill.
///
/// Listings come from the server, which may know labels this client does
/// not. Those are kept verbatim so one unfamiliar row does not sink the
/// whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceLabel {
    Known(ServiceType),
    Other(String),
}

impl ServiceLabel {
    pub fn label(&self) -> &str {
        match self {
            ServiceLabel::Known(service) => service.label(),
            ServiceLabel::Other(label) => label,
        }
    }
}

impl From<ServiceType> for ServiceLabel {
    fn from(service: ServiceType) -> Self {
        ServiceLabel::Known(service)
    }
}

impl PartialEq<ServiceType> for ServiceLabel {
    fn eq(&self, other: &ServiceType) -> bool {
        matches!(self, ServiceLabel::Known(service) if service == other)
    }
}

impl fmt::Display for ServiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bill the backend has recorded but not yet marked as paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBill {
    pub client_id: u32,
    pub service_type: ServiceLabel,
    /// Raw `YYYYMM` code as sent by the server
    pub billing_period: String,
    pub amount: f64,
    pub status: String,
}

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A bill that has transitioned to a paid state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub client_id: u32,
    pub service_type: ServiceLabel,
    pub billing_period: String,
    pub amount: f64,
    pub status: String,
    /// Timestamp of the last status change, used only for ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PaymentRecord {
    /// Sort key for payment history. Records without a parseable timestamp sort first.
    ///
    /// RFC 3339 timestamps keep their offset; ISO 8601 timestamps without one
    /// are read as UTC.
    pub fn updated_at_key(&self) -> Option<DateTime<Utc>> {
        let ts = self.updated_at.as_deref()?.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(ts) {
            return Some(parsed.with_timezone(&Utc));
        }

        NAIVE_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(ts, format).ok())
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Order a payment history ascending by `updated_at`, keeping server order for ties
    pub fn sort_history(records: &mut [PaymentRecord]) {
        records.sort_by_key(|record| record.updated_at_key());
    }
}

/// Request body for `POST /bills`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub client_id: u32,
    pub service_type: ServiceType,
    pub billing_period: String,
    pub amount: f64,
}

/// Request body for `POST /payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBillRequest {
    pub client_id: u32,
    pub service_type: ServiceLabel,
    pub billing_period: String,
}

impl From<&PendingBill> for PayBillRequest {
    fn from(bill: &PendingBill) -> Self {
        Self {
            client_id: bill.client_id,
            service_type: bill.service_type.clone(),
            billing_period: bill.billing_period.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_type_wire_labels() {
        assert_eq!(serde_json::to_value(ServiceType::NaturalGas).unwrap(), json!("Natural Gas"));
        assert_eq!(serde_json::to_value(ServiceType::Water).unwrap(), json!("Water"));

        let parsed: ServiceType = serde_json::from_value(json!("Natural Gas")).unwrap();
        assert_eq!(parsed, ServiceType::NaturalGas);

        for service in ServiceType::ALL {
            assert_eq!(service.label().parse::<ServiceType>().unwrap(), service);
            assert_eq!(serde_json::to_value(service).unwrap(), json!(service.label()));
        }
    }

    #[test]
    fn test_service_type_rejects_unknown_label() {
        assert_eq!(
            "Gas".parse::<ServiceType>(),
            Err(ValidationError::UnknownServiceType("Gas".to_string()))
        );
        assert!("water".parse::<ServiceType>().is_err());
    }

    #[test]
    fn test_listed_rows_keep_unfamiliar_service_labels() {
        let bill: PendingBill = serde_json::from_value(json!({
            "clientId": 300,
            "serviceType": "District Heating",
            "billingPeriod": "202502",
            "amount": 55.5,
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(bill.service_type, ServiceLabel::Other("District Heating".to_string()));
        assert_eq!(bill.service_type.label(), "District Heating");

        let request = PayBillRequest::from(&bill);
        assert_eq!(serde_json::to_value(&request).unwrap()["serviceType"], json!("District Heating"));

        let known: PendingBill = serde_json::from_value(json!({
            "clientId": 300,
            "serviceType": "Natural Gas",
            "billingPeriod": "202502",
            "amount": 20,
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(known.service_type, ServiceType::NaturalGas);
    }

    #[test]
    fn test_create_bill_request_serializes_camel_case() {
        let request = CreateBillRequest {
            client_id: 100,
            service_type: ServiceType::Electricity,
            billing_period: "202503".to_string(),
            amount: 42.5,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "clientId": 100,
                "serviceType": "Electricity",
                "billingPeriod": "202503",
                "amount": 42.5
            })
        );
    }

    #[test]
    fn test_pay_request_from_pending_bill() {
        let bill = PendingBill {
            client_id: 200,
            service_type: ServiceType::Internet.into(),
            billing_period: "202507".to_string(),
            amount: 30.0,
            status: "pending".to_string(),
        };

        let request = PayBillRequest::from(&bill);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"clientId": 200, "serviceType": "Internet", "billingPeriod": "202507"})
        );
    }

    #[test]
    fn test_payment_record_tolerates_missing_updated_at() {
        let record: PaymentRecord = serde_json::from_value(json!({
            "clientId": 100,
            "serviceType": "Rent",
            "billingPeriod": "202501",
            "amount": 800,
            "status": "paid"
        }))
        .unwrap();

        assert_eq!(record.updated_at, None);
        assert_eq!(record.amount, 800.0);
    }

    #[test]
    fn test_sort_history_ascending_by_updated_at() {
        let record = |period: &str, updated_at: Option<&str>| PaymentRecord {
            client_id: 100,
            service_type: ServiceType::Water.into(),
            billing_period: period.to_string(),
            amount: 10.0,
            status: "paid".to_string(),
            updated_at: updated_at.map(str::to_string),
        };

        let mut history = vec![
            record("202503", Some("2025-04-02T10:00:00Z")),
            record("202501", Some("2025-02-01T09:30:00Z")),
            record("202502", None),
            record("202504", Some("2025-04-02T09:00:00-03:00")),
        ];

        PaymentRecord::sort_history(&mut history);

        let periods: Vec<&str> = history.iter().map(|r| r.billing_period.as_str()).collect();
        assert_eq!(periods, vec!["202502", "202501", "202503", "202504"]);

        let mut offsetless = vec![
            record("202503", Some("2025-04-02T10:00:00")),
            record("202501", Some("2025-02-01 09:30:00.123456")),
            record("202502", Some("2025-03-01T09:30:00.5")),
        ];
        PaymentRecord::sort_history(&mut offsetless);
        let periods: Vec<&str> = offsetless.iter().map(|r| r.billing_period.as_str()).collect();
        assert_eq!(periods, vec!["202501", "202502", "202503"]);

        let mut mixed = vec![
            record("202502", Some("2025-03-01T08:00:00Z")),
            record("202503", Some("2025-03-01T09:00:00")),
            record("202501", Some("2025-03-01T10:00:00+03:00")),
        ];
        PaymentRecord::sort_history(&mut mixed);
        let periods: Vec<&str> = mixed.iter().map(|r| r.billing_period.as_str()).collect();
        assert_eq!(periods, vec!["202501", "202502", "202503"]);
    }
}
