//! Advisory form validation. The server stays authoritative and may still reject
//! anything accepted here; these checks only stop obviously bad input before a
//! request is sent.

use crate::billing_period::PeriodPolicy;
use crate::error::ValidationError;
use crate::{CreateBillRequest, PayBillRequest, ServiceType};

/// Which client ids a form accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientIdRule {
    /// Any positive integer, used when the id comes from the client directory
    Positive,
    /// Manual entry restricted to the fixed client roster
    Roster { min: u32, max: u32, step: u32 },
}

impl ClientIdRule {
    pub const ROSTER: ClientIdRule = ClientIdRule::Roster {
        min: 100,
        max: 500,
        step: 100,
    };

    pub fn check(&self, raw: &str) -> Result<u32, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingClient);
        }

        let id = raw
            .parse::<u32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ValidationError::InvalidClientId(raw.to_string()))?;

        match *self {
            ClientIdRule::Positive => Ok(id),
            ClientIdRule::Roster { min, max, step } => {
                if id < min || id > max || (id - min) % step != 0 {
                    Err(ValidationError::ClientIdOutOfRoster { min, max, step })
                } else {
                    Ok(id)
                }
            }
        }
    }

    /// First id offered by a manual-entry field
    pub fn default_value(&self) -> String {
        match self {
            ClientIdRule::Positive => String::new(),
            ClientIdRule::Roster { min, .. } => min.to_string(),
        }
    }
}

/// Raw field values of the create-bill form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBillForm {
    pub client_id: String,
    pub service_type: String,
    pub billing_period: String,
    pub amount: String,
}

/// Raw field values of the pay-bill form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayBillForm {
    pub client_id: String,
    pub service_type: String,
    pub billing_period: String,
}

fn check_service_type(raw: &str) -> Result<ServiceType, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingServiceType);
    }
    raw.trim().parse()
}

fn check_amount(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingAmount);
    }

    let amount = raw
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ValidationError::InvalidAmount(raw.to_string()))?;

    if amount < 0.0 {
        return Err(ValidationError::NegativeAmount);
    }
    // "-0" parses to negative zero
    Ok(if amount == 0.0 { 0.0 } else { amount })
}

pub fn validate_create_bill(
    form: &CreateBillForm,
    client_rule: ClientIdRule,
    period_policy: PeriodPolicy,
) -> Result<CreateBillRequest, ValidationError> {
    let client_id = client_rule.check(&form.client_id)?;
    let service_type = check_service_type(&form.service_type)?;
    let billing_period = period_policy.check(&form.billing_period)?;
    let amount = check_amount(&form.amount)?;

    Ok(CreateBillRequest {
        client_id,
        service_type,
        billing_period: billing_period.to_string(),
        amount,
    })
}

pub fn validate_pay_bill(
    form: &PayBillForm,
    client_rule: ClientIdRule,
    period_policy: PeriodPolicy,
) -> Result<PayBillRequest, ValidationError> {
    let client_id = client_rule.check(&form.client_id)?;
    let service_type = check_service_type(&form.service_type)?;
    let billing_period = period_policy.check(&form.billing_period)?;

    Ok(PayBillRequest {
        client_id,
        service_type: service_type.into(),
        billing_period: billing_period.to_string(),
    })
}

/// Validate the id typed into a listing form and return it as a path segment
pub fn validate_client_lookup(raw: &str, client_rule: ClientIdRule) -> Result<String, ValidationError> {
    client_rule.check(raw).map(|id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_form() -> CreateBillForm {
        CreateBillForm {
            client_id: "100".to_string(),
            service_type: "Natural Gas".to_string(),
            billing_period: "202503".to_string(),
            amount: "57.3".to_string(),
        }
    }

    #[test]
    fn test_valid_create_bill_form() {
        let request = validate_create_bill(&create_form(), ClientIdRule::Positive, PeriodPolicy::FixedYear(2025)).unwrap();

        assert_eq!(
            request,
            CreateBillRequest {
                client_id: 100,
                service_type: ServiceType::NaturalGas,
                billing_period: "202503".to_string(),
                amount: 57.3,
            }
        );
    }

    #[test]
    fn test_create_bill_rejects_bad_periods_before_any_request() {
        for period in ["", "2025", "202500", "202513", "2025AB", "202403"] {
            let form = CreateBillForm {
                billing_period: period.to_string(),
                ..create_form()
            };
            assert_eq!(
                validate_create_bill(&form, ClientIdRule::Positive, PeriodPolicy::FixedYear(2025)),
                Err(ValidationError::BillingPeriodWrongYear(2025)),
                "{period:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_create_bill_amount_rules() {
        let with_amount = |amount: &str| CreateBillForm {
            amount: amount.to_string(),
            ..create_form()
        };
        let validate = |form: &CreateBillForm| {
            validate_create_bill(form, ClientIdRule::Positive, PeriodPolicy::AnyYear)
        };

        assert_eq!(validate(&with_amount("0")).unwrap().amount, 0.0);
        assert_eq!(validate(&with_amount("")), Err(ValidationError::MissingAmount));
        assert_eq!(validate(&with_amount("-1")), Err(ValidationError::NegativeAmount));
        assert_eq!(
            validate(&with_amount("ten")),
            Err(ValidationError::InvalidAmount("ten".to_string()))
        );
        assert_eq!(
            validate(&with_amount("inf")),
            Err(ValidationError::InvalidAmount("inf".to_string()))
        );
    }

    #[test]
    fn test_negative_zero_amount_is_sent_as_zero() {
        let form = CreateBillForm {
            amount: "-0".to_string(),
            ..create_form()
        };
        let request = validate_create_bill(&form, ClientIdRule::Positive, PeriodPolicy::AnyYear).unwrap();

        assert!(request.amount.is_sign_positive());
        assert!(serde_json::to_string(&request).unwrap().contains(r#""amount":0.0"#));
    }

    #[test]
    fn test_create_bill_requires_client_and_service() {
        let form = CreateBillForm {
            client_id: String::new(),
            ..create_form()
        };
        assert_eq!(
            validate_create_bill(&form, ClientIdRule::Positive, PeriodPolicy::AnyYear),
            Err(ValidationError::MissingClient)
        );

        let form = CreateBillForm {
            service_type: String::new(),
            ..create_form()
        };
        assert_eq!(
            validate_create_bill(&form, ClientIdRule::Positive, PeriodPolicy::AnyYear),
            Err(ValidationError::MissingServiceType)
        );
    }

    #[test]
    fn test_roster_rule() {
        let rule = ClientIdRule::ROSTER;

        assert_eq!(rule.check("100"), Ok(100));
        assert_eq!(rule.check(" 500 "), Ok(500));
        assert_eq!(rule.default_value(), "100");

        let out_of_roster = Err(ValidationError::ClientIdOutOfRoster { min: 100, max: 500, step: 100 });
        assert_eq!(rule.check("150"), out_of_roster);
        assert_eq!(rule.check("600"), out_of_roster);
        assert_eq!(rule.check("0"), Err(ValidationError::InvalidClientId("0".to_string())));
        assert_eq!(rule.check("-100"), Err(ValidationError::InvalidClientId("-100".to_string())));
    }

    #[test]
    fn test_pay_bill_accepts_any_year() {
        let form = PayBillForm {
            client_id: "300".to_string(),
            service_type: "Phone".to_string(),
            billing_period: "202311".to_string(),
        };

        let request = validate_pay_bill(&form, ClientIdRule::ROSTER, PeriodPolicy::AnyYear).unwrap();
        assert_eq!(request.client_id, 300);
        assert_eq!(request.service_type, ServiceType::Phone);
        assert_eq!(request.billing_period, "202311");
    }

    #[test]
    fn test_client_lookup() {
        assert_eq!(validate_client_lookup("200", ClientIdRule::ROSTER), Ok("200".to_string()));
        assert_eq!(validate_client_lookup("", ClientIdRule::ROSTER), Err(ValidationError::MissingClient));
        assert!(validate_client_lookup("abc", ClientIdRule::ROSTER).is_err());
    }
}
