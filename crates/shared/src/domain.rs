use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ApiException, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a course is conducted. `Online` is remote, `Offline` is in-person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Online,
    Offline,
}

impl DeliveryMode {
    pub const ALL: [DeliveryMode; 2] = [DeliveryMode::Online, DeliveryMode::Offline];

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryMode::Online => "online",
            DeliveryMode::Offline => "offline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliveryMode::Online => "Online Classes",
            DeliveryMode::Offline => "In-Person Classes",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMode {
    type Err = ApiException;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(DeliveryMode::Online),
            "offline" => Ok(DeliveryMode::Offline),
            other => Err(ApiException::new(
                ErrorCode::Validation,
                format!("unknown delivery mode '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Upi,
    Netbanking,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::Netbanking,
        PaymentMethod::Wallet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI Payment",
            PaymentMethod::Netbanking => "Net Banking",
            PaymentMethod::Wallet => "Digital Wallet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub institute: String,
    pub category: String,
    pub mode: DeliveryMode,
    pub instructor: String,
    /// Whole currency units.
    pub price: u32,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_mode_round_trips_through_its_wire_name() {
        for mode in DeliveryMode::ALL {
            assert_eq!(mode.as_str().parse::<DeliveryMode>().expect("mode"), mode);
            assert_eq!(
                serde_json::to_string(&mode).expect("json"),
                format!("\"{}\"", mode.as_str())
            );
        }
    }

    #[test]
    fn unknown_delivery_mode_is_a_validation_error() {
        let err = "hybrid".parse::<DeliveryMode>().expect_err("should fail");
        assert!(matches!(err.code, ErrorCode::Validation));
    }

    #[test]
    fn course_without_location_omits_the_field() {
        let course = Course {
            id: CourseId::new("9"),
            title: "t".into(),
            description: "d".into(),
            institute: "i".into(),
            category: "c".into(),
            mode: DeliveryMode::Online,
            instructor: "n".into(),
            price: 10,
            duration: "1 week".into(),
            location: None,
        };
        let value = serde_json::to_value(&course).expect("json");
        assert!(value.get("location").is_none());
        assert_eq!(value["id"], "9");
    }
}
