//! Currency and Exchange Rate Entities

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{flag, is_unassigned, number, Deactivatable, Entity, Listable};

/// A currency the company trades in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Currency {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    /// ISO-style code, e.g. "USD"
    pub currency_abbreviation: String,
    #[serde(default)]
    pub currency_symbol: String,
    pub currency_name: String,
    #[serde(default)]
    pub hundredths_name: String,
    #[serde(default)]
    pub country: String,
    #[serde(with = "flag", default)]
    pub auto_exchange_rate_update: bool,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for Currency {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for Currency {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.currency_abbreviation.as_str()),
            Cow::Borrowed(self.currency_symbol.as_str()),
            Cow::Borrowed(self.currency_name.as_str()),
            Cow::Borrowed(self.hundredths_name.as_str()),
            Cow::Borrowed(self.country.as_str()),
        ]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

impl Deactivatable for Currency {
    fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}

/// Buy/sell rate of a currency against the home currency on a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    pub currency_abbreviation: String,
    #[serde(with = "number")]
    pub rate_buy: f64,
    #[serde(with = "number")]
    pub rate_sell: f64,
    pub date: NaiveDate,
}

impl Entity for ExchangeRate {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for ExchangeRate {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.currency_abbreviation.as_str()),
            Cow::Owned(self.date.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_wire_format() {
        let raw = r#"{
            "id": 3,
            "currency_abbreviation": "EUR",
            "currency_symbol": "€",
            "currency_name": "Euro",
            "hundredths_name": "Cents",
            "country": "Europe",
            "auto_exchange_rate_update": 1,
            "inactive": 0
        }"#;
        let currency: Currency = serde_json::from_str(raw).unwrap();
        assert_eq!(currency.id(), 3);
        assert!(currency.auto_exchange_rate_update);
        assert!(!currency.is_inactive());
    }

    #[test]
    fn test_new_currency_omits_id() {
        let currency = Currency {
            currency_abbreviation: "KES".into(),
            currency_name: "Kenyan Shilling".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&currency).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["currency_abbreviation"], "KES");
    }

    #[test]
    fn test_exchange_rate_date() {
        let raw = r#"{"id": 1, "currency_abbreviation": "EUR", "rate_buy": "1.1", "rate_sell": 1.2, "date": "2024-03-01"}"#;
        let rate: ExchangeRate = serde_json::from_str(raw).unwrap();
        assert_eq!(rate.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(rate.rate_buy, 1.1);
    }
}
