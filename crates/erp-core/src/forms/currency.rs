use crate::domain::{Currency, DomainError, DomainResult, ExchangeRate};
use crate::view::form::{
    parse_date, require, require_date, require_max_len, require_positive, EntityForm, FormErrors, SubmitMode,
};

use super::{number, text};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyForm {
    pub currency_abbreviation: String,
    pub currency_symbol: String,
    pub currency_name: String,
    pub hundredths_name: String,
    pub country: String,
    pub auto_exchange_rate_update: bool,
    pub inactive: bool,
}

impl EntityForm for CurrencyForm {
    type Entity = Currency;

    fn from_entity(currency: &Currency) -> Self {
        Self {
            currency_abbreviation: currency.currency_abbreviation.clone(),
            currency_symbol: currency.currency_symbol.clone(),
            currency_name: currency.currency_name.clone(),
            hundredths_name: currency.hundredths_name.clone(),
            country: currency.country.clone(),
            auto_exchange_rate_update: currency.auto_exchange_rate_update,
            inactive: currency.inactive,
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if require(&mut errors, "currency_abbreviation", &self.currency_abbreviation, "Abbreviation is required") {
            require_max_len(&mut errors, "currency_abbreviation", &self.currency_abbreviation, 3);
        }
        require(&mut errors, "currency_symbol", &self.currency_symbol, "Symbol is required");
        require(&mut errors, "currency_name", &self.currency_name, "Name is required");
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<Currency> {
        Ok(Currency {
            id: mode.editing().copied().unwrap_or(0),
            currency_abbreviation: text(&self.currency_abbreviation).to_uppercase(),
            currency_symbol: text(&self.currency_symbol),
            currency_name: text(&self.currency_name),
            hundredths_name: text(&self.hundredths_name),
            country: text(&self.country),
            auto_exchange_rate_update: self.auto_exchange_rate_update,
            inactive: self.inactive,
        })
    }

    fn conflicts(&self, existing: &[Currency], editing: Option<&u32>) -> FormErrors {
        let mut errors = FormErrors::new();
        let abbreviation = text(&self.currency_abbreviation);
        let taken = existing.iter().any(|c| {
            Some(&c.id) != editing && c.currency_abbreviation.eq_ignore_ascii_case(&abbreviation)
        });
        if taken {
            errors.insert("currency_abbreviation", "This currency abbreviation is already in use");
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRateForm {
    pub currency_abbreviation: String,
    pub rate_buy: String,
    pub rate_sell: String,
    pub date: String,
}

impl EntityForm for ExchangeRateForm {
    type Entity = ExchangeRate;

    fn from_entity(rate: &ExchangeRate) -> Self {
        Self {
            currency_abbreviation: rate.currency_abbreviation.clone(),
            rate_buy: rate.rate_buy.to_string(),
            rate_sell: rate.rate_sell.to_string(),
            date: rate.date.format("%Y-%m-%d").to_string(),
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "currency_abbreviation", &self.currency_abbreviation, "Select a currency");
        require_positive(&mut errors, "rate_buy", &self.rate_buy);
        require_positive(&mut errors, "rate_sell", &self.rate_sell);
        require_date(&mut errors, "date", &self.date);
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<ExchangeRate> {
        let date = parse_date(&self.date).ok_or_else(|| DomainError::InvalidInput("Invalid date".to_string()))?;
        Ok(ExchangeRate {
            id: mode.editing().copied().unwrap_or(0),
            currency_abbreviation: text(&self.currency_abbreviation),
            rate_buy: number(&self.rate_buy),
            rate_sell: number(&self.rate_sell),
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::form::{submit, SubmitError};
    use crate::view::testing::MemoryRepository;

    fn euro() -> CurrencyForm {
        CurrencyForm {
            currency_abbreviation: "eur".into(),
            currency_symbol: "€".into(),
            currency_name: "Euro".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_currency_validation() {
        let errors = CurrencyForm::default().validate();
        assert_eq!(errors.len(), 3);
        let long = CurrencyForm { currency_abbreviation: "EURO".into(), ..euro() };
        assert_eq!(long.validate().get("currency_abbreviation"), Some("Must be at most 3 characters"));
        assert!(euro().validate().is_empty());
    }

    #[test]
    fn test_currency_round_trips_through_form() {
        let form = euro();
        let entity = form.to_entity(&SubmitMode::Update(4)).unwrap();
        assert_eq!(entity.id, 4);
        assert_eq!(entity.currency_abbreviation, "EUR");
        assert_eq!(CurrencyForm::from_entity(&entity).currency_name, "Euro");
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_backend() {
        let repo = MemoryRepository::<Currency>::new(vec![]);
        let form = CurrencyForm { currency_name: String::new(), ..euro() };
        let result = submit(&repo, &form, &[], SubmitMode::Create).await;
        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert_eq!(repo.calls().created, 0);
    }

    #[tokio::test]
    async fn test_valid_form_creates_exactly_once() {
        let repo = MemoryRepository::<Currency>::new(vec![]);
        let saved = submit(&repo, &euro(), &[], SubmitMode::Create).await.unwrap();
        assert_eq!(saved.currency_abbreviation, "EUR");
        assert_eq!(repo.calls().created, 1);
        assert_eq!(repo.calls().updated, 0);
    }

    #[tokio::test]
    async fn test_duplicate_abbreviation_blocked_except_self() {
        let existing = vec![Currency { id: 1, currency_abbreviation: "EUR".into(), ..Default::default() }];
        let repo = MemoryRepository::new(existing.clone());

        let created = submit(&repo, &euro(), &existing, SubmitMode::Create).await;
        assert!(matches!(created, Err(SubmitError::Invalid(_))));

        let updated = submit(&repo, &euro(), &existing, SubmitMode::Update(1)).await;
        assert!(updated.is_ok());
        assert_eq!(repo.calls().updated, 1);
        assert_eq!(repo.calls().created, 0);
    }

    #[test]
    fn test_exchange_rate_form() {
        let form = ExchangeRateForm {
            currency_abbreviation: "EUR".into(),
            rate_buy: "1.08".into(),
            rate_sell: "0".into(),
            date: "2024-13-01".into(),
        };
        let errors = form.validate();
        assert!(errors.get("rate_sell").is_some());
        assert!(errors.get("date").is_some());
        assert!(errors.get("rate_buy").is_none());

        let form = ExchangeRateForm { rate_sell: "1.1".into(), date: "2024-03-01".into(), ..form };
        assert!(form.validate().is_empty());
        let rate = form.to_entity(&SubmitMode::Create).unwrap();
        assert_eq!(rate.rate_sell, 1.1);
        assert_eq!(ExchangeRateForm::from_entity(&rate).date, "2024-03-01");
    }
}
