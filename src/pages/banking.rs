//! Banking Pages
//!
//! Currencies and exchange rates.

use erp_core::domain::{Currency, ExchangeRate};
use erp_core::forms::{CurrencyForm, ExchangeRateForm};
use erp_core::view::crossref::{label_or_code, resolve};
use erp_core::view::Topic;
use leptos::prelude::*;

use super::{date, page_header, yes_no};
use crate::components::{
    checkbox_field, date_field, edit_delete_column, form_shell, inactive_column, remote_table, select_field,
    text_field, use_collection, use_list_state, Column, FormController,
};
use crate::context::Page;

#[component]
pub fn CurrenciesPage() -> impl IntoView {
    let rows = use_collection::<Currency>(Topic::Currencies, "currencies");
    let state = use_list_state();

    let columns = vec![
        Column::text("Abbreviation", |c: &Currency| c.currency_abbreviation.clone()),
        Column::text("Symbol", |c: &Currency| c.currency_symbol.clone()),
        Column::text("Currency Name", |c: &Currency| c.currency_name.clone()),
        Column::text("Hundredths Name", |c: &Currency| c.hundredths_name.clone()),
        Column::text("Country", |c: &Currency| c.country.clone()),
        Column::text("Auto Exchange Rate", |c: &Currency| yes_no(c.auto_exchange_rate_update)),
        inactive_column(rows, Topic::Currencies, "currencies"),
        edit_delete_column(rows, Topic::Currencies, "currencies", |c| Page::CurrencyEdit(Some(c.id))),
    ];

    view! {
        <section class="list-page">
            {page_header("Currencies", Some(("Add Currency", Page::CurrencyEdit(None))))}
            {remote_table(rows, state, columns, true)}
        </section>
    }
}

#[component]
pub fn CurrencyFormPage(id: Option<u32>) -> impl IntoView {
    let ctl = FormController::new(CurrencyForm::default(), id, Topic::Currencies, "Currency", Page::Currencies);

    form_shell(
        ctl,
        "Currency",
        view! {
            {text_field(ctl, "Abbreviation", "currency_abbreviation", |f| f.currency_abbreviation.clone(), |f, v| {
                f.currency_abbreviation = v
            })}
            {text_field(ctl, "Symbol", "currency_symbol", |f| f.currency_symbol.clone(), |f, v| f.currency_symbol = v)}
            {text_field(ctl, "Currency Name", "currency_name", |f| f.currency_name.clone(), |f, v| f.currency_name = v)}
            {text_field(ctl, "Hundredths Name", "hundredths_name", |f| f.hundredths_name.clone(), |f, v| {
                f.hundredths_name = v
            })}
            {text_field(ctl, "Country", "country", |f| f.country.clone(), |f, v| f.country = v)}
            {checkbox_field(
                ctl,
                "Include in automatic exchange rate update",
                "auto_exchange_rate_update",
                |f| f.auto_exchange_rate_update,
                |f, v| f.auto_exchange_rate_update = v,
            )}
            {checkbox_field(ctl, "Inactive", "inactive", |f| f.inactive, |f, v| f.inactive = v)}
        },
    )
}

#[component]
pub fn ExchangeRatesPage() -> impl IntoView {
    let rows = use_collection::<ExchangeRate>(Topic::ExchangeRates, "exchange rates");
    let currencies = use_collection::<Currency>(Topic::Currencies, "currencies");
    let state = use_list_state();

    let columns = vec![
        Column::text("Currency", move |r: &ExchangeRate| {
            currencies.with(|cs| {
                let name = resolve(
                    cs,
                    r.currency_abbreviation.as_str(),
                    |c| c.currency_abbreviation.as_str(),
                    |c| c.currency_name.as_str(),
                );
                format!("{} ({})", label_or_code(name, &r.currency_abbreviation), r.currency_abbreviation)
            })
        }),
        Column::text("Date", |r: &ExchangeRate| date(r.date)),
        Column::text("Buy Rate", |r: &ExchangeRate| r.rate_buy.to_string()),
        Column::text("Sell Rate", |r: &ExchangeRate| r.rate_sell.to_string()),
        edit_delete_column(rows, Topic::ExchangeRates, "exchange rates", |r| Page::ExchangeRateEdit(Some(r.id))),
    ];

    view! {
        <section class="list-page">
            {page_header("Exchange Rates", Some(("Add Exchange Rate", Page::ExchangeRateEdit(None))))}
            {remote_table(rows, state, columns, false)}
        </section>
    }
}

#[component]
pub fn ExchangeRateFormPage(id: Option<u32>) -> impl IntoView {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let initial = ExchangeRateForm { date: today, ..Default::default() };
    let ctl = FormController::new(initial, id, Topic::ExchangeRates, "Exchange rate", Page::ExchangeRates);

    let currencies = use_collection::<Currency>(Topic::Currencies, "currencies");
    let options = Signal::derive(move || {
        currencies.with(|cs| {
            cs.iter()
                .filter(|c| !c.inactive)
                .map(|c| (c.currency_abbreviation.clone(), format!("{} - {}", c.currency_abbreviation, c.currency_name)))
                .collect()
        })
    });

    form_shell(
        ctl,
        "Exchange Rate",
        view! {
            {select_field(ctl, "Currency", "currency_abbreviation", options, |f| f.currency_abbreviation.clone(), |f, v| {
                f.currency_abbreviation = v
            })}
            {text_field(ctl, "Buy Rate", "rate_buy", |f| f.rate_buy.clone(), |f, v| f.rate_buy = v)}
            {text_field(ctl, "Sell Rate", "rate_sell", |f| f.rate_sell.clone(), |f, v| f.rate_sell = v)}
            {date_field(ctl, "Date", "date", |f| f.date.clone(), |f, v| f.date = v)}
        },
    )
}
