//! Report phrasing
//!
//! Localization itself is a collaborator behind [`Translator`]; this module only
//! decides which keys are used, in which order, and how lists are joined.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::calendar::month_key;
use crate::core::error::Result;
use crate::core::types::Funds;
use crate::council::report::MonthlyReport;

/// Looks up localized text by key
pub trait Translator {
    /// Text for `key`; unknown keys should come back verbatim
    fn translate(&self, key: &str) -> String;

    fn tr(&self, key: &str) -> LocalizedText {
        LocalizedText::new(self.translate(key))
    }
}

/// Localized text with positional `{0}`, `{1}`, ... placeholders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalizedText {
    text: String,
    next_arg: usize,
}

impl LocalizedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next_arg: 0,
        }
    }

    /// Fill the next placeholder
    pub fn arg(mut self, value: impl fmt::Display) -> Self {
        let marker = format!("{{{}}}", self.next_arg);
        self.text = self.text.replace(&marker, &value.to_string());
        self.next_arg += 1;
        self
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Flat key -> text table
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table written as `KEY = "text"` lines
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.strings.insert(key.into(), text.into());
    }

    /// Overlay `other` on top of this table
    pub fn merge(&mut self, other: StringTable) {
        self.strings.extend(other.strings);
    }

    /// Built-in English text for every key the report uses
    pub fn english() -> Self {
        let mut table = Self::new();
        for (key, text) in ENGLISH {
            table.insert(*key, *text);
        }
        table
    }
}

impl Translator for StringTable {
    fn translate(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("STR_MONTHLY_REPORT", "Project Monthly Report"),
    ("STR_MONTH", "Month> {0} {1}"),
    ("STR_MONTHLY_RATING", "Monthly Rating> {0} {1}"),
    ("STR_FUNDING_CHANGE", "Funding change> {0}"),
    ("STR_RATING_TERRIBLE", "TERRIBLE!"),
    ("STR_RATING_POOR", "Poor"),
    ("STR_RATING_OK", "OK"),
    ("STR_RATING_GOOD", "Good"),
    ("STR_RATING_EXCELLENT", "Excellent"),
    (
        "STR_COUNCIL_IS_DISSATISFIED",
        "The Council of Funding Nations is dissatisfied with your performance.",
    ),
    (
        "STR_COUNCIL_IS_GENERALLY_SATISFIED",
        "The Council of Funding Nations is generally satisfied with your progress.",
    ),
    (
        "STR_COUNCIL_IS_VERY_PLEASED",
        "The Council of Funding Nations is very pleased with your excellent progress.",
    ),
    (
        "STR_YOU_HAVE_NOT_SUCCEEDED",
        "The Council of Funding Nations has terminated the project. You have not succeeded.",
    ),
    (
        "STR_COUNCIL_REDUCE_DEBTS",
        "The Council demands that you reduce your debts, or the project will be terminated.",
    ),
    ("STR_YOU_HAVE_FAILED", "You have failed."),
    ("STR_COUNTRY_IS_PARTICULARLY_PLEASED", "{0} is particularly pleased with your activities."),
    ("STR_COUNTRIES_ARE_PARTICULARLY_HAPPY", "{0} are particularly happy with your activities."),
    (
        "STR_COUNTRY_IS_UNHAPPY_WITH_YOUR_ABILITY",
        "{0} is unhappy with your ability to deal with the threat.",
    ),
    (
        "STR_COUNTRIES_ARE_UNHAPPY_WITH_YOUR_ABILITY",
        "{0} are unhappy with your ability to deal with the threat.",
    ),
    ("STR_COUNTRY_HAS_SIGNED_A_SECRET_PACT", "{0} has signed a secret pact with the enemy."),
    ("STR_COUNTRIES_HAVE_SIGNED_A_SECRET_PACT", "{0} have signed a secret pact with the enemy."),
    ("STR_COUNTRIES_COMMA", "{0}, {1}"),
    ("STR_COUNTRIES_AND", "{0} and {1}"),
    ("STR_JAN", "January"),
    ("STR_FEB", "February"),
    ("STR_MAR", "March"),
    ("STR_APR", "April"),
    ("STR_MAY", "May"),
    ("STR_JUN", "June"),
    ("STR_JUL", "July"),
    ("STR_AUG", "August"),
    ("STR_SEP", "September"),
    ("STR_OCT", "October"),
    ("STR_NOV", "November"),
    ("STR_DEC", "December"),
];

/// Build one report sentence from a list of nation keys
///
/// Empty lists produce nothing. Otherwise the sentence starts on a new
/// paragraph and names the nations in list order.
pub fn country_list(
    tr: &dyn Translator,
    countries: &[String],
    singular: &str,
    plural: &str,
) -> String {
    let Some((first, rest)) = countries.split_first() else {
        return String::new();
    };

    let sentence = match rest.split_last() {
        None => tr.tr(singular).arg(tr.translate(first)),
        Some((last, middle)) => {
            let mut list = tr.translate(first);
            for country in middle {
                list = tr
                    .tr("STR_COUNTRIES_COMMA")
                    .arg(list)
                    .arg(tr.translate(country))
                    .into_string();
            }
            let list = tr
                .tr("STR_COUNTRIES_AND")
                .arg(list)
                .arg(tr.translate(last));
            tr.tr(plural).arg(list)
        }
    };

    format!("\n\n{}", sentence)
}

/// Currency text with thousands separators, e.g. `-$1,250,000`
pub fn format_funding(amount: Funds) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Text of a monthly report, ready for whatever draws it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedReport {
    pub title: String,
    pub month: String,
    pub rating: String,
    pub change: String,
    pub description: String,
    /// Shown after the report when the campaign has ended
    pub failure: Option<String>,
}

impl fmt::Display for RenderedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.month)?;
        writeln!(f, "{}", self.rating)?;
        writeln!(f, "{}", self.change)?;
        writeln!(f, "{}", self.description)?;
        if let Some(failure) = &self.failure {
            writeln!(f, "\n{}", failure)?;
        }
        Ok(())
    }
}

pub fn render_report(report: &MonthlyReport, tr: &dyn Translator) -> RenderedReport {
    let (month, year) = report.reported_month;

    let change = if report.funding_delta > 0 {
        format!("+{}", format_funding(report.funding_delta))
    } else {
        format_funding(report.funding_delta)
    };

    let mut description = tr.translate(report.verdict.key());
    if report.debt_warning {
        description.push_str("\n\n");
        description.push_str(&tr.translate("STR_COUNCIL_REDUCE_DEBTS"));
    }
    description.push_str(&country_list(
        tr,
        &report.pleased,
        "STR_COUNTRY_IS_PARTICULARLY_PLEASED",
        "STR_COUNTRIES_ARE_PARTICULARLY_HAPPY",
    ));
    description.push_str(&country_list(
        tr,
        &report.unhappy,
        "STR_COUNTRY_IS_UNHAPPY_WITH_YOUR_ABILITY",
        "STR_COUNTRIES_ARE_UNHAPPY_WITH_YOUR_ABILITY",
    ));
    description.push_str(&country_list(
        tr,
        &report.defected,
        "STR_COUNTRY_HAS_SIGNED_A_SECRET_PACT",
        "STR_COUNTRIES_HAVE_SIGNED_A_SECRET_PACT",
    ));

    RenderedReport {
        title: tr.translate("STR_MONTHLY_REPORT"),
        month: tr
            .tr("STR_MONTH")
            .arg(tr.translate(month_key(month)))
            .arg(year)
            .into_string(),
        rating: tr
            .tr("STR_MONTHLY_RATING")
            .arg(report.rating)
            .arg(tr.translate(report.band.key()))
            .into_string(),
        change: tr.tr("STR_FUNDING_CHANGE").arg(change).into_string(),
        description,
        failure: report
            .is_terminal
            .then(|| tr.translate("STR_YOU_HAVE_FAILED")),
    }
}
