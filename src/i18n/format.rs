//! Format - Locale-aware date, number and currency formatting
//!
//! Follows the CLDR conventions of the two supported regions:
//!
//! | locale  | decimal | group | grouping starts at | currency        |
//! |---------|---------|-------|--------------------|-----------------|
//! | `en-US` | `.`     | `,`   | 4 digits           | `$1,234.50`     |
//! | `it-IT` | `,`     | `.`   | 5 digits           | `1234,50 €`     |

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use super::Locale;

/// No-break space, used between an amount and a trailing currency symbol
const NBSP: char = '\u{a0}';

/// Date formatting style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// Numeric (e.g., "10/19/2026", "19/10/2026")
    #[default]
    Short,
    /// Abbreviated month (e.g., "Oct 19, 2026", "19 ott 2026")
    Medium,
    /// Full month (e.g., "October 19, 2026", "19 ottobre 2026")
    Long,
    /// Weekday and full month (e.g., "Monday, October 19, 2026")
    Full,
}

/// Options for [`format_date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFormatOptions {
    pub style: DateStyle,
    /// Append hours and minutes
    pub include_time: bool,
}

impl DateFormatOptions {
    pub fn style(style: DateStyle) -> Self {
        Self {
            style,
            include_time: false,
        }
    }

    pub fn with_time(mut self) -> Self {
        self.include_time = true;
        self
    }
}

/// Options for [`format_number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatOptions {
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
    pub use_grouping: bool,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

impl NumberFormatOptions {
    /// Exactly `digits` fraction digits
    pub fn fixed(digits: usize) -> Self {
        Self {
            min_fraction_digits: digits,
            max_fraction_digits: digits,
            ..Self::default()
        }
    }
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const IT_MONTHS: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto", "settembre",
    "ottobre", "novembre", "dicembre",
];
const IT_MONTHS_SHORT: [&str; 12] = [
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
];
const IT_WEEKDAYS: [&str; 7] = [
    "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato", "domenica",
];

/// Format a date in the given locale
pub fn format_date<Tz: TimeZone>(
    date: &DateTime<Tz>,
    locale: Locale,
    options: &DateFormatOptions,
) -> String {
    let (day, month, year) = (date.day(), date.month0() as usize, date.year());
    let weekday = date.weekday().num_days_from_monday() as usize;

    let mut out = match (locale, options.style) {
        (Locale::En, DateStyle::Short) => format!("{}/{day}/{year}", month + 1),
        (Locale::En, DateStyle::Medium) => format!("{} {day}, {year}", EN_MONTHS_SHORT[month]),
        (Locale::En, DateStyle::Long) => format!("{} {day}, {year}", EN_MONTHS[month]),
        (Locale::En, DateStyle::Full) => {
            format!("{}, {} {day}, {year}", EN_WEEKDAYS[weekday], EN_MONTHS[month])
        }
        (Locale::It, DateStyle::Short) => format!("{day}/{}/{year}", month + 1),
        (Locale::It, DateStyle::Medium) => format!("{day} {} {year}", IT_MONTHS_SHORT[month]),
        (Locale::It, DateStyle::Long) => format!("{day} {} {year}", IT_MONTHS[month]),
        (Locale::It, DateStyle::Full) => {
            format!("{} {day} {} {year}", IT_WEEKDAYS[weekday], IT_MONTHS[month])
        }
    };

    if options.include_time {
        out.push_str(", ");
        out.push_str(&format_time(date.hour(), date.minute(), locale));
    }

    out
}

fn format_time(hour: u32, minute: u32, locale: Locale) -> String {
    match locale {
        Locale::En => {
            let suffix = if hour < 12 { "AM" } else { "PM" };
            let hour12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{hour12}:{minute:02} {suffix}")
        }
        Locale::It => format!("{hour:02}:{minute:02}"),
    }
}

/// (decimal separator, group separator, minimum integer digits before grouping applies)
fn separators(locale: Locale) -> (char, char, usize) {
    match locale {
        Locale::En => ('.', ',', 4),
        Locale::It => (',', '.', 5),
    }
}

/// Format a number in the given locale
pub fn format_number(n: f64, locale: Locale, options: &NumberFormatOptions) -> String {
    if !n.is_finite() {
        return non_finite(n);
    }

    let (negative, digits) = decimal_digits(n, locale, options);
    if negative { format!("-{digits}") } else { digits }
}

/// Format an amount of money; `currency` is an ISO 4217 code
pub fn format_currency(amount: f64, locale: Locale, currency: &str) -> String {
    if !amount.is_finite() {
        return non_finite(amount);
    }

    let currency = currency.trim().to_ascii_uppercase();
    let options = NumberFormatOptions::fixed(currency_fraction_digits(&currency));
    let (negative, digits) = decimal_digits(amount, locale, &options);
    let sign = if negative { "-" } else { "" };

    match (locale, currency_symbol(locale, &currency)) {
        (Locale::En, Some(symbol)) => format!("{sign}{symbol}{digits}"),
        (Locale::En, None) => format!("{sign}{currency}{NBSP}{digits}"),
        (Locale::It, symbol) => {
            format!("{sign}{digits}{NBSP}{}", symbol.unwrap_or(currency.as_str()))
        }
    }
}

fn currency_symbol(locale: Locale, currency: &str) -> Option<&'static str> {
    match (locale, currency) {
        (_, "EUR") => Some("€"),
        (_, "GBP") => Some("£"),
        (Locale::En, "USD") => Some("$"),
        (Locale::En, "JPY") => Some("¥"),
        _ => None,
    }
}

fn currency_fraction_digits(currency: &str) -> usize {
    match currency {
        "JPY" | "KRW" | "ISK" => 0,
        _ => 2,
    }
}

fn non_finite(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_sign_negative() {
        "-∞".to_string()
    } else {
        "∞".to_string()
    }
}

/// Round, trim and group `n`; returns the sign separately so callers can
/// place currency symbols between sign and digits.
fn decimal_digits(n: f64, locale: Locale, options: &NumberFormatOptions) -> (bool, String) {
    let (decimal_sep, group_sep, min_grouping) = separators(locale);
    let max_fraction = options.max_fraction_digits.max(options.min_fraction_digits);

    let rounded = format!("{:.*}", max_fraction, n.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut fraction = fraction.to_string();
    while fraction.len() > options.min_fraction_digits && fraction.ends_with('0') {
        fraction.pop();
    }

    let integer = if options.use_grouping && integer.len() >= min_grouping {
        group_digits(integer, group_sep)
    } else {
        integer.to_string()
    };

    // "-0" is not a thing once rounding has eaten every significant digit
    let negative = n < 0.0 && rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let digits = if fraction.is_empty() {
        integer
    } else {
        format!("{integer}{decimal_sep}{fraction}")
    };

    (negative, digits)
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }

    out
}
