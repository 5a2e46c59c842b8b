use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::NaiveDate;

/// Wire format for date arguments.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Named arguments for an endpoint call.
///
/// Values are stored in their wire form. Absent optional arguments are simply
/// never inserted, so they can not leak into a query string as `"None"`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Args {
    values: BTreeMap<String, String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.set(name, value);
        self
    }

    /// Adds an argument when a value is present.
    pub fn opt(mut self, name: impl Into<String>, value: Option<impl Display>) -> Self {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    /// Adds a date argument in `YYYY-MM-DD` form.
    pub fn date(self, name: impl Into<String>, date: NaiveDate) -> Self {
        self.with(name, date.format(DATE_FORMAT))
    }

    /// Adds `from` and `to` date arguments.
    pub fn date_range(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date("from", from).date("to", to)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (name, value) in iter {
            args.set(name, value);
        }
        args
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Args {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_use_wire_form() {
        let args = Args::new()
            .with("limit", 10)
            .with("isEtf", true)
            .with("priceMoreThan", 12.5)
            .with("symbol", "AAPL");

        assert_eq!(args.get("limit"), Some("10"));
        assert_eq!(args.get("isEtf"), Some("true"));
        assert_eq!(args.get("priceMoreThan"), Some("12.5"));
        assert_eq!(args.get("symbol"), Some("AAPL"));
    }

    #[test]
    fn test_opt_skips_none() {
        let args = Args::new()
            .opt("exchange", None::<String>)
            .opt("page", Some(2));

        assert_eq!(args.len(), 1);
        assert_eq!(args.get("exchange"), None);
        assert_eq!(args.get("page"), Some("2"));
    }

    #[test]
    fn test_date_range() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let args = Args::new().date_range(from, to);

        assert_eq!(args.get("from"), Some("2023-01-01"));
        assert_eq!(args.get("to"), Some("2023-01-02"));
    }

    #[test]
    fn test_from_pairs() {
        let args = Args::from([("symbol", "AAPL"), ("page", "0")]);
        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["page", "symbol"]);

        let mut args: Args = vec![("year", 2023)].into_iter().collect();
        assert_eq!(args.remove("year"), Some("2023".to_string()));
        assert!(args.is_empty());
    }
}
