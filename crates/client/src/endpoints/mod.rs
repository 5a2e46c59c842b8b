//! Declarative endpoint table.
//!
//! Every REST endpoint is described by an [`Endpoint`]: a URL template whose
//! `{placeholders}` are filled from the call arguments, plus the list of query
//! parameters it accepts. A single generic [`Endpoint::build`] turns an
//! endpoint and a set of [`Args`] into an [`ApiRequest`].

mod args;
mod catalog;

pub use args::Args;
pub use catalog::ENDPOINTS;

use std::str::FromStr;

use crate::errors::{FmpError, Result};
use crate::http::ApiRequest;

/// Group of related endpoints, one per area of the API.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Category {
    Bulk,
    Charts,
    Commodities,
    CompanyInfo,
    CompanySearch,
    Constituents,
    Crypto,
    Dividends,
    Earnings,
    EarningsTranscripts,
    EconomicData,
    Esg,
    EtfHoldings,
    FinancialStatements,
    Forex,
    Fundraising,
    InsiderTrading,
    InstitutionalOwnership,
    IpoCalendar,
    MarketPerformance,
    MergersAndAcquisitions,
    MutualFundHoldings,
    News,
    PriceTargets,
    Quote,
    SalesRevenueBySegments,
    SecFilings,
    Senate,
    Splits,
    StatementAnalysis,
    StockList,
    TechnicalIndicators,
    UpgradesDowngrades,
    Valuation,
}

impl Category {
    const ALL: [Category; 34] = [
        Category::Bulk,
        Category::Charts,
        Category::Commodities,
        Category::CompanyInfo,
        Category::CompanySearch,
        Category::Constituents,
        Category::Crypto,
        Category::Dividends,
        Category::Earnings,
        Category::EarningsTranscripts,
        Category::EconomicData,
        Category::Esg,
        Category::EtfHoldings,
        Category::FinancialStatements,
        Category::Forex,
        Category::Fundraising,
        Category::InsiderTrading,
        Category::InstitutionalOwnership,
        Category::IpoCalendar,
        Category::MarketPerformance,
        Category::MergersAndAcquisitions,
        Category::MutualFundHoldings,
        Category::News,
        Category::PriceTargets,
        Category::Quote,
        Category::SalesRevenueBySegments,
        Category::SecFilings,
        Category::Senate,
        Category::Splits,
        Category::StatementAnalysis,
        Category::StockList,
        Category::TechnicalIndicators,
        Category::UpgradesDowngrades,
        Category::Valuation,
    ];

    /// Every category, in declaration order.
    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bulk => "bulk",
            Category::Charts => "charts",
            Category::Commodities => "commodities",
            Category::CompanyInfo => "company_info",
            Category::CompanySearch => "company_search",
            Category::Constituents => "constituents",
            Category::Crypto => "crypto",
            Category::Dividends => "dividends",
            Category::Earnings => "earnings",
            Category::EarningsTranscripts => "earnings_transcripts",
            Category::EconomicData => "economic_data",
            Category::Esg => "esg",
            Category::EtfHoldings => "etf_holdings",
            Category::FinancialStatements => "financial_statements",
            Category::Forex => "forex",
            Category::Fundraising => "fundraising",
            Category::InsiderTrading => "insider_trading",
            Category::InstitutionalOwnership => "institutional_ownership",
            Category::IpoCalendar => "ipo_calendar",
            Category::MarketPerformance => "market_performance",
            Category::MergersAndAcquisitions => "mergers_and_acquisitions",
            Category::MutualFundHoldings => "mutual_fund_holdings",
            Category::News => "news",
            Category::PriceTargets => "price_targets",
            Category::Quote => "quote",
            Category::SalesRevenueBySegments => "sales_revenue_by_segments",
            Category::SecFilings => "sec_filings",
            Category::Senate => "senate",
            Category::Splits => "splits",
            Category::StatementAnalysis => "statement_analysis",
            Category::StockList => "stock_list",
            Category::TechnicalIndicators => "technical_indicators",
            Category::UpgradesDowngrades => "upgrades_downgrades",
            Category::Valuation => "valuation",
        }
    }

    /// Endpoints belonging to this category.
    pub fn endpoints(self) -> impl Iterator<Item = &'static Endpoint> {
        ENDPOINTS.iter().filter(move |e| e.category == self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FmpError::UnknownEndpoint {
                category: s.to_string(),
                name: "*".to_string(),
            })
    }
}

/// A query parameter accepted by an endpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Param {
    /// Name as sent on the wire, e.g. `from` or `marketCapMoreThan`.
    pub name: &'static str,
    pub required: bool,
    /// Value sent when the caller supplies none.
    pub default: Option<&'static str>,
}

impl Param {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            default: None,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            default: None,
        }
    }

    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            required: false,
            default: Some(default),
        }
    }
}

/// One remote endpoint: a URL template plus its parameter contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Endpoint {
    pub category: Category,
    pub name: &'static str,
    /// Path relative to the base URL, with `{name}` placeholders.
    pub path: &'static str,
    pub query: &'static [Param],
}

impl Endpoint {
    pub const fn new(
        category: Category,
        name: &'static str,
        path: &'static str,
        query: &'static [Param],
    ) -> Self {
        Self {
            category,
            name,
            path,
            query,
        }
    }

    /// Names of the `{placeholders}` in the path template, in order.
    pub fn path_params(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Whether `name` is a path placeholder or a query parameter of this endpoint.
    pub fn accepts(&self, name: &str) -> bool {
        self.path_params().contains(&name) || self.query.iter().any(|p| p.name == name)
    }

    /// Resolves the endpoint against the given arguments.
    ///
    /// Path placeholders are substituted from `args`; query parameters are taken
    /// from `args` or their default, and omitted when neither is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use fmp_client::endpoints::{find, Args, Category};
    ///
    /// let endpoint = find(Category::Charts, "intraday_chart").unwrap();
    /// let args = Args::new()
    ///     .with("timeframe", "5min")
    ///     .with("symbol", "AAPL")
    ///     .with("from", "2023-01-01")
    ///     .with("to", "2023-01-02");
    /// let request = endpoint.build(&args).unwrap();
    ///
    /// assert_eq!(request.path, "v3/historical-chart/5min/AAPL");
    /// assert_eq!(request.query_value("from"), Some("2023-01-01"));
    /// ```
    pub fn build(&self, args: &Args) -> Result<ApiRequest> {
        if let Some(unexpected) = args.keys().find(|key| !self.accepts(key)) {
            return Err(FmpError::UnexpectedParameter {
                endpoint: self.qualified_name(),
                parameter: unexpected.to_string(),
            });
        }

        let mut path = String::with_capacity(self.path.len());
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(end) = rest[start..].find('}') else {
                break;
            };
            let name = &rest[start + 1..start + end];
            let value = args.get(name).ok_or_else(|| self.missing(name))?;
            path.push_str(&rest[..start]);
            path.push_str(value);
            rest = &rest[start + end + 1..];
        }
        path.push_str(rest);

        let mut request = ApiRequest::new(path);
        for param in self.query {
            match args.get(param.name).or(param.default) {
                Some(value) => request = request.param(param.name, value),
                None if param.required => return Err(self.missing(param.name)),
                None => {}
            }
        }

        Ok(request)
    }

    /// `category.name`, as used in error messages.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.category, self.name)
    }

    fn missing(&self, parameter: &str) -> FmpError {
        FmpError::MissingParameter {
            endpoint: self.qualified_name(),
            parameter: parameter.to_string(),
        }
    }
}

/// Looks up an endpoint by category and name.
pub fn find(category: Category, name: &str) -> Result<&'static Endpoint> {
    ENDPOINTS
        .iter()
        .find(|e| e.category == category && e.name == name)
        .ok_or_else(|| FmpError::UnknownEndpoint {
            category: category.to_string(),
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_company_profile_has_no_query() {
        let request = find(Category::CompanyInfo, "company_profile")
            .unwrap()
            .build(&Args::new().with("symbol", "AAPL"))
            .unwrap();

        assert_eq!(request.path, "v3/profile/AAPL");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_intraday_chart_request() {
        let request = find(Category::Charts, "intraday_chart")
            .unwrap()
            .build(
                &Args::new()
                    .with("timeframe", "5min")
                    .with("symbol", "AAPL")
                    .with("from", "2023-01-01")
                    .with("to", "2023-01-02"),
            )
            .unwrap();

        assert_eq!(request.path, "v3/historical-chart/5min/AAPL");
        assert_eq!(
            request.query,
            vec![
                ("from".to_string(), "2023-01-01".to_string()),
                ("to".to_string(), "2023-01-02".to_string()),
            ]
        );
    }

    #[test]
    fn test_defaults_are_applied() {
        let request = find(Category::FinancialStatements, "income_statement_by_symbol")
            .unwrap()
            .build(&Args::new().with("symbol", "MSFT"))
            .unwrap();

        assert_eq!(request.path, "v3/income-statement/MSFT");
        assert_eq!(request.query_value("period"), Some("annual"));
        assert_eq!(request.query_value("datatype"), Some("json"));
        assert_eq!(request.query_value("limit"), Some("100"));
    }

    #[test]
    fn test_caller_value_overrides_default() {
        let request = find(Category::News, "stock_news")
            .unwrap()
            .build(&Args::new().with("page", 3).with("tickers", "AAPL,MSFT"))
            .unwrap();

        assert_eq!(request.query_value("page"), Some("3"));
        assert_eq!(request.query_value("tickers"), Some("AAPL,MSFT"));
        assert_eq!(request.query_value("limit"), Some("50"));
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let request = find(Category::CompanySearch, "general_search")
            .unwrap()
            .build(&Args::new().with("query", "apple").opt("exchange", None::<&str>))
            .unwrap();

        assert_eq!(request.query_value("exchange"), None);
        assert!(request
            .query
            .iter()
            .all(|(_, value)| value != "None" && value != "null"));
    }

    #[test]
    fn test_missing_path_parameter() {
        let error = find(Category::Charts, "intraday_chart")
            .unwrap()
            .build(&Args::new().with("symbol", "AAPL"))
            .unwrap_err();

        match error {
            FmpError::MissingParameter {
                endpoint,
                parameter,
            } => {
                assert_eq!(endpoint, "charts.intraday_chart");
                assert_eq!(parameter, "timeframe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_query_parameter() {
        let error = find(Category::Dividends, "dividends_calendar")
            .unwrap()
            .build(&Args::new().with("from", "2024-01-01"))
            .unwrap_err();
        assert!(matches!(
            error,
            FmpError::MissingParameter { ref parameter, .. } if parameter == "to"
        ));
    }

    #[test]
    fn test_unexpected_parameter() {
        let error = find(Category::Quote, "full_quote")
            .unwrap()
            .build(&Args::new().with("symbol", "AAPL").with("limit", 5))
            .unwrap_err();
        assert!(matches!(
            error,
            FmpError::UnexpectedParameter { ref parameter, .. } if parameter == "limit"
        ));
    }

    #[test]
    fn test_unknown_endpoint() {
        let error = find(Category::Quote, "does_not_exist").unwrap_err();
        assert_eq!(error.to_string(), "Unknown endpoint: quote.does_not_exist");
    }

    #[test]
    fn test_path_params() {
        let endpoint = find(Category::TechnicalIndicators, "technical_indicator").unwrap();
        assert_eq!(endpoint.path_params(), vec!["timeframe", "symbol"]);

        let endpoint = find(Category::StockList, "stock_list").unwrap();
        assert!(endpoint.path_params().is_empty());
    }

    #[test]
    fn test_category_round_trip_through_str() {
        for category in Category::all() {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
        }
        assert!("nope".parse::<Category>().is_err());
    }

    #[test]
    fn test_every_category_has_endpoints() {
        for category in Category::all() {
            assert!(
                category.endpoints().next().is_some(),
                "{category} has no endpoints"
            );
        }
    }

    #[test]
    fn test_endpoint_names_are_unique_per_category() {
        let mut seen = HashSet::new();
        for endpoint in ENDPOINTS {
            assert!(
                seen.insert((endpoint.category, endpoint.name)),
                "duplicate endpoint {}",
                endpoint.qualified_name()
            );
        }
    }

    #[test]
    fn test_templates_are_well_formed() {
        for endpoint in ENDPOINTS {
            let opens = endpoint.path.matches('{').count();
            let closes = endpoint.path.matches('}').count();
            assert_eq!(opens, closes, "{}", endpoint.qualified_name());
            assert_eq!(endpoint.path_params().len(), opens);
            assert!(
                endpoint.path.starts_with("v3/") || endpoint.path.starts_with("v4/"),
                "{} has path {}",
                endpoint.qualified_name(),
                endpoint.path
            );
            assert!(!endpoint.path.contains(' '));
        }
    }

    #[test]
    fn test_no_parameter_is_both_path_and_query() {
        for endpoint in ENDPOINTS {
            let path_params = endpoint.path_params();
            for param in endpoint.query {
                assert!(
                    !path_params.contains(&param.name),
                    "{} repeats {}",
                    endpoint.qualified_name(),
                    param.name
                );
                assert!(
                    !(param.required && param.default.is_some()),
                    "{} has a required parameter with a default",
                    endpoint.qualified_name()
                );
            }
        }
    }

    #[test]
    fn test_every_endpoint_builds_with_required_args_only() {
        for endpoint in ENDPOINTS {
            let mut args = Args::new();
            for name in endpoint.path_params() {
                args.set(name, "X");
            }
            for param in endpoint.query.iter().filter(|p| p.required) {
                args.set(param.name, "1");
            }

            let request = endpoint
                .build(&args)
                .unwrap_or_else(|e| panic!("{}: {}", endpoint.qualified_name(), e));

            assert!(!request.path.contains('{'));
            for param in endpoint.query {
                let expected = param.required || param.default.is_some();
                assert_eq!(
                    request.query_value(param.name).is_some(),
                    expected,
                    "{}.{}",
                    endpoint.qualified_name(),
                    param.name
                );
            }
        }
    }
}
