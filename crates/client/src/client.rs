//! The top-level client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoints::{self, Args, Category, Endpoint};
use crate::errors::{FmpError, Result};
use crate::http::{ApiRequest, HttpClient, ResponseCache};

/// Client for the Financial Modeling Prep REST API.
///
/// Holds the API key and one shared HTTP session (connection pool and response
/// cache). Endpoints are reached either generically through
/// [`call`](Self::call) or through the per-category handles such as
/// [`company_info`](Self::company_info).
///
/// ```no_run
/// use fmp_client::{Args, FinancialModelingPrep};
///
/// # async fn run() -> fmp_client::Result<()> {
/// let fmp = FinancialModelingPrep::new("demo");
/// let profile = fmp
///     .company_info()
///     .call("company_profile", &Args::new().with("symbol", "AAPL"))
///     .await?;
/// println!("{profile}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct FinancialModelingPrep {
    http: HttpClient,
}

impl FinancialModelingPrep {
    /// Creates a client with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: HttpClient::new(&config),
        }
    }

    /// Creates a client storing responses in a caller-provided cache.
    pub fn with_cache(config: ClientConfig, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            http: HttpClient::with_cache(&config, cache),
        }
    }

    /// Creates a client from `FMP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Resolves an endpoint call into a request without sending it.
    pub fn request(&self, category: Category, name: &str, args: &Args) -> Result<ApiRequest> {
        endpoints::find(category, name)?.build(args)
    }

    /// Calls an endpoint; error-shaped responses become [`FmpError::Api`].
    pub async fn call(&self, category: Category, name: &str, args: &Args) -> Result<Value> {
        let request = self.request(category, name, args)?;
        debug!("Calling {}.{}", category, name);
        self.http.fetch(&request).await
    }

    /// Calls an endpoint and deserializes the payload into `T`.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        category: Category,
        name: &str,
        args: &Args,
    ) -> Result<T> {
        let request = self.request(category, name, args)?;
        let body = self.http.fetch(&request).await?;
        serde_json::from_value(body).map_err(|source| FmpError::Decode {
            endpoint: request.path,
            source,
        })
    }

    /// Sends a GET to an arbitrary path and returns the body as the server sent it.
    ///
    /// Every argument becomes a query parameter. No classification is applied.
    pub async fn get(&self, endpoint: &str, args: &Args) -> Result<Value> {
        let request = args
            .iter()
            .fold(ApiRequest::new(endpoint), |request, (name, value)| {
                request.param(name, value)
            });
        self.http.get(&request).await
    }

    /// Handle for the endpoints of one category.
    pub fn category(&self, category: Category) -> CategoryClient<'_> {
        CategoryClient {
            client: self,
            category,
        }
    }
}

macro_rules! category_accessors {
    ($($method:ident => $category:ident),* $(,)?) => {
        impl FinancialModelingPrep {
            $(
                pub fn $method(&self) -> CategoryClient<'_> {
                    self.category(Category::$category)
                }
            )*
        }
    };
}

category_accessors! {
    bulk => Bulk,
    charts => Charts,
    commodities => Commodities,
    company_info => CompanyInfo,
    company_search => CompanySearch,
    constituents => Constituents,
    crypto => Crypto,
    dividends => Dividends,
    earnings => Earnings,
    earnings_transcripts => EarningsTranscripts,
    economic_data => EconomicData,
    esg => Esg,
    etf_holdings => EtfHoldings,
    financial_statements => FinancialStatements,
    forex => Forex,
    fundraising => Fundraising,
    insider_trading => InsiderTrading,
    institutional_ownership => InstitutionalOwnership,
    ipo_calendar => IpoCalendar,
    market_performance => MarketPerformance,
    mergers_and_acquisitions => MergersAndAcquisitions,
    mutual_fund_holdings => MutualFundHoldings,
    news => News,
    price_targets => PriceTargets,
    quote => Quote,
    sales_revenue_by_segments => SalesRevenueBySegments,
    sec_filings => SecFilings,
    senate => Senate,
    splits => Splits,
    statement_analysis => StatementAnalysis,
    stock_list => StockList,
    technical_indicators => TechnicalIndicators,
    upgrades_downgrades => UpgradesDowngrades,
    valuation => Valuation,
}

/// Endpoints of a single category, bound to a client.
#[derive(Clone, Copy, Debug)]
pub struct CategoryClient<'a> {
    client: &'a FinancialModelingPrep,
    category: Category,
}

impl<'a> CategoryClient<'a> {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Endpoints available in this category.
    pub fn endpoints(&self) -> impl Iterator<Item = &'static Endpoint> {
        self.category.endpoints()
    }

    pub fn request(&self, name: &str, args: &Args) -> Result<ApiRequest> {
        self.client.request(self.category, name, args)
    }

    pub async fn call(&self, name: &str, args: &Args) -> Result<Value> {
        self.client.call(self.category, name, args).await
    }

    pub async fn call_as<T: DeserializeOwned>(&self, name: &str, args: &Args) -> Result<T> {
        self.client.call_as(self.category, name, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_pure() {
        let fmp = FinancialModelingPrep::new("demo");
        let request = fmp
            .request(
                Category::CompanyInfo,
                "company_profile",
                &Args::new().with("symbol", "AAPL"),
            )
            .unwrap();

        assert_eq!(request.path, "v3/profile/AAPL");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_category_handles() {
        let fmp = FinancialModelingPrep::new("demo");

        assert_eq!(fmp.quote().category(), Category::Quote);
        assert_eq!(fmp.upgrades_downgrades().category(), Category::UpgradesDowngrades);
        assert_eq!(fmp.charts().endpoints().count(), 2);

        let request = fmp
            .valuation()
            .request("historical_rating", &Args::new().with("symbol", "IBM"))
            .unwrap();
        assert_eq!(request.path, "v3/historical-rating/IBM");
        assert_eq!(request.query_value("limit"), Some("140"));
    }

    #[test]
    fn test_unknown_endpoint_in_category() {
        let fmp = FinancialModelingPrep::new("demo");
        let error = fmp.forex().request("company_profile", &Args::new()).unwrap_err();
        assert!(matches!(error, FmpError::UnknownEndpoint { .. }));
    }

    #[tokio::test]
    async fn test_call_rejects_bad_arguments_before_sending() {
        let config = ClientConfig::new("demo").with_base_url("http://127.0.0.1:9/api/");
        let fmp = FinancialModelingPrep::with_config(config);

        let error = fmp
            .call(Category::Charts, "intraday_chart", &Args::new())
            .await
            .unwrap_err();
        assert!(matches!(error, FmpError::MissingParameter { .. }));
    }
}
