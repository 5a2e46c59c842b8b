//! The endpoint table.
//!
//! Entries read `(Category, "name", "path/{placeholder}", query params...)`.
//! Placeholder names double as argument names; query params are declared with
//! [`req`], [`opt`] or [`def`] in the order they are sent.

use super::{Category, Endpoint, Param};

const fn req(name: &'static str) -> Param {
    Param::required(name)
}

const fn opt(name: &'static str) -> Param {
    Param::optional(name)
}

const fn def(name: &'static str, default: &'static str) -> Param {
    Param::with_default(name, default)
}

macro_rules! endpoints {
    ($( ($category:ident, $name:literal, $path:literal $(, $param:expr)* $(,)?) ),* $(,)?) => {
        &[$(
            Endpoint {
                category: Category::$category,
                name: $name,
                path: $path,
                query: &[$($param),*],
            }
        ),*]
    };
}

/// Every known endpoint.
pub static ENDPOINTS: &[Endpoint] = endpoints![
    // Bulk
    (Bulk, "batch_eod_prices", "v4/batch-request-end-of-day-prices", req("date")),
    (Bulk, "income_statements", "v4/income-statement-bulk", req("year"), req("period")),
    (Bulk, "balance_sheets", "v4/balance-sheet-statement-bulk", req("year"), req("period")),
    (Bulk, "cash_flow_statements", "v4/cash-flow-statement-bulk", req("year"), req("period")),
    (Bulk, "ratios", "v4/ratios-bulk", req("year"), req("period")),
    (Bulk, "key_metrics", "v4/key-metrics-bulk", req("year"), req("period")),
    (Bulk, "earnings_surprises", "v4/earnings-surprises-bulk", req("year")),
    (Bulk, "profiles", "v4/profile/all"),
    (Bulk, "stock_peers", "v4/stock_peers_bulk"),
    (Bulk, "ratings", "v4/rating-bulk"),
    (Bulk, "latest_dcf", "v4/dcf-bulk"),
    (Bulk, "key_metrics_ttm", "v4/key-metrics-ttm-bulk"),
    (Bulk, "ratios_ttm", "v4/ratios-ttm-bulk"),
    (Bulk, "scores", "v4/scores-bulk"),
    (Bulk, "financial_growth", "v4/financial-growth-bulk", req("year"), req("period")),
    (Bulk, "income_statements_growth", "v4/income-statement-growth-bulk", req("year"), req("period")),
    (Bulk, "balance_sheets_growth", "v4/balance-sheet-statement-growth-bulk", req("year"), req("period")),
    (Bulk, "cash_flow_statements_growth", "v4/cash-flow-statement-growth-bulk", req("year"), req("period")),
    (Bulk, "price_target_summary", "v4/price-target-summary-bulk"),
    (Bulk, "upgrades_downgrades_consensus", "v4/upgrades-downgrades-consensus-bulk"),
    (Bulk, "etf_holdings", "v4/etf-holder-bulk"),

    // Charts
    (Charts, "intraday_chart", "v3/historical-chart/{timeframe}/{symbol}", req("from"), req("to")),
    (Charts, "daily_chart_eod", "v3/historical-price-full/{symbol}", req("from"), req("to"), req("serietype")),

    // Commodities
    (Commodities, "commodities_list", "v3/symbol/available-commodities"),
    (Commodities, "full_quote_list", "v3/quotes/commodity"),
    (Commodities, "full_quote", "v3/quote/{symbol}"),
    (Commodities, "intraday_commodities", "v3/historical-chart/{timeframe}/{symbol}", opt("from"), opt("to")),
    (Commodities, "commodities_daily", "v3/historical-price-full/{symbol}"),

    // Company information
    (CompanyInfo, "company_profile", "v3/profile/{symbol}"),
    (CompanyInfo, "executive_compensation", "v4/governance/executive_compensation", req("symbol")),
    (CompanyInfo, "compensation_benchmark", "v4/executive-compensation-benchmark", req("year")),
    (CompanyInfo, "company_notes", "v4/company-notes", req("symbol")),
    (CompanyInfo, "historical_employee_count", "v4/historical/employee_count", req("symbol")),
    (CompanyInfo, "employee_count", "v4/employee_count", req("symbol")),
    (
        CompanyInfo,
        "stock_screener",
        "v3/stock-screener",
        opt("marketCapMoreThan"),
        opt("marketCapLowerThan"),
        opt("priceMoreThan"),
        opt("priceLowerThan"),
        opt("betaMoreThan"),
        opt("betaLowerThan"),
        opt("volumeMoreThan"),
        opt("volumeLowerThan"),
        opt("dividendMoreThan"),
        opt("dividendLowerThan"),
        opt("isEtf"),
        opt("isFund"),
        opt("sector"),
        opt("industry"),
        opt("country"),
        opt("exchange"),
        opt("limit"),
    ),
    (CompanyInfo, "stock_grade", "v3/grade/{symbol}", def("limit", "500")),
    (CompanyInfo, "executives", "v3/key-executives/{symbol}"),
    (CompanyInfo, "company_core_information", "v4/company-core-information", req("symbol")),
    (CompanyInfo, "market_capitalization", "v3/market-capitalization/{symbol}"),
    (CompanyInfo, "historical_market_capitalization", "v3/historical-market-capitalization/{symbol}", req("from"), req("to"), def("limit", "500")),
    (CompanyInfo, "all_countries", "v3/get-all-countries"),
    (CompanyInfo, "analyst_estimates", "v3/analyst-estimates/{symbol}", req("period"), def("limit", "30")),
    (CompanyInfo, "analyst_recommendations", "v3/analyst-stock-recommendations/{symbol}", def("limit", "10")),
    (CompanyInfo, "company_outlook", "v4/company-outlook", req("symbol")),
    (CompanyInfo, "stock_peers", "v4/stock_peers", req("symbol")),
    (CompanyInfo, "market_open", "v3/is-the-market-open"),
    (CompanyInfo, "delisted_companies", "v3/delisted-companies", def("page", "0")),
    (CompanyInfo, "company_share_float", "v4/shares_float", req("symbol")),
    (CompanyInfo, "historical_share_float", "v4/historical/shares_float", req("symbol")),
    (CompanyInfo, "all_shares_float", "v4/shares_float"),

    // Company search
    (CompanySearch, "general_search", "v3/search", req("query"), def("limit", "10"), opt("exchange")),
    (CompanySearch, "ticker_search", "v3/search-ticker", req("query"), def("limit", "10"), opt("exchange")),
    (CompanySearch, "name_search", "v3/search-name", req("query"), def("limit", "10"), opt("exchange")),
    (CompanySearch, "cik_name_search", "v3/cik-search/{company_name}"),
    (CompanySearch, "cik_search", "v3/cik/{cik_number}"),
    (CompanySearch, "cusip_search", "v3/cusip/{cusip_number}"),

    // Index constituents
    (Constituents, "sp500_constituents", "v3/sp500_constituent", def("datatype", "json")),
    (Constituents, "historical_sp500_constituents", "v3/historical/sp500_constituent"),
    (Constituents, "nasdaq_constituents", "v3/nasdaq_constituent", def("datatype", "json")),
    (Constituents, "historical_nasdaq_constituents", "v3/historical/nasdaq_constituent"),
    (Constituents, "dow_jones_constituents", "v3/dowjones_constituent", def("datatype", "json")),
    (Constituents, "historical_dow_jones_constituents", "v3/historical/dowjones_constituent"),

    // Crypto
    // Misspelled on the server side.
    (Crypto, "cryptocurrencies_list", "v3/symbol/available-crpytocurrencies"),
    (Crypto, "full_quote_list", "v3/quotes/crypto"),
    (Crypto, "full_quote", "v3/quote/{symbol}"),
    (Crypto, "intraday_cryptocurrency", "v3/historical-chart/{timeframe}/{symbol}"),
    (Crypto, "cryptocurrency_daily", "v3/historical-price-full/{symbol}"),

    // Dividends
    (Dividends, "dividends_calendar", "v3/stock_dividend_calendar", req("from"), req("to")),
    (Dividends, "dividends_historical", "v3/historical_price_full/stock_dividend/{symbol}"),

    // Earnings
    (Earnings, "earnings_calendar", "v3/earnings_calendar", req("from"), req("to")),
    (Earnings, "historical_and_upcoming_earnings_calendar", "v3/historical/earnings_calendar/{symbol}", def("limit", "100")),
    (Earnings, "earnings_confirmed", "v4/earning_calendar_confirmed", req("from"), req("to"), def("limit", "100")),
    (Earnings, "earnings_surprises", "v3/earnings_surprises/{symbol}"),

    // Earnings call transcripts
    (EarningsTranscripts, "earnings_transcript", "v3/earning_call_transcript/{symbol}", opt("year"), opt("quarter")),
    (EarningsTranscripts, "transcript_dates", "v4/earning_call_transcripts", req("symbol")),
    (EarningsTranscripts, "batch_earnings_transcripts", "v4/batch_earning_call_transcript/{symbol}", opt("year")),

    // Economic data
    (EconomicData, "treasury_rates", "v4/treasury", req("from"), req("to")),
    (EconomicData, "economic_indicators", "v4/economic", req("name"), req("from"), req("to")),
    (EconomicData, "economic_calendar", "v4/economic_calendar", req("from"), req("to")),
    (EconomicData, "market_risk_premium", "v4/market_risk_premium"),

    // ESG
    (Esg, "esg_search", "v4/esg-environmental-social-governance-data", req("symbol")),
    // sic
    (Esg, "esg_ratings", "v4/esg-enviromental-social-governance-data-ratings", req("symbol")),
    (Esg, "esg_benchmark", "v4/esg-environmental-social-governance-sector-benchmark", req("year")),

    // ETF holdings
    (EtfHoldings, "etf_holdings", "v4/etf-holdings", req("symbol"), opt("cik"), opt("date")),
    (EtfHoldings, "etf_holding_dates", "v4/etf-holdings/portfolio-date", req("symbol"), opt("cik")),
    (EtfHoldings, "etf_holder", "v3/etf-holder/{symbol}"),
    (EtfHoldings, "etf_information", "v4/etf-info", req("symbol")),
    (EtfHoldings, "etf_sector_weighting", "v3/etf-sector-weightings/{symbol}"),
    (EtfHoldings, "etf_country_weighting", "v3/etf-country-weightings/{symbol}"),
    (EtfHoldings, "etf_sector_exposure", "v3/etf-stock-exposure/{symbol}"),

    // Financial statements
    (FinancialStatements, "income_statement_by_symbol", "v3/income-statement/{symbol}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "income_statement_by_cik", "v3/income-statement/{cik}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "balance_sheet_statement_by_symbol", "v3/balance-sheet-statement/{symbol}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "balance_sheet_statement_by_cik", "v3/balance-sheet-statement/{cik}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "cashflow_statement_by_symbol", "v3/cash-flow-statement/{symbol}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "cashflow_statement_by_cik", "v3/cash-flow-statement/{cik}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "income_statement_as_reported", "v3/income-statement-as-reported/{symbol}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "balance_sheet_statement_as_reported", "v3/balance-sheet-statement-as-reported/{symbol}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "cash_flow_statement_as_reported", "v3/cash-flow-statement-as-reported/{symbol}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "full_financial_statements_as_reported", "v3/financial-statement-full-as-reported/{symbol}", def("period", "annual"), def("datatype", "json"), def("limit", "100")),
    (FinancialStatements, "list_of_dates_and_links", "v4/financial-reports-dates", req("symbol")),
    (FinancialStatements, "annual_reports_on_form_10_k", "v4/financial-reports-json", req("symbol"), req("year"), def("period", "FY")),
    (FinancialStatements, "annual_reports_on_form_10_k_xlsx", "v4/financial-reports-xlsx", req("symbol"), req("year"), def("period", "FY")),

    // Forex
    (Forex, "forex_list", "v3/symbol/available-forex-currency-pairs"),
    (Forex, "full_quote_list", "v3/quotes/forex"),
    (Forex, "full_quote", "v3/quote/{symbol}"),
    (Forex, "intraday_forex", "v3/historical-chart/{timeframe}/{symbol}", opt("from"), opt("to")),
    (Forex, "forex_daily", "v3/historical-price-full/{symbol}"),

    // Fundraising
    (Fundraising, "crowdfunding_rss", "v4/crowdfunding-offerings-rss-feed", def("page", "0")),
    (Fundraising, "search_crowdfunding", "v4/crowdfunding-offerings/search", req("name")),
    (Fundraising, "crowdfunding_by_cik", "v4/crowdfunding-offerings", req("cik")),
    (Fundraising, "equity_offering_rss", "v4/fundraising-rss-feed", def("page", "0")),
    (Fundraising, "search_equity_offering", "v4/fundraising/search", req("name")),
    (Fundraising, "equity_offering_by_cik", "v4/fundraising", req("cik")),

    // Insider trading
    (InsiderTrading, "insider_trades_rss", "v4/insider-trading-rss-feed", opt("page")),
    (InsiderTrading, "insider_trades_search", "v4/insider-trading", opt("symbol"), opt("reportingCik"), opt("companyCik"), opt("page")),
    (InsiderTrading, "transaction_types", "v4/insider-trading-transaction-type"),
    (InsiderTrading, "insiders_by_symbol", "v4/insider-roaster", req("symbol")),
    (InsiderTrading, "insider_trade_statistics", "v4/insider-roaster-statistics", req("symbol")),
    (InsiderTrading, "cik_mapper", "v4/mapper-cik-name", opt("page"), opt("name")),
    (InsiderTrading, "cik_mapper_by_symbol", "v4/mapper-cik-company/{symbol}"),
    (InsiderTrading, "fail_to_deliver", "v4/fail-to-deliver", req("symbol"), opt("page")),

    // Institutional ownership
    (InstitutionalOwnership, "form_13f", "v3/form-thirteen/{cik}", opt("date")),
    (InstitutionalOwnership, "form_13f_dates", "v3/form-thirteen-date/{cik}"),
    (InstitutionalOwnership, "form_13f_asset_allocation", "v4/13f-asset-allocation", req("date")),
    (InstitutionalOwnership, "institutional_holders_list", "v4/institutional-ownership/list"),
    (InstitutionalOwnership, "search_institutional_holders", "v4/institutional-ownership/name", req("name")),
    (InstitutionalOwnership, "portfolio_holdings_dates", "v4/institutional-ownership/portfolio-date", req("cik")),
    (InstitutionalOwnership, "institutional_holder_rss", "v4/institutional-ownership/rss_feed", opt("page")),
    (InstitutionalOwnership, "institutional_stock_ownership", "v4/institutional-ownership/symbol-ownership", req("symbol"), opt("includeCurrentQuarter")),
    (InstitutionalOwnership, "stock_ownership_by_holders", "v4/institutional-ownership/institutional-holders/symbol-ownership-percent", req("symbol"), req("date"), opt("page")),
    (InstitutionalOwnership, "portfolio_holdings_summary", "v4/institutional-ownership/portfolio-holdings-summary", req("cik"), opt("page")),
    (InstitutionalOwnership, "industry_ownership_summary", "v4/institutional-ownership/industry/portfolio-holdings-summary", req("date"), req("cik"), opt("page")),
    (InstitutionalOwnership, "ownership_by_shares_held", "v4/institutional-ownership/institutional-holders/symbol-ownership", req("symbol"), req("date"), opt("page")),
    (InstitutionalOwnership, "portfolio_composition", "v4/institutional-ownership/portfolio-holdings", req("cik"), req("date"), opt("page")),
    (InstitutionalOwnership, "institutional_holder", "v3/institutional-holder/{symbol}"),

    // IPO calendar
    (IpoCalendar, "ipo_calendar", "v4/ipo-calendar-confirmed", req("from"), req("to")),
    (IpoCalendar, "ipo_prospectus", "v4/ipo-calendar-prospectus", req("from"), req("to")),
    (IpoCalendar, "ipo_calendar_by_symbol", "v3/ipo_calendar", req("symbol"), req("from"), req("to")),

    // Market performance
    (MarketPerformance, "market_index", "v3/quotes/index"),
    (MarketPerformance, "sector_pe_ratio", "v4/sector_price_earning_ratio", req("date"), opt("exchange")),
    (MarketPerformance, "industry_pe_ratio", "v4/industry_price_earning_ratio", req("date"), opt("exchange")),
    (MarketPerformance, "sector_performance", "v3/sectors-performance"),
    (MarketPerformance, "sector_historical_performance", "v3/historical-sectors-performance", opt("limit")),
    (MarketPerformance, "market_biggest_gainers", "v3/stock_market/gainers"),
    (MarketPerformance, "market_biggest_losers", "v3/stock_market/losers"),
    (MarketPerformance, "market_most_active", "v3/stock_market/actives"),
    (MarketPerformance, "analysis_by_symbol", "v4/commitment_of_traders_report_analysis/{symbol}"),
    (MarketPerformance, "analysis_by_dates", "v4/commitment_of_traders_report_analysis", req("from"), req("to")),
    (MarketPerformance, "report_by_symbol", "v4/commitment_of_traders_report/{symbol}"),
    (MarketPerformance, "report_by_dates", "v4/commitment_of_traders_report", req("from"), req("to")),

    // Mergers and acquisitions
    (MergersAndAcquisitions, "mergers_and_acquisitions", "v4/mergers-acquisitions-rss-feed", def("page", "0")),
    (MergersAndAcquisitions, "search_mergers_and_acquisitions", "v4/mergers-acquisitions/search", req("name")),

    // Mutual fund holdings
    (MutualFundHoldings, "portfolio_date", "v4/mutual-fund-holdins/portfolio-date", req("symbol"), opt("cik")),
    (MutualFundHoldings, "holdings", "v4/mutual-fund-holdings", req("symbol"), req("date"), opt("cik")),
    (MutualFundHoldings, "by_name", "v4/mutual-fund-holdings/name", req("name")),
    (MutualFundHoldings, "holder", "v3/mutual-fund-holder/{symbol}"),

    // News
    (News, "fmp_articles", "v3/fmp/articles", def("page", "0"), def("size", "5")),
    (News, "general_news", "v4/general_news", def("page", "0")),
    (News, "stock_news", "v3/stock_news", def("page", "0"), opt("tickers"), def("limit", "50")),
    (News, "stock_news_sentiments_rss_feed", "v4/stock-news-sentiments-rss-feed", def("page", "0")),
    (News, "forex_news", "v4/forex_news", def("page", "0"), opt("symbol")),
    (News, "crypto_news", "v4/crypto_news", def("page", "0"), opt("symbol")),
    (News, "press_releases", "v3/press-releases/{symbol}", def("page", "0")),
    (News, "historical_social_sentiment", "v4/historical/social-sentiment", req("symbol"), def("page", "0")),
    (News, "trending_social_sentiment", "v4/social-sentiments/trending", req("type"), req("source")),
    (News, "social_sentiment_change", "v4/social-sentiments/change", req("type"), req("source")),

    // Price targets
    (PriceTargets, "price_target", "v4/price-target", req("symbol")),
    (PriceTargets, "price_target_summary", "v4/price-target-summary", req("symbol")),
    (PriceTargets, "price_target_by_name", "v4/price-target-analyst-name", req("name")),
    (PriceTargets, "price_target_by_company", "v4/price-target-analyst-company", req("company")),
    (PriceTargets, "price_target_consensus", "v4/price-target-consensus", req("symbol")),
    (PriceTargets, "price_target_rss_feed", "v4/price-target-rss-feed", def("page", "0")),

    // Quotes
    (Quote, "full_quote", "v3/quote/{symbol}"),
    (Quote, "quote_order", "v3/quote-order/{symbol}"),
    (Quote, "simple_quote", "v3/quote-short/{symbol}"),
    (Quote, "otc_quote", "v3/otc/real-time-price/{symbol}"),
    (Quote, "exchange_prices", "v3/quotes/{exchange}"),
    (Quote, "stock_price_change", "v3/stock-price-change/{symbol}"),
    (Quote, "aftermarket_trade", "v4/pre-post-market-trade/{symbol}"),
    (Quote, "aftermarket_quote", "v4/pre-post-market/{symbol}"),
    (Quote, "batch_quote", "v4/batch-pre-post-market/{symbol}"),
    (Quote, "batch_trade", "v4/batch-pre-post-market-trade/{symbol}"),
    (Quote, "last_forex", "v4/forex/last/{pair}"),
    (Quote, "last_crypto", "v4/crypto/last/{pair}"),
    (Quote, "realtime_price", "v3/stock/real-time-price/{symbol}"),
    (Quote, "all_live_prices_short", "v3/stock/real-time-price"),
    (Quote, "live_full_price_with_orders", "v3/stock/full/real-time-price/{symbol}"),
    (Quote, "all_live_full_price_with_orders", "v3/stock/full/real-time-price"),
    (Quote, "forex_prices", "v3/fx/{pair}"),
    (Quote, "all_forex_prices", "v3/fx"),

    // Revenue segmentation
    (SalesRevenueBySegments, "revenue_product_segmentation", "v4/revenue-product-segmentation", req("symbol"), req("period"), def("structure", "flat")),
    (SalesRevenueBySegments, "revenue_geo_segmentation", "v4/revenue-geographic-segmentation", req("symbol"), req("period"), def("structure", "flat")),

    // SEC filings
    (SecFilings, "rss_feed", "v4/rss_feed", def("limit", "100"), opt("type"), opt("from"), opt("to"), opt("isDone")),
    (SecFilings, "rss_feed_v3", "v3/rss_feed", def("page", "0"), def("datatype", "json")),
    (SecFilings, "rss_feed_8k", "v4/rss_feed_8k", def("page", "0"), opt("from"), opt("to"), opt("hasFinancial"), def("limit", "10")),
    (SecFilings, "sec_filings", "v3/sec_filings/{symbol}", def("page", "0"), def("type", "10-K")),
    (SecFilings, "individual_industry_classification", "v4/standard_industrial_classification", req("symbol"), opt("cik"), opt("sicCode")),
    (SecFilings, "all_industry_classification", "v4/standard_industrial_classification/all"),
    (SecFilings, "all_industry_classification_codes", "v4/standard_industrial_classification_list", opt("industryTitle"), opt("sicCode")),

    // Senate and house disclosures
    (Senate, "senate_trading", "v4/senate-trading", req("symbol")),
    (Senate, "senate_trading_rss_feed", "v4/senate-trading-rss-feed", def("page", "0")),
    (Senate, "house_disclosure", "v4/senate-disclosure", req("symbol")),
    (Senate, "house_disclosure_rss_feed", "v4/senate-disclosure-rss-feed", def("page", "0")),

    // Splits
    (Splits, "calendar", "v3/stock_split_calendar", req("from"), req("to")),
    (Splits, "historical", "v3/historical-price-full/stock_split/{symbol}"),

    // Statement analysis
    (StatementAnalysis, "financial_statement_growth", "v3/financial-growth/{symbol}", def("period", "annual"), def("limit", "40")),
    (StatementAnalysis, "balance_sheet_growth", "v3/balance-sheet-statement-growth/{symbol}", def("period", "annual"), def("limit", "40")),
    (StatementAnalysis, "income_growth", "v3/income-statement-growth/{symbol}", def("period", "annual"), def("limit", "40")),
    (StatementAnalysis, "cashflow_growth", "v3/cash-flow-statement-growth/{symbol}", def("period", "annual"), def("limit", "40")),
    (StatementAnalysis, "ratios", "v3/ratios/{symbol}", def("period", "annual"), def("limit", "140")),
    (StatementAnalysis, "ratios_ttm", "v3/ratios-ttm/{symbol}"),
    (StatementAnalysis, "key_metrics", "v3/key-metrics/{symbol}"),
    (StatementAnalysis, "key_metrics_ttm", "v3/key-metrics-ttm/{symbol}"),
    (StatementAnalysis, "financial_score", "v4/score", req("symbol")),
    (StatementAnalysis, "owner_earnings", "v4/owner-earnings", req("symbol")),
    (StatementAnalysis, "enterprise_values", "v4/enterprise-values/{symbol}", def("period", "annual"), def("limit", "140")),

    // Symbol lists
    (StockList, "stock_list", "v3/stock/list"),
    (StockList, "etf_list", "v3/etf/list"),
    (StockList, "financial_statement_symbols_list", "v3/financial-statement-symbol-lists"),
    (StockList, "tradeable_search", "v3/available-traded/list"),
    (StockList, "commitment_of_traders_report_list", "v4/commitment_of_traders_report/list"),
    (StockList, "cik_list", "v3/cik_list"),
    (StockList, "euronext_symbols", "v3/symbol/available-euronext"),
    (StockList, "symbol_changes", "v4/symbol_change"),
    (StockList, "exchange_symbols", "v3/exchange/{exchange}"),
    (StockList, "available_indexes", "v3/symbol/available-indexes"),

    // Technical indicators
    (TechnicalIndicators, "technical_indicator", "v3/technical_indicator/{timeframe}/{symbol}", req("type"), req("period")),

    // Upgrades and downgrades
    (UpgradesDowngrades, "rss_feed", "v4/upgrades-downgrades-rss-feed", def("page", "0")),
    (UpgradesDowngrades, "consensus", "v4/upgrades-downgrades-consensus", req("symbol")),
    (UpgradesDowngrades, "by_company", "v4/upgrades-downgrades-grading-company", req("company")),

    // Valuation
    (Valuation, "discounted_cashflow", "v3/discounted-cash-flow/{symbol}"),
    (Valuation, "advanced_dcf", "v4/advanced_discounted_cash_flow", req("symbol")),
    (Valuation, "levered_dcf", "v4/advanced_levered_discounted_cash_flow", req("symbol")),
    (Valuation, "company_rating", "v3/ratings/{symbol}"),
    (Valuation, "historical_rating", "v3/historical-rating/{symbol}", def("limit", "140")),
];
