//! Static mock market data backing the dashboard's price widgets.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

#[derive(Debug, Clone, Serialize)]
pub struct CryptoPrice {
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub current_price: f64,
    pub price_change_24h: f64,
    pub percent_change_24h: f64,
    pub market_cap: i64,
    pub volume_24h: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TradingPair {
    pub symbol: &'static str,
    pub base: &'static str,
    pub quote: &'static str,
    pub price: f64,
    pub change_24h: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketStats {
    pub total_market_cap: i64,
    pub total_volume_24h: i64,
    pub btc_dominance: f64,
    pub eth_dominance: f64,
    pub active_cryptocurrencies: u32,
    pub markets: u32,
}

#[derive(Debug, Serialize)]
pub struct PricesResponse {
    pub data: Vec<CryptoPrice>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct PricesQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

type PriceRow = (&'static str, &'static str, &'static str, f64, f64, f64, i64, i64);

const PRICE_TABLE: &[PriceRow] = &[
    ("bitcoin", "BTC", "Bitcoin", 98500.00, 1250.00, 1.28, 1_950_000_000_000, 45_000_000_000),
    ("ethereum", "ETH", "Ethereum", 3450.00, 85.00, 2.52, 415_000_000_000, 18_000_000_000),
    ("solana", "SOL", "Solana", 195.00, 12.50, 6.85, 92_000_000_000, 5_500_000_000),
    ("binancecoin", "BNB", "BNB", 715.00, -8.50, -1.17, 105_000_000_000, 2_200_000_000),
    ("xrp", "XRP", "XRP", 2.35, 0.18, 8.29, 135_000_000_000, 12_000_000_000),
    ("cardano", "ADA", "Cardano", 1.05, 0.08, 8.25, 37_000_000_000, 1_800_000_000),
    ("dogecoin", "DOGE", "Dogecoin", 0.42, 0.03, 7.69, 62_000_000_000, 4_500_000_000),
    ("avalanche", "AVAX", "Avalanche", 48.50, 3.20, 7.06, 20_000_000_000, 850_000_000),
    ("polkadot", "DOT", "Polkadot", 9.25, 0.45, 5.11, 14_000_000_000, 550_000_000),
    ("chainlink", "LINK", "Chainlink", 24.80, 1.85, 8.06, 15_500_000_000, 1_200_000_000),
];

type PairRow = (&'static str, &'static str, &'static str, f64, f64);

const PAIR_TABLE: &[PairRow] = &[
    ("BTC/USDT", "BTC", "USDT", 98500.00, 1.28),
    ("ETH/USDT", "ETH", "USDT", 3450.00, 2.52),
    ("SOL/USDT", "SOL", "USDT", 195.00, 6.85),
    ("BNB/USDT", "BNB", "USDT", 715.00, -1.17),
    ("XRP/USDT", "XRP", "USDT", 2.35, 8.29),
    ("ADA/USDT", "ADA", "USDT", 1.05, 8.25),
    ("DOGE/USDT", "DOGE", "USDT", 0.42, 7.69),
    ("AVAX/USDT", "AVAX", "USDT", 48.50, 7.06),
    ("DOT/USDT", "DOT", "USDT", 9.25, 5.11),
    ("LINK/USDT", "LINK", "USDT", 24.80, 8.06),
    ("ETH/BTC", "ETH", "BTC", 0.035, 1.24),
    ("SOL/BTC", "SOL", "BTC", 0.00198, 5.57),
];

pub fn mock_prices() -> Vec<CryptoPrice> {
    PRICE_TABLE
        .iter()
        .map(
            |&(id, symbol, name, current_price, price_change_24h, percent_change_24h, market_cap, volume_24h)| {
                CryptoPrice {
                    id,
                    symbol,
                    name,
                    current_price,
                    price_change_24h,
                    percent_change_24h,
                    market_cap,
                    volume_24h,
                }
            },
        )
        .collect()
}

pub fn mock_pairs() -> Vec<TradingPair> {
    PAIR_TABLE
        .iter()
        .map(|&(symbol, base, quote, price, change_24h)| TradingPair {
            symbol,
            base,
            quote,
            price,
            change_24h,
        })
        .collect()
}

pub fn mock_stats() -> MarketStats {
    MarketStats {
        total_market_cap: 3_450_000_000_000,
        total_volume_24h: 125_000_000_000,
        btc_dominance: 56.5,
        eth_dominance: 12.0,
        active_cryptocurrencies: 10_000,
        markets: 850,
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

pub async fn crypto_prices(Query(q): Query<PricesQuery>) -> Json<PricesResponse> {
    let mut data = mock_prices();
    data.truncate(q.limit);
    Json(PricesResponse {
        data,
        timestamp: now_rfc3339(),
    })
}

pub async fn market_stats() -> Json<MarketStats> {
    Json(mock_stats())
}

pub async fn trading_pairs() -> Json<Vec<TradingPair>> {
    Json(mock_pairs())
}
