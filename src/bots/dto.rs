use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::bots::repo::BotStatus;

/// Body of `POST /api/bots`.
#[derive(Debug, Deserialize)]
pub struct CreateBotRequest {
    pub name: String,
    pub strategy: String,
    pub trading_pair: String,
    pub exchange: String,
    #[serde(default = "default_investment")]
    pub initial_investment: Decimal,
    #[serde(default = "default_virtual")]
    pub is_virtual: bool,
    #[serde(default)]
    pub settings: Map<String, Value>,
}

fn default_investment() -> Decimal {
    Decimal::new(1000, 0)
}

fn default_virtual() -> bool {
    true
}

/// Body of `PUT /api/bots/{id}`; every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBotRequest {
    pub name: Option<String>,
    pub status: Option<BotStatus>,
    pub settings: Option<Map<String, Value>>,
}

impl UpdateBotRequest {
    /// An empty name or an empty settings object counts as omitted, so a
    /// `{"settings": {}}` patch leaves the stored settings untouched.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|n| !n.is_empty()),
            status: self.status,
            settings: self.settings.filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_fills_the_defaults() {
        let req: CreateBotRequest = serde_json::from_str(
            r#"{"name":"Bot1","strategy":"grid","trading_pair":"BTC/USDT","exchange":"binance"}"#,
        )
        .expect("body");
        assert_eq!(req.initial_investment, Decimal::new(1000, 0));
        assert!(req.is_virtual);
        assert!(req.settings.is_empty());
    }

    #[test]
    fn create_request_accepts_explicit_values() {
        let req: CreateBotRequest = serde_json::from_str(
            r#"{"name":"Bot1","strategy":"dca","trading_pair":"ETH/USDT","exchange":"kraken",
                "initial_investment":250.5,"is_virtual":false,"settings":{"interval":"1h"}}"#,
        )
        .expect("body");
        assert_eq!(req.initial_investment, Decimal::new(2505, 1));
        assert!(!req.is_virtual);
        assert_eq!(req.settings["interval"], "1h");
    }

    #[test]
    fn update_request_parses_partial_bodies() {
        let req: UpdateBotRequest =
            serde_json::from_str(r#"{"status":"running"}"#).expect("body");
        assert!(req.name.is_none());
        assert_eq!(req.status, Some(BotStatus::Running));
        assert!(req.settings.is_none());
    }

    #[test]
    fn normalization_drops_empty_name_and_settings() {
        let req: UpdateBotRequest =
            serde_json::from_str(r#"{"name":"","settings":{}}"#).expect("body");
        let patch = req.normalized();
        assert!(patch.name.is_none());
        assert!(patch.settings.is_none());
    }

    #[test]
    fn normalization_keeps_populated_fields() {
        let req: UpdateBotRequest =
            serde_json::from_str(r#"{"name":"Renamed","settings":{"grid_levels":12}}"#)
                .expect("body");
        let patch = req.normalized();
        assert_eq!(patch.name.as_deref(), Some("Renamed"));
        assert_eq!(patch.settings.expect("settings")["grid_levels"], 12);
    }
}
