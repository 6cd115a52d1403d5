use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub fulfillment: FulfillmentRules,
}

/// Business rules for the fulfillment engine.
#[derive(Debug, Deserialize, Clone)]
pub struct FulfillmentRules {
    #[serde(default = "default_max_shipment_weight")]
    pub max_shipment_weight_g: u32,
}

fn default_max_shipment_weight() -> u32 {
    1800
}

impl Default for FulfillmentRules {
    fn default() -> Self {
        Self {
            max_shipment_weight_g: default_max_shipment_weight(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Optional file chain: default, per-environment, local override
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `HEMOLINE__FULFILLMENT__MAX_SHIPMENT_WEIGHT_G=2000`
            .add_source(config::Environment::with_prefix("HEMOLINE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_default_cap() {
        let rules = FulfillmentRules::default();
        assert_eq!(rules.max_shipment_weight_g, 1800);
    }
}
