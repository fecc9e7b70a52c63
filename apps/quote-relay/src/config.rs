use std::{borrow::Cow, fs::File, net::SocketAddr, path::Path};

use anyhow::Context;
use serde::{de, Deserialize, Deserializer};
use stock_data_providers::currency_feed::config::RefreshConfig;
use url::Url;

const DEFAULT_REST_URL: &str = "https://api.hitbtc.com";
const DEFAULT_WS_URL: &str = "wss://api.hitbtc.com/api/2/ws";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    #[serde(default = "default_rest_url", deserialize_with = "deserialize_url")]
    pub rest_url: Url,
    #[serde(default = "default_ws_url", deserialize_with = "deserialize_url")]
    pub ws_url: Url,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

impl Config {
    /// Read the YAML file if one is given, otherwise use the built-in values.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let file =
            File::open(path).with_context(|| format!("Cannot open config {}", path.display()))?;
        serde_yaml::from_reader(file).with_context(|| format!("Invalid config {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            symbols: default_symbols(),
            rest_url: default_rest_url(),
            ws_url: default_ws_url(),
            refresh: RefreshConfig::default(),
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 9999))
}

fn default_symbols() -> Vec<String> {
    vec!["BTCUSD".to_string(), "ETHBTC".to_string()]
}

fn default_rest_url() -> Url {
    Url::parse(DEFAULT_REST_URL).expect("default rest url is valid")
}

fn default_ws_url() -> Url {
    Url::parse(DEFAULT_WS_URL).expect("default ws url is valid")
}

fn deserialize_url<'de, D: Deserializer<'de>>(deser: D) -> Result<Url, D::Error> {
    let s = Cow::<str>::deserialize(deser)?;
    s.as_ref().parse().map_err(de::Error::custom)
}
