use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::network::NetworkConfig;

pub mod lookup;
pub mod network;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub lookup: LookupConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            lookup: LookupConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
