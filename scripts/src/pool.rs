//! Configuration of a Snatch prize pool
//!
//! A pool is described in TOML with token amounts and rates given in ether
//! units, e.g. `single_draw_price = "60"` or `rare_prize_init_rate = "0.00001"`.
//! Tokens are given either as addresses or as keys of the deployments file.

use std::{fs, path::Path};

use alloy::primitives::utils::parse_ether;
use alloy_primitives::{Address, U256};
use serde::Deserialize;

use crate::{
    constants::{PAYMENT_TOKEN_KEY, RARE_PRIZE_TOKEN_KEY},
    deployments::resolve_address,
    errors::ScriptError,
    solidity::ISnatch::PoolConfig,
};

/// A prize drawn when the rare prize is not hit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalPrize {
    /// The prize token
    pub token: String,
    /// The amount of the prize token paid out
    pub value: String,
    /// The probability of drawing this prize, as a fraction of one ether
    pub rate: String,
}

/// The settings of a Snatch prize pool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolSettings {
    /// The token draws are paid in
    pub payment_token: String,
    /// The price of a single draw
    pub single_draw_price: String,
    /// The price of a batch of draws
    pub batch_draw_price: String,
    /// The number of draws in a batch
    pub batch_draw_size: u64,
    /// The token of the rare prize
    pub rare_prize_token: String,
    /// The initial rate at which the rare prize is drawn
    pub rare_prize_init_rate: String,
    /// The average rate at which the rare prize is drawn
    pub rare_prize_avg_rate: String,
    /// The amount of the rare prize token paid out
    pub rare_prize_value: String,
    /// The number of draws after which the rare prize is guaranteed
    pub rare_prize_max_rp: u64,
    /// The normal prizes
    pub normal_prizes: Vec<NormalPrize>,
}

impl Default for PoolSettings {
    /// The pool created on the first Snatch deployment
    fn default() -> Self {
        let normal_prize = |value: &str, rate: &str| NormalPrize {
            token: PAYMENT_TOKEN_KEY.to_string(),
            value: value.to_string(),
            rate: rate.to_string(),
        };

        Self {
            payment_token: PAYMENT_TOKEN_KEY.to_string(),
            single_draw_price: "60".to_string(),
            batch_draw_price: "270".to_string(),
            batch_draw_size: 5,
            rare_prize_token: RARE_PRIZE_TOKEN_KEY.to_string(),
            rare_prize_init_rate: "0.00001".to_string(),
            rare_prize_avg_rate: "0.008".to_string(),
            rare_prize_value: "1".to_string(),
            rare_prize_max_rp: 200,
            normal_prizes: vec![
                normal_prize("10", "0.4"),
                normal_prize("20", "0.2"),
                normal_prize("30", "0.1"),
            ],
        }
    }
}

/// Parse an ether-denominated amount into wei
fn parse_amount(field: &str, value: &str) -> Result<U256, ScriptError> {
    parse_ether(value)
        .map_err(|e| ScriptError::Config(format!("invalid {field} `{value}`: {e}")))
}

/// Parse a rate, which must not exceed one ether
fn parse_rate(field: &str, value: &str) -> Result<U256, ScriptError> {
    let rate = parse_amount(field, value)?;
    let one = parse_amount(field, "1")?;
    if rate > one {
        return Err(ScriptError::Config(format!(
            "{field} `{value}` is greater than 1"
        )));
    }
    Ok(rate)
}

impl PoolSettings {
    /// Load pool settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ScriptError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    /// Parse pool settings from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ScriptError> {
        toml::from_str(contents).map_err(|e| ScriptError::Config(e.to_string()))
    }

    /// The token draws are paid in
    pub fn payment_token(&self, deployments_path: &Path) -> Result<Address, ScriptError> {
        resolve_address(&self.payment_token, deployments_path)
    }

    /// Validate the settings and convert them into the `createPool` argument
    pub fn to_pool_config(&self, deployments_path: &Path) -> Result<PoolConfig, ScriptError> {
        if self.batch_draw_size == 0 {
            return Err(ScriptError::Config(
                "batch_draw_size must be positive".to_string(),
            ));
        }
        if self.normal_prizes.is_empty() {
            return Err(ScriptError::Config(
                "at least one normal prize is required".to_string(),
            ));
        }

        let mut normal_prizes_token = Vec::with_capacity(self.normal_prizes.len());
        let mut normal_prizes_value = Vec::with_capacity(self.normal_prizes.len());
        let mut normal_prizes_rate = Vec::with_capacity(self.normal_prizes.len());
        for prize in &self.normal_prizes {
            normal_prizes_token.push(resolve_address(&prize.token, deployments_path)?);
            normal_prizes_value.push(parse_amount("normal prize value", &prize.value)?);
            normal_prizes_rate.push(parse_rate("normal prize rate", &prize.rate)?);
        }

        Ok(PoolConfig {
            paymentToken: self.payment_token(deployments_path)?,
            singleDrawPrice: parse_amount("single_draw_price", &self.single_draw_price)?,
            batchDrawPrice: parse_amount("batch_draw_price", &self.batch_draw_price)?,
            batchDrawSize: U256::from(self.batch_draw_size),
            rarePrizeToken: resolve_address(&self.rare_prize_token, deployments_path)?,
            rarePrizeInitRate: parse_rate("rare_prize_init_rate", &self.rare_prize_init_rate)?,
            rarePrizeAvgRate: parse_rate("rare_prize_avg_rate", &self.rare_prize_avg_rate)?,
            rarePrizeValue: parse_amount("rare_prize_value", &self.rare_prize_value)?,
            rarePrizeMaxRP: U256::from(self.rare_prize_max_rp),
            normalPrizesToken: normal_prizes_token,
            normalPrizesValue: normal_prizes_value,
            normalPrizesRate: normal_prizes_rate,
        })
    }
}
