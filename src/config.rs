use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assembly::OverlapPolicy;
use crate::demo;
use crate::error::{GenomeError, GenomeResult};
use crate::evolution::EvolutionParams;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assembly: AssemblyConfig,
    pub evolution: EvolutionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    pub target: String,
    /// Listed in the order `hint` scans them.
    pub fragments: Vec<String>,
    pub overlap_policy: OverlapPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub target: String,
    #[serde(flatten)]
    pub params: EvolutionParams,
    /// Seed of the random source; a fresh one is drawn when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of independent runs used by `trials`.
    pub trials: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            target: demo::ASSEMBLY_TARGET.to_string(),
            fragments: demo::ASSEMBLY_FRAGMENTS.iter().map(|f| f.to_string()).collect(),
            overlap_policy: OverlapPolicy::Proper,
        }
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: demo::EVOLUTION_TARGET.to_string(),
            params: EvolutionParams::default(),
            seed: None,
            trials: 100,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> GenomeResult<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> GenomeResult<Config> {
    toml::from_str(contents)
        .map_err(|e| GenomeError::Config(format!("Failed to parse config: {}", e)))
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> GenomeResult<()> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| GenomeError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
