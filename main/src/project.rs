// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! The assembled toolchain configuration handed to the compiler, test runner
//! and RPC client.

use crate::{
    constants::{EPHEMERAL_NETWORK, OPTIMIZER_RUNS, SOLC_VERSION, TEST_TIMEOUT_MS},
    env::EnvSnapshot,
    network::{Hardfork, NetworkCatalog, NetworkProfile, SignerPolicy},
};
use eyre::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    pub version: String,
    pub optimizer: OptimizerSettings,
    /// Pinned to the ruleset PolkaVM's eth-rpc emulates.
    pub evm_version: Hardfork,
    /// Compilation through the Yul IR pipeline.
    pub via_ir: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_owned(),
            optimizer: OptimizerSettings {
                enabled: true,
                runs: OPTIMIZER_RUNS,
            },
            evm_version: Hardfork::London,
            via_ir: false,
        }
    }
}

/// Directory roles consumed by the compiler and test runner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    pub sources: PathBuf,
    pub tests: PathBuf,
    pub cache: PathBuf,
    pub artifacts: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            sources: PathBuf::from("./contracts"),
            tests: PathBuf::from("./test"),
            cache: PathBuf::from("./cache"),
            artifacts: PathBuf::from("./artifacts"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunnerSettings {
    pub timeout_ms: u64,
}

impl Default for TestRunnerSettings {
    fn default() -> Self {
        Self {
            timeout_ms: TEST_TIMEOUT_MS,
        }
    }
}

/// Everything the toolchain needs, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolchainConfig {
    pub solidity: CompilerSettings,
    pub default_network: String,
    pub networks: NetworkCatalog,
    pub paths: ProjectPaths,
    pub test_runner: TestRunnerSettings,
}

impl ToolchainConfig {
    pub fn load(env: &EnvSnapshot, policy: SignerPolicy) -> Result<Self> {
        Ok(Self {
            solidity: CompilerSettings::default(),
            default_network: EPHEMERAL_NETWORK.to_owned(),
            networks: NetworkCatalog::build(env, policy)?,
            paths: ProjectPaths::default(),
            test_runner: TestRunnerSettings::default(),
        })
    }

    /// The requested network, or the default one.
    pub fn network(&self, name: Option<&str>) -> Result<&NetworkProfile> {
        self.networks.select(name.unwrap_or(&self.default_network))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_ephemeral_network() {
        let config =
            ToolchainConfig::load(&EnvSnapshot::default(), SignerPolicy::default()).unwrap();
        assert_eq!(config.network(None).unwrap().name, "ephemeral");
        assert_eq!(
            config.network(Some("remote-test")).unwrap().name,
            "remote-test"
        );
        assert!(config.network(Some("mainnet")).is_err());
    }

    #[test]
    fn strict_signers_leave_other_networks_usable() {
        let env = EnvSnapshot {
            polkadot_private_key: Some("0xfeed".into()),
            ..Default::default()
        };
        let config = ToolchainConfig::load(&env, SignerPolicy::RequireExplicit).unwrap();
        assert_eq!(config.network(None).unwrap().name, "ephemeral");
        assert_eq!(config.network(Some("remote-test")).unwrap().accounts.len(), 1);
        assert!(config.network(Some("explicit-local")).is_err());
    }

    #[test]
    fn compiler_targets_london() {
        let solidity = CompilerSettings::default();
        assert_eq!(solidity.version, "0.8.20");
        assert_eq!(solidity.optimizer, OptimizerSettings { enabled: true, runs: 200 });
        assert_eq!(solidity.evm_version, Hardfork::London);
        assert!(!solidity.via_ir);
    }

    #[test]
    fn serializes_without_secrets() {
        let env = EnvSnapshot {
            polka_node: Some("true".into()),
            local_private_key: Some("0xsecretlocal".into()),
            polkadot_private_key: Some("0xsecretremote".into()),
        };
        let config = ToolchainConfig::load(&env, SignerPolicy::default()).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert!(!json.to_string().contains("secret"));
        assert_eq!(json["defaultNetwork"], "ephemeral");
        assert_eq!(json["solidity"]["evmVersion"], "london");
        assert_eq!(json["paths"]["artifacts"], "./artifacts");
        assert_eq!(json["testRunner"]["timeoutMs"], 100_000_000u64);
        assert_eq!(json["networks"][0]["connection"]["kind"], "self-hosted");
        assert_eq!(json["networks"][0]["connection"]["node"]["rpcPort"], 8000);
        assert_eq!(json["networks"][1]["chainId"], 420_420_420u64);
    }
}
