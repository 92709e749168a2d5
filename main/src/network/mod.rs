// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Network profiles: how the toolchain reaches a chain, and with which
//! execution parameters.

pub mod catalog;
pub mod provisioning;
pub mod resolver;

pub use catalog::{NetworkCatalog, SignerPolicy};
pub use provisioning::{AdapterProvisioning, NodeProvisioning};
pub use resolver::resolve;

use alloy_primitives::{ChainId, B256};
use eyre::{bail, Result};
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use url::{Host, Url};

/// A named configuration selecting how the toolchain reaches a chain.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    pub name: String,
    /// Contract execution runs inside PolkaVM rather than a native EVM.
    pub uses_virtual_machine: bool,
    pub connection: Connection,
    /// Guards against cross-chain replay. `None` defers to the client's default.
    pub chain_id: Option<ChainId>,
    /// Signing keys, in order. May be empty for read-only use.
    pub accounts: Vec<Credential>,
    pub execution: ExecutionPolicy,
    /// `None` defers to the client's default ruleset.
    pub hardfork: Option<Hardfork>,
    /// Per-request RPC timeout. `None` defers to the client's default.
    pub timeout_ms: Option<u64>,
}

/// How the chain behind a profile comes to exist.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Connection {
    /// The toolchain's built-in in-memory chain; nothing to launch or dial.
    InProcess,
    /// A node and an RPC adapter the launcher must spawn for this session.
    SelfHosted {
        node: NodeProvisioning,
        adapter: AdapterProvisioning,
    },
    /// An already-running node. Its lifecycle is not ours.
    Endpoint { url: Url },
}

impl NetworkProfile {
    /// A plain in-memory EVM chain with toolchain defaults.
    pub fn in_process(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uses_virtual_machine: false,
            connection: Connection::InProcess,
            chain_id: None,
            accounts: Vec::new(),
            execution: ExecutionPolicy::default(),
            hardfork: None,
            timeout_ms: None,
        }
    }

    pub fn node_provisioning(&self) -> Option<&NodeProvisioning> {
        match &self.connection {
            Connection::SelfHosted { node, .. } => Some(node),
            _ => None,
        }
    }

    pub fn adapter_provisioning(&self) -> Option<&AdapterProvisioning> {
        match &self.connection {
            Connection::SelfHosted { adapter, .. } => Some(adapter),
            _ => None,
        }
    }

    pub fn endpoint(&self) -> Option<&Url> {
        match &self.connection {
            Connection::Endpoint { url } => Some(url),
            _ => None,
        }
    }

    /// Checks that the profile is internally consistent.
    ///
    /// A VM-backed profile without an endpoint has to be self-hosted, self-hosting
    /// only makes sense for the VM, and a long-lived endpoint needs a chain ID.
    pub fn validate(&self) -> Result<()> {
        let name = &self.name;
        match &self.connection {
            Connection::InProcess if self.uses_virtual_machine => {
                bail!(
                    "network {} targets PolkaVM with neither an endpoint nor a node to launch",
                    name
                )
            }
            Connection::SelfHosted { .. } if !self.uses_virtual_machine => {
                bail!("network {name} provisions a PolkaVM node but does not target PolkaVM")
            }
            Connection::Endpoint { url } if is_long_lived(url) && self.chain_id.is_none() => {
                bail!("network {name} connects to {url} without a chain ID")
            }
            _ => {}
        }
        if !self.execution.gas_multiplier.is_finite() || self.execution.gas_multiplier <= 0.0 {
            bail!(
                "network {} has invalid gas multiplier {}",
                name,
                self.execution.gas_multiplier
            );
        }
        Ok(())
    }
}

/// Endpoints off the loopback interface are treated as shared, persistent networks.
pub fn is_long_lived(url: &Url) -> bool {
    match url.host() {
        Some(Host::Ipv4(ip)) => !ip.is_loopback(),
        Some(Host::Ipv6(ip)) => !ip.is_loopback(),
        Some(Host::Domain(domain)) => domain != "localhost",
        None => false,
    }
}

/// Gas limit and price handling for outgoing transactions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPolicy {
    pub gas: GasSetting,
    pub gas_price: GasSetting,
    /// Applied to gas estimates to absorb estimation error.
    pub gas_multiplier: f64,
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self {
            gas: GasSetting::Auto,
            gas_price: GasSetting::Auto,
            gas_multiplier: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(dead_code)]
pub enum GasSetting {
    #[default]
    Auto,
    Fixed(u64),
}

impl fmt::Display for GasSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Fixed(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for GasSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(value) => serializer.serialize_u64(*value),
        }
    }
}

/// EVM ruleset versions, oldest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Hardfork {
    Frontier,
    Homestead,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    Berlin,
    London,
    Paris,
    Shanghai,
    Cancun,
    Prague,
}

impl Hardfork {
    pub const ALL: [Hardfork; 12] = [
        Self::Frontier,
        Self::Homestead,
        Self::Byzantium,
        Self::Constantinople,
        Self::Petersburg,
        Self::Istanbul,
        Self::Berlin,
        Self::London,
        Self::Paris,
        Self::Shanghai,
        Self::Cancun,
        Self::Prague,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontier => "frontier",
            Self::Homestead => "homestead",
            Self::Byzantium => "byzantium",
            Self::Constantinople => "constantinople",
            Self::Petersburg => "petersburg",
            Self::Istanbul => "istanbul",
            Self::Berlin => "berlin",
            Self::London => "london",
            Self::Paris => "paris",
            Self::Shanghai => "shanghai",
            Self::Cancun => "cancun",
            Self::Prague => "prague",
        }
    }
}

impl fmt::Display for Hardfork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hardfork {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|fork| fork.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| eyre::eyre!("unknown hardfork {s}"))
    }
}

/// A signing key. Never printed; call [`Credential::expose`] to hand it to a signer.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key parses as a 32-byte hex secret.
    pub fn is_well_formed(&self) -> bool {
        B256::from_str(self.expose()).is_ok()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl Serialize for Credential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn endpoint(url: &str) -> NetworkProfile {
        NetworkProfile {
            uses_virtual_machine: true,
            connection: Connection::Endpoint {
                url: Url::parse(url).unwrap(),
            },
            ..NetworkProfile::in_process("test")
        }
    }

    #[test]
    fn vm_without_endpoint_or_provisioning_is_rejected() {
        let profile = NetworkProfile {
            uses_virtual_machine: true,
            ..NetworkProfile::in_process("broken")
        };
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn provisioning_without_vm_is_rejected() {
        let profile = NetworkProfile {
            connection: Connection::SelfHosted {
                node: NodeProvisioning::dev(PathBuf::from("node"), 9000),
                adapter: AdapterProvisioning::dev(PathBuf::from("adapter")),
            },
            ..NetworkProfile::in_process("evm")
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn loopback_endpoint_needs_no_chain_id() {
        assert!(endpoint("http://127.0.0.1:8545").validate().is_ok());
        assert!(endpoint("http://localhost:8545").validate().is_ok());
        assert!(endpoint("http://[::1]:8545").validate().is_ok());
    }

    #[test]
    fn remote_endpoint_needs_chain_id() {
        let mut profile = endpoint("https://rpc.example.org");
        assert!(profile.validate().is_err());
        profile.chain_id = Some(1);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn zero_gas_multiplier_is_rejected() {
        let mut profile = NetworkProfile::in_process("evm");
        profile.execution.gas_multiplier = 0.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn hardfork_parses_case_insensitively() {
        assert_eq!("London".parse::<Hardfork>().unwrap(), Hardfork::London);
        assert!("merge".parse::<Hardfork>().is_err());
        assert!(Hardfork::London < Hardfork::Cancun);
    }

    #[test]
    fn credentials_are_redacted() {
        let key =
            Credential::new("0x5fb92d6e98884f76de468fa3f6278f8807c48bebc13595d45af5bdc4da702133");
        assert!(key.is_well_formed());
        assert!(!format!("{key:?}").contains("5fb9"));
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"<redacted>\"");
        assert!(!Credential::new("not-a-key").is_well_formed());
    }

    #[test]
    fn gas_settings_serialize_like_the_client_expects() {
        let policy = ExecutionPolicy {
            gas: GasSetting::Fixed(3_000_000),
            ..ExecutionPolicy::default()
        };
        let json = serde_json::to_value(policy).unwrap();
        assert_eq!(json["gas"], 3_000_000);
        assert_eq!(json["gasPrice"], "auto");
    }
}
