// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use super::{
    resolve, Connection, Credential, ExecutionPolicy, GasSetting, Hardfork, NetworkProfile,
};
use crate::{
    constants::{
        EXPLICIT_LOCAL_NETWORK, LOCAL_FALLBACK_PRIVATE_KEY, LOCAL_NODE_CHAIN_ID,
        LOCAL_NODE_ENDPOINT, LOCAL_NODE_GAS_MULTIPLIER, LOCAL_NODE_TIMEOUT_MS,
        LOCAL_PRIVATE_KEY_ENV, PASSET_HUB_CHAIN_ID, PASSET_HUB_ENDPOINT, REMOTE_TEST_NETWORK,
    },
    env::EnvSnapshot,
};
use eyre::{bail, eyre, Result, WrapErr};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// What to do when the explicit local network has no signer override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignerPolicy {
    /// Sign with the well-known dev key.
    #[default]
    AllowDevFallback,
    /// Leave the network without a signer and refuse to select it.
    RequireExplicit,
}

/// The named network profiles, fixed for the life of the process.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NetworkCatalog {
    profiles: Vec<NetworkProfile>,
    /// Networks whose required signer is missing, with the variable that supplies it.
    #[serde(skip)]
    missing_signers: Vec<(String, &'static str)>,
}

impl NetworkCatalog {
    /// Builds the catalog from the captured environment and checks every entry.
    pub fn build(env: &EnvSnapshot, policy: SignerPolicy) -> Result<Self> {
        let mut missing_signers = Vec::new();
        let local_key = local_signer(env, policy);
        if local_key.is_none() {
            missing_signers.push((EXPLICIT_LOCAL_NETWORK.to_owned(), LOCAL_PRIVATE_KEY_ENV));
        }
        let profiles = vec![
            resolve(env.polka_node.as_deref()),
            explicit_local(local_key)?,
            remote_test(env)?,
        ];
        for profile in &profiles {
            profile.validate()?;
            for (i, account) in profile.accounts.iter().enumerate() {
                if !account.is_well_formed() {
                    warn!(network = %profile.name, index = i, "account is not a 32-byte hex key");
                }
            }
        }
        debug!(networks = profiles.len(), "network catalog ready");
        Ok(Self {
            profiles,
            missing_signers,
        })
    }

    pub fn get(&self, name: &str) -> Option<&NetworkProfile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    /// Like [`NetworkCatalog::get`], but an unknown name, or a network whose
    /// required signer is missing, is an error.
    pub fn select(&self, name: &str) -> Result<&NetworkProfile> {
        if let Some((_, var)) = self.missing_signers.iter().find(|(network, _)| network == name) {
            bail!("{} must be set to sign on {}", var, name);
        }
        self.get(name).ok_or_else(|| {
            eyre!(
                "unknown network {name}, expected one of: {}",
                self.names().collect::<Vec<_>>().join(", ")
            )
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|profile| profile.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.profiles.iter()
    }
}

fn local_signer(env: &EnvSnapshot, policy: SignerPolicy) -> Option<&str> {
    match (env.local_signer(), policy) {
        (Some(key), _) => Some(key),
        (None, SignerPolicy::AllowDevFallback) => {
            warn!(
                network = EXPLICIT_LOCAL_NETWORK,
                "{LOCAL_PRIVATE_KEY_ENV} is not set, signing with the well-known dev key"
            );
            Some(LOCAL_FALLBACK_PRIVATE_KEY)
        }
        (None, SignerPolicy::RequireExplicit) => None,
    }
}

fn explicit_local(key: Option<&str>) -> Result<NetworkProfile> {
    Ok(NetworkProfile {
        name: EXPLICIT_LOCAL_NETWORK.to_owned(),
        uses_virtual_machine: true,
        connection: Connection::Endpoint {
            url: parse_endpoint(LOCAL_NODE_ENDPOINT)?,
        },
        chain_id: Some(LOCAL_NODE_CHAIN_ID),
        accounts: key.map(Credential::new).into_iter().collect(),
        execution: ExecutionPolicy {
            gas: GasSetting::Auto,
            gas_price: GasSetting::Auto,
            gas_multiplier: LOCAL_NODE_GAS_MULTIPLIER,
        },
        hardfork: Some(Hardfork::London),
        timeout_ms: Some(LOCAL_NODE_TIMEOUT_MS),
    })
}

fn remote_test(env: &EnvSnapshot) -> Result<NetworkProfile> {
    Ok(NetworkProfile {
        name: REMOTE_TEST_NETWORK.to_owned(),
        uses_virtual_machine: true,
        connection: Connection::Endpoint {
            url: parse_endpoint(PASSET_HUB_ENDPOINT)?,
        },
        chain_id: Some(PASSET_HUB_CHAIN_ID),
        accounts: env.remote_signer().map(Credential::new).into_iter().collect(),
        ..NetworkProfile::in_process(REMOTE_TEST_NETWORK)
    })
}

fn parse_endpoint(url: &str) -> Result<Url> {
    Url::parse(url).wrap_err_with(|| format!("invalid endpoint {url}"))
}
