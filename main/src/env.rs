// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! One-shot capture of the process environment.
//!
//! Everything downstream works from an [`EnvSnapshot`]; the process
//! environment is read exactly once, in [`EnvSnapshot::from_process`].

use crate::constants::{LOCAL_PRIVATE_KEY_ENV, POLKADOT_PRIVATE_KEY_ENV, POLKA_NODE_ENV};
use std::env;
use tracing::debug;

/// The environment variables the toolchain configuration depends on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Raw value of the mode-selection flag.
    pub polka_node: Option<String>,
    /// Signing key override for the explicit local network.
    pub local_private_key: Option<String>,
    /// Signing key for the remote test network.
    pub polkadot_private_key: Option<String>,
}

impl EnvSnapshot {
    pub fn from_process() -> Self {
        let snapshot = Self {
            polka_node: read(POLKA_NODE_ENV),
            local_private_key: read(LOCAL_PRIVATE_KEY_ENV),
            polkadot_private_key: read(POLKADOT_PRIVATE_KEY_ENV),
        };
        debug!(
            polka_node = ?snapshot.polka_node,
            local_signer = snapshot.local_private_key.is_some(),
            remote_signer = snapshot.polkadot_private_key.is_some(),
            "captured environment"
        );
        snapshot
    }

    /// The local signer override, treating an empty value as unset.
    pub fn local_signer(&self) -> Option<&str> {
        non_empty(&self.local_private_key)
    }

    /// The remote signer, treating an empty value as unset.
    pub fn remote_signer(&self) -> Option<&str> {
        non_empty(&self.polkadot_private_key)
    }
}

// Non-unicode values are treated as unset.
fn read(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        for key in [POLKA_NODE_ENV, LOCAL_PRIVATE_KEY_ENV, POLKADOT_PRIVATE_KEY_ENV] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn captures_unset_variables_as_none() {
        clear();
        assert_eq!(EnvSnapshot::from_process(), EnvSnapshot::default());
    }

    #[test]
    #[serial]
    fn captures_set_variables_verbatim() {
        clear();
        env::set_var(POLKA_NODE_ENV, "TRUE");
        env::set_var(POLKADOT_PRIVATE_KEY_ENV, "0xabc");
        let snapshot = EnvSnapshot::from_process();
        clear();

        assert_eq!(snapshot.polka_node.as_deref(), Some("TRUE"));
        assert_eq!(snapshot.local_private_key, None);
        assert_eq!(snapshot.remote_signer(), Some("0xabc"));
    }

    #[test]
    fn empty_signers_count_as_unset() {
        let snapshot = EnvSnapshot {
            polka_node: Some(String::new()),
            local_private_key: Some(String::new()),
            polkadot_private_key: Some(String::new()),
        };
        assert_eq!(snapshot.local_signer(), None);
        assert_eq!(snapshot.remote_signer(), None);
    }
}
