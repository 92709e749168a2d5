// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use super::{AdapterProvisioning, Connection, NetworkProfile, NodeProvisioning};
use crate::constants::{ADAPTER_BINARY_PATH, EPHEMERAL_NETWORK, NODE_BINARY_PATH, NODE_RPC_PORT};
use std::path::PathBuf;
use tracing::debug;

/// Resolves the ephemeral network from the raw mode-selection flag.
///
/// Only the exact string `"true"` opts into a self-hosted PolkaVM node; any
/// other value, including `"1"` and `"TRUE"`, yields the plain in-memory chain.
pub fn resolve(flag: Option<&str>) -> NetworkProfile {
    if flag != Some("true") {
        debug!(?flag, "ephemeral network uses the in-memory EVM");
        return NetworkProfile::in_process(EPHEMERAL_NETWORK);
    }
    debug!("ephemeral network uses a self-hosted PolkaVM node");
    NetworkProfile {
        uses_virtual_machine: true,
        connection: Connection::SelfHosted {
            node: NodeProvisioning::dev(PathBuf::from(NODE_BINARY_PATH), NODE_RPC_PORT),
            adapter: AdapterProvisioning::dev(PathBuf::from(ADAPTER_BINARY_PATH)),
        },
        ..NetworkProfile::in_process(EPHEMERAL_NETWORK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_true_selects_polkavm() {
        let profile = resolve(Some("true"));
        assert!(profile.uses_virtual_machine);

        let node = profile.node_provisioning().unwrap();
        assert_eq!(node.rpc_port, 8000);
        assert!(node.dev);
        assert_eq!(node.binary_path, PathBuf::from("./bin/substrate-node"));

        let adapter = profile.adapter_provisioning().unwrap();
        assert!(adapter.dev);
        assert_eq!(adapter.binary_path, PathBuf::from("./bin/eth-rpc"));

        assert!(profile.endpoint().is_none());
        profile.validate().unwrap();
    }

    #[test]
    fn anything_else_selects_plain_evm() {
        let flags = [
            None,
            Some(""),
            Some("1"),
            Some("TRUE"),
            Some("True"),
            Some(" true"),
            Some("yes"),
            Some("other"),
        ];
        for flag in flags {
            let profile = resolve(flag);
            assert!(!profile.uses_virtual_machine, "{flag:?}");
            assert!(profile.node_provisioning().is_none(), "{flag:?}");
            assert!(profile.adapter_provisioning().is_none(), "{flag:?}");
            profile.validate().unwrap();
        }
    }

    #[test]
    fn unset_matches_arbitrary_value() {
        assert_eq!(resolve(None), resolve(Some("other")));
        assert_eq!(resolve(None).name, "ephemeral");
    }
}
