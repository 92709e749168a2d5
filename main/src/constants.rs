// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use alloy_primitives::ChainId;

/// Environment flag that switches the ephemeral network onto a self-hosted PolkaVM node.
pub const POLKA_NODE_ENV: &str = "POLKA_NODE";

/// Environment variable overriding the signing key of the explicit local network.
pub const LOCAL_PRIVATE_KEY_ENV: &str = "LOCAL_PRIVATE_KEY";

/// Environment variable holding the signing key of the remote test network.
pub const POLKADOT_PRIVATE_KEY_ENV: &str = "POLKADOT_PRIVATE_KEY";

/// Network names, in catalog order.
pub const EPHEMERAL_NETWORK: &str = "ephemeral";
pub const EXPLICIT_LOCAL_NETWORK: &str = "explicit-local";
pub const REMOTE_TEST_NETWORK: &str = "remote-test";

/// Path of the substrate node binary spawned for the ephemeral PolkaVM network.
pub const NODE_BINARY_PATH: &str = "./bin/substrate-node";

/// Path of the eth-rpc adapter binary translating Ethereum JSON-RPC to the node.
pub const ADAPTER_BINARY_PATH: &str = "./bin/eth-rpc";

/// RPC port of the self-hosted substrate node.
pub const NODE_RPC_PORT: u16 = 8000;

/// Endpoint of an already-running local PolkaVM node behind its eth-rpc adapter.
pub const LOCAL_NODE_ENDPOINT: &str = "http://127.0.0.1:8545";

/// Chain ID reported by a local PolkaVM dev node.
pub const LOCAL_NODE_CHAIN_ID: ChainId = 420_420_420;

/// Well-known dev account key used when no local signer override is set.
pub const LOCAL_FALLBACK_PRIVATE_KEY: &str =
    "0x5fb92d6e98884f76de468fa3f6278f8807c48bebc13595d45af5bdc4da702133";

/// RPC timeout for the local node, in milliseconds.
pub const LOCAL_NODE_TIMEOUT_MS: u64 = 60_000;

/// Multiplier applied to gas estimates on the local node.
pub const LOCAL_NODE_GAS_MULTIPLIER: f64 = 2.0;

/// Public eth-rpc endpoint of the Passet Hub test network.
pub const PASSET_HUB_ENDPOINT: &str = "https://testnet-passet-hub-eth-rpc.polkadot.io";

/// Chain ID of the Passet Hub test network.
pub const PASSET_HUB_CHAIN_ID: ChainId = 420_420_422;

/// Solidity compiler release the contracts are built with.
pub const SOLC_VERSION: &str = "0.8.20";

/// Optimizer runs passed to solc.
pub const OPTIMIZER_RUNS: u32 = 200;

/// Per-test timeout handed to the test runner, in milliseconds.
pub const TEST_TIMEOUT_MS: u64 = 100_000_000;

/// Name of the diagnostic task confirming the PolkaVM setup.
pub const POLKAVM_INFO_TASK: &str = "polkavm-info";
