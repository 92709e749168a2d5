// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Declarations of the processes a self-hosted PolkaVM network needs.
//!
//! These records are consumed by whatever launches the node and adapter; this
//! crate builds the command lines but never spawns them.

use crate::util::sys;
use serde::Serialize;
use std::{path::PathBuf, process::Command};

/// A substrate node hosting the PolkaVM runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProvisioning {
    pub binary_path: PathBuf,
    pub rpc_port: u16,
    /// Run with development chain spec and relaxed defaults.
    pub dev: bool,
}

impl NodeProvisioning {
    pub fn dev(binary_path: PathBuf, rpc_port: u16) -> Self {
        Self {
            binary_path,
            rpc_port,
            dev: true,
        }
    }

    /// The command a launcher would run to start the node.
    pub fn command(&self) -> Command {
        let mut cmd = sys::new_command(&self.binary_path);
        if self.dev {
            cmd.arg("--dev");
        }
        cmd.arg("--rpc-port").arg(self.rpc_port.to_string());
        cmd
    }

    /// Websocket URL the adapter uses to reach this node.
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}", self.rpc_port)
    }
}

/// The eth-rpc adapter exposing an Ethereum JSON-RPC interface in front of the node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterProvisioning {
    pub binary_path: PathBuf,
    pub dev: bool,
}

impl AdapterProvisioning {
    pub fn dev(binary_path: PathBuf) -> Self {
        Self {
            binary_path,
            dev: true,
        }
    }

    /// The command a launcher would run to start the adapter in front of `node`.
    pub fn command(&self, node: &NodeProvisioning) -> Command {
        let mut cmd = sys::new_command(&self.binary_path);
        if self.dev {
            cmd.arg("--dev");
        }
        cmd.arg("--node-rpc-url").arg(node.ws_url());
        cmd
    }
}
