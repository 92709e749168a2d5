// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use clap::{Args, Parser, Subcommand};
use eyre::{eyre, Context, Result};
use macros::*;
use network::{Connection, NetworkProfile, SignerPolicy};
use project::ToolchainConfig;
use std::io;
use tasks::TaskRegistry;
use tracing_subscriber::EnvFilter;
use util::{
    color::{yes_no, Color},
    sys::command_line,
};

mod constants;
mod env;
mod macros;
mod network;
mod project;
mod tasks;
mod util;

#[derive(Parser, Debug)]
#[command(name = "polkavm")]
#[command(bin_name = "cargo polkavm")]
#[command(
    about = "Network profiles and provisioning for PolkaVM contract toolchains",
    long_about = None
)]
#[command(propagate_version = true)]
#[command(version)]
struct Opts {
    #[command(flatten)]
    common_cfg: CommonConfig,
    #[command(subcommand)]
    command: Apis,
}

#[derive(Args, Clone, Debug)]
struct CommonConfig {
    /// Network to operate on. Defaults to the ephemeral network.
    #[arg(long, global = true)]
    network: Option<String>,
    /// Fail instead of signing with the well-known dev key.
    #[arg(long, global = true)]
    require_signer: bool,
    /// Print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Apis {
    /// List the configured networks.
    Networks {
        #[arg(long)]
        json: bool,
    },
    /// Show a single network. Uses --network when no name is given.
    Network {
        name: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the full resolved toolchain configuration as JSON.
    Config,
    /// Print the processes a launcher has to start for the selected network.
    Plan,
    /// List the registered tasks.
    Tasks,
    /// Run a registered task by name.
    Run { task: String },
    #[command(name = "polkavm-info", hide = true)]
    PolkavmInfo,
}

impl CommonConfig {
    fn signer_policy(&self) -> SignerPolicy {
        match self.require_signer {
            true => SignerPolicy::RequireExplicit,
            false => SignerPolicy::AllowDevFallback,
        }
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().peekable();
    let bin = args.next().unwrap_or_default();
    // cargo passes the subcommand name as the first argument.
    if args.peek().map(String::as_str) == Some("polkavm") {
        args.next();
    }
    let opts = Opts::parse_from(std::iter::once(bin).chain(args));
    init_tracing(opts.common_cfg.verbose);
    main_impl(opts)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn main_impl(args: Opts) -> Result<()> {
    macro_rules! run {
        ($expr:expr, $($msg:expr),+) => {
            $expr.wrap_err_with(|| eyre!($($msg),+))?
        };
    }

    let snapshot = env::EnvSnapshot::from_process();
    let cfg = run!(
        ToolchainConfig::load(&snapshot, args.common_cfg.signer_policy()),
        "failed to load toolchain config"
    );
    let selected = args.common_cfg.network.as_deref();

    match args.command {
        Apis::Networks { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&cfg.networks)?);
            } else {
                for profile in cfg.networks.iter() {
                    let marker = match profile.name == cfg.default_network {
                        true => " (default)".grey(),
                        false => String::new(),
                    };
                    println!("{}{marker}", profile.name.mint());
                }
            }
        }
        Apis::Network { name, json } => {
            let profile = run!(
                cfg.network(name.as_deref().or(selected)),
                "failed to select network"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(profile)?);
            } else {
                print_profile(profile);
            }
        }
        Apis::Config => {
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
        Apis::Plan => {
            let profile = run!(cfg.network(selected), "failed to select network");
            print_plan(profile);
        }
        Apis::Tasks => {
            for task in TaskRegistry::default().iter() {
                println!("{}  {}", task.name.mint(), task.description.grey());
            }
        }
        Apis::Run { task } => {
            run!(
                TaskRegistry::default().run(&task, &cfg, &mut io::stdout()),
                "failed to run task {}",
                task
            );
        }
        Apis::PolkavmInfo => {
            run!(
                TaskRegistry::default().run(constants::POLKAVM_INFO_TASK, &cfg, &mut io::stdout()),
                "failed to run task {}",
                constants::POLKAVM_INFO_TASK
            );
        }
    }
    Ok(())
}

fn print_profile(profile: &NetworkProfile) {
    println!("{}", profile.name.mint());
    greyln!("polkavm: {}", yes_no(profile.uses_virtual_machine));
    if let Some(url) = profile.endpoint() {
        greyln!("endpoint: {}", url.lavender());
    }
    if let Some(node) = profile.node_provisioning() {
        greyln!(
            "node: {} (rpc port {}, dev {})",
            node.binary_path.to_string_lossy().lavender(),
            node.rpc_port,
            yes_no(node.dev)
        );
    }
    if let Some(adapter) = profile.adapter_provisioning() {
        greyln!(
            "adapter: {} (dev {})",
            adapter.binary_path.to_string_lossy().lavender(),
            yes_no(adapter.dev)
        );
    }
    if matches!(profile.connection, Connection::InProcess) {
        greyln!("connection: {}", "in-process".lavender());
    }
    if let Some(chain_id) = profile.chain_id {
        greyln!("chain id: {}", chain_id.lavender());
    }
    match profile.accounts.len() {
        0 => greyln!("accounts: {}", "none (read-only)".yellow()),
        n => greyln!("accounts: {}", n.lavender()),
    }
    let policy = &profile.execution;
    greyln!(
        "gas: {}, gas price: {}, multiplier: {}",
        policy.gas,
        policy.gas_price,
        policy.gas_multiplier
    );
    if let Some(hardfork) = profile.hardfork {
        greyln!("hardfork: {}", hardfork.lavender());
    }
    if let Some(timeout) = profile.timeout_ms {
        greyln!("timeout: {}ms", timeout);
    }
}

fn print_plan(profile: &NetworkProfile) {
    match &profile.connection {
        Connection::SelfHosted { node, adapter } => {
            greyln!("{} requires launching:", profile.name.mint());
            println!("{}", command_line(&node.command()));
            println!("{}", command_line(&adapter.command(node)));
        }
        Connection::Endpoint { url } => {
            egreyln!("{} connects to {}, nothing to launch", profile.name.mint(), url.lavender());
        }
        Connection::InProcess => {
            egreyln!("{} runs in-process, nothing to launch", profile.name.mint());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_network_after_subcommand() {
        let opts =
            Opts::try_parse_from(["cargo-polkavm", "plan", "--network", "explicit-local"]).unwrap();
        assert_eq!(opts.common_cfg.network.as_deref(), Some("explicit-local"));
        assert!(matches!(opts.command, Apis::Plan));
    }

    #[test]
    fn require_signer_selects_strict_policy() {
        let opts = Opts::try_parse_from(["cargo-polkavm", "--require-signer", "networks"]).unwrap();
        assert_eq!(opts.common_cfg.signer_policy(), SignerPolicy::RequireExplicit);
    }

    #[test]
    fn run_needs_a_task_name() {
        assert!(Opts::try_parse_from(["cargo-polkavm", "run"]).is_err());
        let opts = Opts::try_parse_from(["cargo-polkavm", "run", "polkavm-info"]).unwrap();
        assert!(matches!(opts.command, Apis::Run { ref task } if task == "polkavm-info"));
    }

    #[test]
    fn polkavm_info_is_invokable_directly() {
        let opts = Opts::try_parse_from(["cargo-polkavm", "polkavm-info"]).unwrap();
        assert!(matches!(opts.command, Apis::PolkavmInfo));
    }
}
