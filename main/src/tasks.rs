// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Operator tasks, registered by name.

use crate::{
    constants::POLKAVM_INFO_TASK, macros::*, project::ToolchainConfig, util::color::Color,
};
use eyre::{eyre, Result};
use std::io::Write;

type Action = fn(&ToolchainConfig, &mut dyn Write) -> Result<()>;

pub struct Task {
    pub name: &'static str,
    pub description: &'static str,
    action: Action,
}

impl Task {
    pub fn run(&self, cfg: &ToolchainConfig, out: &mut dyn Write) -> Result<()> {
        (self.action)(cfg, out)
    }
}

pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self {
            tasks: vec![Task {
                name: POLKAVM_INFO_TASK,
                description: "Prints PolkaVM information",
                action: polkavm_info,
            }],
        }
    }
}

impl TaskRegistry {
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Runs the task called `name`.
    pub fn run(&self, name: &str, cfg: &ToolchainConfig, out: &mut dyn Write) -> Result<()> {
        let task = self.get(name).ok_or_else(|| eyre!("no task named {name}"))?;
        tracing::debug!(task = task.name, "running task");
        task.run(cfg, out)
    }
}

fn polkavm_info(_cfg: &ToolchainConfig, out: &mut dyn Write) -> Result<()> {
    wgreyln!(out, "PolkaVM-EVM environment is configured")?;
    Ok(())
}
