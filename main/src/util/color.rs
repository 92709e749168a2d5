// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

#![allow(unused)]

use std::fmt::Display;

pub const BLUE: &str = "\x1b[34;1m";
pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const PINK: &str = "\x1b[38;5;161;1m";
pub const RED: &str = "\x1b[31;1m";
pub const RESET: &str = "\x1b[0;0m";
pub const YELLOW: &str = "\x1b[33;1m";

pub trait Color {
    fn color(&self, color: &str) -> String;

    fn blue(&self) -> String;
    fn grey(&self) -> String;
    fn lavender(&self) -> String;
    fn mint(&self) -> String;
    fn pink(&self) -> String;
    fn red(&self) -> String;
    fn yellow(&self) -> String;
}

impl<T> Color for T
where
    T: Display,
{
    fn color(&self, color: &str) -> String {
        format!("{}{}{}", color, self, RESET)
    }

    fn blue(&self) -> String {
        self.color(BLUE)
    }
    fn grey(&self) -> String {
        self.color(GREY)
    }
    fn lavender(&self) -> String {
        self.color(LAVENDER)
    }
    fn mint(&self) -> String {
        self.color(MINT)
    }
    fn pink(&self) -> String {
        self.color(PINK)
    }
    fn red(&self) -> String {
        self.color(RED)
    }
    fn yellow(&self) -> String {
        self.color(YELLOW)
    }
}

/// Formats a boolean as a colored yes/no.
pub fn yes_no(value: bool) -> String {
    match value {
        true => "yes".mint(),
        false => "no".pink(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_reset() {
        let text = "dev".mint();
        assert!(text.starts_with(MINT));
        assert!(text.ends_with(RESET));
        assert!(text.contains("dev"));
    }
}
