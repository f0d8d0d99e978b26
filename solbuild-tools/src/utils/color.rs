// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! ANSI coloring for log and terminal output.

use std::fmt::Display;

pub const BLUE: &str = "\x1b[34;1m";
pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const PINK: &str = "\x1b[38;5;161;1m";
pub const RED: &str = "\x1b[31;1m";
pub const YELLOW: &str = "\x1b[33;1m";
pub const CLEAR: &str = "\x1b[0;0m";

pub trait Color {
    fn color(&self, color: &str) -> String;

    fn blue(&self) -> String {
        self.color(BLUE)
    }

    fn grey(&self) -> String {
        self.color(GREY)
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

impl<T: Display + ?Sized> Color for T {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{CLEAR}")
    }
}
