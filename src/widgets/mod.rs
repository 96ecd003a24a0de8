#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub use self::{
    command_bar::{CommandBar, PanelCommand},
    help_dialog::HelpDialog,
    tree::TreeView,
};

mod command_bar;
mod help_dialog;
mod tree;
