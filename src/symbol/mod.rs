//! 符号模块
//!
//! 命令树的基础符号：命令、选项和指令

pub mod command;
pub mod directive;
pub mod option;

// 重新导出主要类型
pub use command::Command;
pub use directive::{
    validate_directive_name, Directive, DirectiveAppender, DirectiveKind, DirectiveList,
};
pub use option::{CliOption, OptionKind};
