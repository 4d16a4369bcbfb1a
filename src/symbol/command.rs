//! 命令定义
//!
//! 通用的命令节点：名称、描述、大小写敏感性、有序的选项和子命令。

use crate::error::SymbolError;
use crate::symbol::option::{validate_token, CliOption};
use serde::Serialize;

/// 命令
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    name: String,
    description: String,
    case_sensitive: bool,
    options: Vec<CliOption>,
    subcommands: Vec<Command>,
}

impl Command {
    /// 创建命令，名称不能为空或包含空白字符
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        case_sensitive: bool,
    ) -> Result<Self, SymbolError> {
        let name = name.into();
        validate_token(&name)?;
        Ok(Self::unchecked(name, description.into(), case_sensitive))
    }

    /// 不校验名称地创建命令
    ///
    /// 根命令的名称来自可执行文件，可能为空，由调用方负责。
    pub(crate) fn unchecked(name: String, description: String, case_sensitive: bool) -> Self {
        Self {
            name,
            description,
            case_sensitive,
            options: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn options(&self) -> &[CliOption] {
        &self.options
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    /// 追加选项
    pub fn add_option(&mut self, option: CliOption) {
        self.options.push(option);
    }

    /// 追加子命令
    pub fn add_subcommand(&mut self, command: Command) {
        self.subcommands.push(command);
    }

    /// 按名称或别名查找选项，返回第一个匹配项
    pub fn find_option(&self, token: &str) -> Option<&CliOption> {
        self.options
            .iter()
            .find(|option| option.matches(token, self.case_sensitive))
    }

    /// 按名称查找子命令
    pub fn find_subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.iter().find(|command| {
            if self.case_sensitive {
                command.name == name
            } else {
                command.name.eq_ignore_ascii_case(name)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name_validation() {
        assert!(Command::new("build", "", true).is_ok());
        assert_eq!(Command::new("", "", true), Err(SymbolError::EmptyName));
        assert!(Command::new("two words", "", true).is_err());
    }

    #[test]
    fn test_option_lookup_respects_case_sensitivity() {
        let mut sensitive = Command::new("run", "运行", true).unwrap();
        sensitive.add_option(CliOption::new("--Port").unwrap());
        assert!(sensitive.find_option("--Port").is_some());
        assert!(sensitive.find_option("--port").is_none());

        let mut insensitive = Command::new("run", "运行", false).unwrap();
        insensitive.add_option(CliOption::new("--Port").unwrap());
        assert!(insensitive.find_option("--port").is_some());
    }

    #[test]
    fn test_subcommand_lookup() {
        let mut root = Command::new("tool", "", false).unwrap();
        root.add_subcommand(Command::new("Deploy", "部署", true).unwrap());

        assert_eq!(root.find_subcommand("deploy").unwrap().name(), "Deploy");
        assert!(root.find_subcommand("rollback").is_none());
        assert_eq!(root.subcommands().len(), 1);
    }
}
