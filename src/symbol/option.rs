//! 选项定义

use crate::error::SymbolError;
use serde::Serialize;

/// 选项类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// 显示帮助
    Help,
    /// 显示版本
    Version,
    /// 应用自定义选项
    Custom,
}

/// 命令行选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliOption {
    name: String,
    aliases: Vec<String>,
    description: String,
    hidden: bool,
    kind: OptionKind,
}

impl CliOption {
    /// 创建自定义选项，名称不能为空或包含空白字符
    pub fn new(name: impl Into<String>) -> Result<Self, SymbolError> {
        let name = name.into();
        validate_token(&name)?;
        Ok(Self {
            name,
            aliases: Vec::new(),
            description: String::new(),
            hidden: false,
            kind: OptionKind::Custom,
        })
    }

    /// 内置帮助选项
    pub fn help() -> Self {
        Self {
            name: "--help".to_string(),
            aliases: ["-h", "/h", "-?", "/?"].map(String::from).to_vec(),
            description: "显示帮助和用法信息".to_string(),
            hidden: false,
            kind: OptionKind::Help,
        }
    }

    /// 内置版本选项
    pub fn version() -> Self {
        Self {
            name: "--version".to_string(),
            aliases: Vec::new(),
            description: "显示版本信息".to_string(),
            hidden: false,
            kind: OptionKind::Version,
        }
    }

    /// 添加别名
    pub fn with_alias(mut self, alias: impl Into<String>) -> Result<Self, SymbolError> {
        let alias = alias.into();
        validate_token(&alias)?;
        self.aliases.push(alias);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// 名称或任一别名是否匹配
    pub fn matches(&self, token: &str, case_sensitive: bool) -> bool {
        std::iter::once(&self.name)
            .chain(self.aliases.iter())
            .any(|candidate| {
                if case_sensitive {
                    candidate == token
                } else {
                    candidate.eq_ignore_ascii_case(token)
                }
            })
    }
}

/// 校验选项或命令的名称
pub(crate) fn validate_token(token: &str) -> Result<(), SymbolError> {
    if token.is_empty() {
        return Err(SymbolError::EmptyName);
    }

    if token.chars().any(char::is_whitespace) {
        return Err(SymbolError::InvalidName {
            name: token.to_string(),
            reason: "不能包含空白字符".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_option_aliases() {
        let help = CliOption::help();
        assert_eq!(help.kind(), OptionKind::Help);
        for token in ["--help", "-h", "/h", "-?", "/?"] {
            assert!(help.matches(token, true), "{token} 应该匹配帮助选项");
        }
        assert!(!help.matches("--HELP", true));
        assert!(help.matches("--HELP", false));
    }

    #[test]
    fn test_version_option() {
        let version = CliOption::version();
        assert_eq!(version.name(), "--version");
        assert_eq!(version.kind(), OptionKind::Version);
        assert!(version.aliases().is_empty());
    }

    #[test]
    fn test_custom_option_validation() {
        assert!(CliOption::new("--verbose").is_ok());
        assert_eq!(CliOption::new(""), Err(SymbolError::EmptyName));
        assert!(CliOption::new("--bad name").is_err());

        let option = CliOption::new("--output")
            .unwrap()
            .with_alias("-o")
            .unwrap();
        assert!(option.matches("-o", true));
        assert!(option.clone().with_alias("- x").is_err());
    }
}
