//! 根命令
//!
//! 命令树唯一的顶层节点，代表整个应用的入口。构造时注册内置的帮助和版本选项，
//! 并初始化一个独立于子命令的指令列表。

use crate::config::CliConfig;
use crate::error::Result;
use crate::identity::ProcessIdentity;
use crate::symbol::{CliOption, Command, Directive, DirectiveAppender, DirectiveList};
use serde::Serialize;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// 根命令
///
/// 名称固定为构造时解析出的可执行文件名称，之后不再重新解析。
/// 选项、子命令以及名称查找通过 `Deref` 使用内部的 [`Command`]。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootCommand {
    #[serde(flatten)]
    command: Command,
    directives: DirectiveList,
}

impl RootCommand {
    /// 创建根命令：描述为空，区分大小写
    pub fn new() -> Self {
        Self::with_case_sensitivity("", true)
    }

    /// 创建带描述的根命令
    pub fn with_description(description: impl Into<String>) -> Self {
        Self::with_case_sensitivity(description, true)
    }

    /// 创建根命令并指定大小写敏感性
    pub fn with_case_sensitivity(description: impl Into<String>, case_sensitive: bool) -> Self {
        Self::with_identity(ProcessIdentity::global(), description, case_sensitive)
    }

    /// 基于指定的进程身份创建根命令
    ///
    /// 选项依次为帮助、版本；指令列表预置 `[suggest]`。
    pub fn with_identity(
        identity: &ProcessIdentity,
        description: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        let mut command = Command::unchecked(
            identity.executable_name().to_string(),
            description.into(),
            case_sensitive,
        );
        command.add_option(CliOption::help());
        command.add_option(CliOption::version());

        let mut directives = DirectiveList::new();
        directives.push(Directive::suggest());

        debug!("创建根命令: {}", command.name());

        Self {
            command,
            directives,
        }
    }

    /// 按配置文件创建根命令，配置中的指令追加在内置指令之后
    pub fn from_config(config: &CliConfig) -> Result<Self> {
        Self::from_config_with_identity(ProcessIdentity::global(), config)
    }

    /// 基于指定的进程身份按配置创建根命令
    pub fn from_config_with_identity(
        identity: &ProcessIdentity,
        config: &CliConfig,
    ) -> Result<Self> {
        let mut root = Self::with_identity(
            identity,
            config.root.description.clone(),
            config.root.case_sensitive,
        );

        for entry in &config.directives {
            let directive = Directive::new(entry.name.clone())?
                .with_description(entry.description.clone())
                .with_hidden(entry.hidden);
            root.add(directive);
        }

        Ok(root)
    }

    /// 追加指令，不检查重名
    pub fn add(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    /// 根命令下有效的全部指令
    pub fn directives(&self) -> &DirectiveList {
        &self.directives
    }

    /// 只能追加的指令列表句柄
    pub fn directives_mut(&mut self) -> DirectiveAppender<'_> {
        DirectiveAppender::new(&mut self.directives)
    }

    /// 内部命令节点
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// 当前可执行文件的名称
    pub fn executable_name() -> &'static str {
        ProcessIdentity::global().executable_name()
    }

    /// 当前可执行文件的路径
    pub fn executable_path() -> &'static str {
        ProcessIdentity::global().executable_path()
    }

    /// 当前可执行文件的版本
    pub fn executable_version() -> &'static str {
        ProcessIdentity::global().executable_version()
    }
}

impl Default for RootCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for RootCommand {
    type Target = Command;

    fn deref(&self) -> &Self::Target {
        &self.command
    }
}

impl DerefMut for RootCommand {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DirectiveConfig, RootConfig};
    use crate::error::{CliRootError, SymbolError};
    use crate::symbol::{DirectiveKind, OptionKind};

    fn test_identity() -> ProcessIdentity {
        ProcessIdentity::builder()
            .launch_args(["/usr/local/bin/My Tool.exe"])
            .build()
    }

    #[test]
    fn test_defaults() {
        let root = RootCommand::with_identity(&test_identity(), "", true);
        assert_eq!(root.name(), "MyTool");
        assert_eq!(root.description(), "");
        assert!(root.is_case_sensitive());
    }

    #[test]
    fn test_builtin_options_in_order() {
        let root = RootCommand::with_identity(&test_identity(), "工具", false);
        let kinds: Vec<OptionKind> = root.options().iter().map(CliOption::kind).collect();
        assert_eq!(kinds, vec![OptionKind::Help, OptionKind::Version]);
        assert!(!root.is_case_sensitive());
        assert_eq!(root.description(), "工具");
    }

    #[test]
    fn test_caller_options_follow_builtins() {
        let mut root = RootCommand::with_identity(&test_identity(), "", true);
        root.add_option(CliOption::new("--verbose").unwrap());

        assert_eq!(root.options().len(), 3);
        assert_eq!(root.options()[2].name(), "--verbose");
        assert!(root.find_option("-h").is_some());
        assert!(root.find_option("--version").is_some());
    }

    #[test]
    fn test_suggest_directive_preregistered() {
        let root = RootCommand::with_identity(&test_identity(), "", true);
        assert_eq!(root.directives().len(), 1);
        assert_eq!(
            root.directives().get(0).unwrap().kind(),
            DirectiveKind::Suggest
        );
    }

    #[test]
    fn test_add_appends_one_directive() {
        let mut root = RootCommand::with_identity(&test_identity(), "", true);
        root.add(Directive::new("first").unwrap());
        let before = root.directives().clone();

        root.add(Directive::new("diagram").unwrap());

        assert_eq!(root.directives().len(), before.len() + 1);
        for (index, directive) in before.iter().enumerate() {
            assert_eq!(root.directives().get(index), Some(directive));
        }
        assert_eq!(
            root.directives().get(before.len()).unwrap().name(),
            "diagram"
        );
    }

    #[test]
    fn test_directives_mut_is_live() {
        let mut root = RootCommand::with_identity(&test_identity(), "", true);
        let mut appender = root.directives_mut();
        appender.extend([Directive::new("a").unwrap(), Directive::new("b").unwrap()]);
        appender.push(Directive::new("c").unwrap());
        assert_eq!(appender.list().len(), 4);

        assert_eq!(root.directives().names(), vec!["suggest", "a", "b", "c"]);
    }

    #[test]
    fn test_directives_are_not_options_or_subcommands() {
        let mut root = RootCommand::with_identity(&test_identity(), "", true);
        root.add(Directive::new("diagram").unwrap());

        assert!(root.find_option("suggest").is_none());
        assert!(root.find_option("[suggest]").is_none());
        assert!(root.find_subcommand("diagram").is_none());
    }

    #[test]
    fn test_name_fixed_at_construction() {
        let identity = test_identity();
        let root = RootCommand::with_identity(&identity, "", true);
        assert_eq!(root.name(), identity.executable_name());
        assert_eq!(root.name(), "MyTool");
    }

    #[test]
    fn test_from_config() {
        let config = CliConfig {
            root: RootConfig {
                description: "部署工具".to_string(),
                case_sensitive: false,
            },
            directives: vec![DirectiveConfig {
                name: "diagram".to_string(),
                description: "显示解析结果".to_string(),
                hidden: true,
            }],
            ..Default::default()
        };

        let root = RootCommand::from_config_with_identity(&test_identity(), &config).unwrap();
        assert_eq!(root.description(), "部署工具");
        assert!(!root.is_case_sensitive());
        assert_eq!(root.directives().names(), vec!["suggest", "diagram"]);
        assert!(root.directives().get(1).unwrap().is_hidden());
    }

    #[test]
    fn test_from_config_rejects_invalid_directive() {
        let config = CliConfig {
            directives: vec![DirectiveConfig {
                name: String::new(),
                description: String::new(),
                hidden: false,
            }],
            ..Default::default()
        };

        let result = RootCommand::from_config_with_identity(&test_identity(), &config);
        assert!(matches!(
            result,
            Err(CliRootError::Symbol(SymbolError::EmptyName))
        ));
    }

    #[test]
    fn test_serializes_with_directives() {
        let root = RootCommand::with_identity(&test_identity(), "desc", true);
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["name"], "MyTool");
        assert_eq!(json["options"][0]["kind"], "help");
        assert_eq!(json["directives"][0]["name"], "suggest");
    }
}
