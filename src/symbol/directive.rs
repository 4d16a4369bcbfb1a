//! 指令定义
//!
//! 指令是以方括号包围、在普通选项解析之前识别的预解析指示（如 `[suggest]`），
//! 只属于根命令，与选项和子命令处于不同的命名空间。

use crate::error::SymbolError;
use serde::Serialize;

/// 指令类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    /// 为外部 shell 补全工具提供参数建议
    Suggest,
    /// 应用自定义指令
    Custom,
}

/// 指令
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    name: String,
    description: String,
    hidden: bool,
    kind: DirectiveKind,
}

impl Directive {
    /// 创建自定义指令
    ///
    /// 名称不能为空，且不能包含空白字符、`[`、`]` 或 `:`。
    pub fn new(name: impl Into<String>) -> Result<Self, SymbolError> {
        let name = name.into();
        validate_directive_name(&name)?;
        Ok(Self {
            name,
            description: String::new(),
            hidden: false,
            kind: DirectiveKind::Custom,
        })
    }

    /// 内置的参数建议指令
    pub fn suggest() -> Self {
        Self {
            name: "suggest".to_string(),
            description: "为 shell 补全工具提供参数建议".to_string(),
            hidden: true,
            kind: DirectiveKind::Suggest,
        }
    }

    /// 设置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 设置是否在帮助中隐藏
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// 命令行中的书写形式，如 `[suggest]`
    pub fn token(&self) -> String {
        format!("[{}]", self.name)
    }
}

/// 校验指令名称
pub fn validate_directive_name(name: &str) -> Result<(), SymbolError> {
    if name.is_empty() {
        return Err(SymbolError::EmptyName);
    }

    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '[' | ']' | ':'))
    {
        return Err(SymbolError::InvalidName {
            name: name.to_string(),
            reason: format!("指令名称不能包含字符 {c:?}"),
        });
    }

    Ok(())
}

/// 根命令独占的指令列表
///
/// 只能追加，不能删除或重排，内置指令因此始终保留在原位。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirectiveList {
    items: Vec<Directive>,
}

impl DirectiveList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加指令，不检查重名
    pub fn push(&mut self, directive: Directive) {
        tracing::debug!("添加指令: {}", directive.token());
        self.items.push(directive);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Directive> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.items.iter()
    }

    /// 是否存在同名指令
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|directive| directive.name == name)
    }

    /// 按注册顺序列出名称
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Directive::name).collect()
    }
}

impl Extend<Directive> for DirectiveList {
    fn extend<T: IntoIterator<Item = Directive>>(&mut self, iter: T) {
        for directive in iter {
            self.push(directive);
        }
    }
}

impl<'a> IntoIterator for &'a DirectiveList {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 指令列表的追加句柄
///
/// 只暴露追加和只读访问，持有者无法替换或清空底层列表。
#[derive(Debug)]
pub struct DirectiveAppender<'a> {
    list: &'a mut DirectiveList,
}

impl<'a> DirectiveAppender<'a> {
    pub(crate) fn new(list: &'a mut DirectiveList) -> Self {
        Self { list }
    }

    /// 追加指令，不检查重名
    pub fn push(&mut self, directive: Directive) {
        self.list.push(directive);
    }

    /// 当前的指令列表
    pub fn list(&self) -> &DirectiveList {
        self.list
    }
}

impl Extend<Directive> for DirectiveAppender<'_> {
    fn extend<T: IntoIterator<Item = Directive>>(&mut self, iter: T) {
        self.list.extend(iter);
    }
}
