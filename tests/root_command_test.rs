//! 根命令集成测试
//!
//! 使用真实的全局进程身份，不注册入口程序

use cli_root::identity::{display_name_from_path, ProcessIdentity};
use cli_root::symbol::{DirectiveKind, OptionKind};
use cli_root::{Directive, RootCommand};

#[test]
fn test_default_root_command() {
    let root = RootCommand::new();

    assert_eq!(root.description(), "");
    assert!(root.is_case_sensitive());
    assert_eq!(root.name(), ProcessIdentity::global().executable_name());
    assert_eq!(RootCommand::default(), root);
}

#[test]
fn test_builtins_present_before_caller_additions() {
    let root = RootCommand::with_description("集成测试");

    assert!(root.options().len() >= 2);
    assert_eq!(root.options()[0].kind(), OptionKind::Help);
    assert_eq!(root.options()[1].kind(), OptionKind::Version);

    assert!(!root.directives().is_empty());
    assert_eq!(
        root.directives().get(0).map(Directive::kind),
        Some(DirectiveKind::Suggest)
    );
}

#[test]
fn test_case_insensitive_root_matches_builtins() {
    let root = RootCommand::with_case_sensitivity("", false);
    assert!(root.find_option("--HELP").is_some());
    assert!(root.find_option("--Version").is_some());
}

#[test]
fn test_add_preserves_order() {
    let mut root = RootCommand::new();
    for name in ["first", "second", "third"] {
        let before = root.directives().len();
        root.add(Directive::new(name).unwrap());
        assert_eq!(root.directives().len(), before + 1);
    }

    assert_eq!(
        root.directives().names(),
        vec!["suggest", "first", "second", "third"]
    );
}

#[test]
fn test_global_identity_is_memoized() {
    let identity = ProcessIdentity::global();

    assert!(std::ptr::eq(identity, ProcessIdentity::global()));
    assert!(std::ptr::eq(
        identity.executable_path(),
        RootCommand::executable_path()
    ));
    assert!(std::ptr::eq(
        identity.executable_name(),
        RootCommand::executable_name()
    ));
    assert!(std::ptr::eq(
        identity.executable_version(),
        RootCommand::executable_version()
    ));
}

#[test]
fn test_global_identity_reflects_launch_arguments() {
    let expected_path = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap();

    assert_eq!(RootCommand::executable_path(), expected_path);
    assert_eq!(
        RootCommand::executable_name(),
        display_name_from_path(&expected_path)
    );
    assert!(!RootCommand::executable_name().contains(' '));
    assert!(!RootCommand::executable_name().contains(std::path::MAIN_SEPARATOR));
}

#[test]
fn test_version_falls_back_to_this_crate() {
    let expected =
        option_env!("CLI_ROOT_INFORMATIONAL_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    assert_eq!(RootCommand::executable_version(), expected);
    assert_eq!(ProcessIdentity::global().host().name(), "cli-root");
}

#[test]
fn test_concurrent_global_access() {
    let names: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(|| RootCommand::new().name().to_string()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let first = &names[0];
    assert!(names.iter().all(|name| name == first));
    assert_eq!(first, RootCommand::executable_name());
}
