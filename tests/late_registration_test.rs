//! 宿主解析之后的入口程序注册
//!
//! 需要一个从未注册过入口程序的进程，所以单独成为一个测试二进制

use cli_root::error::IdentityError;
use cli_root::identity::{register_entry_build, BuildInfo, ProcessIdentity};
use cli_root::RootCommand;

#[test]
fn test_registration_after_resolution_is_rejected() {
    let fallback = ProcessIdentity::global().host().name().to_string();
    assert_eq!(fallback, env!("CARGO_PKG_NAME"));

    let late = BuildInfo::new("late-cli").with_informational_version("9.9.9-late");
    assert_eq!(
        register_entry_build(late.clone()),
        Err(IdentityError::HostAlreadyResolved {
            resolved: fallback.clone()
        })
    );

    // 被拒绝的注册不会影响已解析的宿主和版本
    assert_eq!(ProcessIdentity::global().host().name(), fallback);
    assert_ne!(RootCommand::executable_version(), "9.9.9-late");

    // 之后的每次注册都报告同一个回退宿主
    assert_eq!(
        register_entry_build(late),
        Err(IdentityError::HostAlreadyResolved { resolved: fallback })
    );
}
