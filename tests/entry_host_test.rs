//! 入口程序注册测试
//!
//! 注册是进程级的一次性操作，所以放在单独的测试二进制中按顺序验证

use cli_root::error::IdentityError;
use cli_root::identity::{register_entry_build, BuildInfo, PackageVersion, ProcessIdentity};
use cli_root::RootCommand;

#[test]
fn test_entry_host_registration_lifecycle() {
    let build = BuildInfo::new("acme-cli")
        .with_informational_version("4.2.0-rc.1+sha.5e1f")
        .with_package_version(PackageVersion::new(4, 2, 0));

    // 首次注册成功
    register_entry_build(build.clone()).unwrap();

    // 重复注册被拒绝
    assert_eq!(
        register_entry_build(build),
        Err(IdentityError::EntryHostAlreadyRegistered)
    );

    // 版本来自入口程序的信息版本
    assert_eq!(RootCommand::executable_version(), "4.2.0-rc.1+sha.5e1f");
    assert_eq!(ProcessIdentity::global().host().name(), "acme-cli");

    // 宿主解析之后入口程序保持不变
    assert_eq!(
        register_entry_build(BuildInfo::new("other-cli")),
        Err(IdentityError::EntryHostAlreadyRegistered)
    );
    assert_eq!(ProcessIdentity::global().host().name(), "acme-cli");
}
