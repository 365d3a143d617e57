mod common;

use assert_fs::prelude::*;
use common::TestContext;
use predicates::prelude::*;

#[test]
fn types_lists_builtin_server_types() {
    let ctx = TestContext::new();
    ctx.cli()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("forge"))
        .stdout(predicate::str::contains("paper"))
        .stdout(predicate::str::contains("vanilla"))
        .stdout(predicate::str::contains("1.18.2"));
}

#[test]
fn list_on_a_fresh_root_reports_nothing() {
    let ctx = TestContext::new();
    ctx.cli().arg("list").assert().success().stdout(predicate::str::contains("No servers provisioned"));
}

#[test]
fn list_shows_provisioned_servers_in_order() {
    let ctx = TestContext::new();
    ctx.init();
    ctx.add("lobby", "paper").success();
    ctx.add("alpha", "vanilla").success();

    let output = ctx.cli().arg("ls").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lobby = stdout.find("lobby").unwrap();
    let alpha = stdout.find("alpha").unwrap();
    assert!(lobby < alpha);
    assert!(stdout.contains("alpha:25565"));
}

#[test]
fn list_reports_a_corrupt_inventory() {
    let ctx = TestContext::new();
    ctx.write("minecraft/servers.json", "{\"name\": \"alpha\"}");
    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Inventory minecraft/servers.json is corrupt"));
}

#[test]
fn init_installs_templates_and_keeps_edits() {
    let ctx = TestContext::new();
    ctx.cli()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Installed"))
        .stdout(predicate::str::contains("minecraft/template/"));

    assert!(ctx.path("minecraft/template/paper/paper-global.yml").is_file());
    assert!(ctx.path("minecraft/template/forge/Dockerfile").is_file());

    ctx.write("minecraft/template/vanilla/server.properties", "motd=edited\n");
    ctx.cli()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Installed 0 template file(s)"))
        .stdout(predicate::str::contains("Kept"));
    assert_eq!(ctx.read("minecraft/template/vanilla/server.properties"), "motd=edited\n");
}

#[test]
fn root_flag_targets_another_directory() {
    let ctx = TestContext::new();
    let target = assert_fs::TempDir::new().unwrap();

    ctx.cli().arg("--root").arg(target.path()).arg("init").assert().success();
    ctx.cli()
        .args(["add", "--name", "alpha", "--type", "vanilla", "--address", "alpha:25565"])
        .arg("--root")
        .arg(target.path())
        .assert()
        .success();

    target.child("minecraft/servers.json").assert(predicate::str::contains("\"alpha\""));
    target.child("minecraft/servers/alpha/world").assert(predicate::path::is_dir());
    assert!(!ctx.exists("minecraft"));
}

#[test]
fn root_config_file_changes_the_layout() {
    let ctx = TestContext::new();
    ctx.write(
        "mcctl.toml",
        "[layout]\ngame_dir = \"mc\"\n\n[compose]\nnetwork = \"lan\"\n\n[proxy]\nforced_host_domain = \"play.test\"\n",
    );
    ctx.init();
    ctx.add("alpha", "vanilla").success();

    assert!(ctx.path("mc/servers/alpha").is_dir());
    let compose = ctx.read("mc/docker-compose.yml");
    assert!(compose.contains("lan"));
    assert!(ctx.read("velocity/velocity.toml").contains("alpha.play.test"));
}

#[test]
fn explicit_config_flag_must_exist() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["--config", "missing.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn invalid_config_is_rejected() {
    let ctx = TestContext::new();
    ctx.write("mcctl.toml", "[layout]\ngame_dir = \"../outside\"\n");
    ctx.cli().arg("list").assert().failure().stderr(predicate::str::contains("Error:"));
}
