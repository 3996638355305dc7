//! End-to-end behavior of the namespace through its public API.

use rstest::rstest;
use treesh_kernel::vfs::{ErrorKind, Namespace, NodeKind};
use treesh_kernel::{ControlFlow, Kernel, KernelConfig};

fn listing(ns: &Namespace, path: &str) -> Vec<String> {
    ns.ls(path).unwrap().iter().map(ToString::to_string).collect()
}

#[test]
fn write_read_search_scenario() {
    let mut ns = Namespace::new();
    ns.mkdir("/a").unwrap();
    ns.cd("/a").unwrap();
    ns.touch("f").unwrap();
    ns.echo("hello world", "f").unwrap();

    assert_eq!(ns.cat("f").unwrap(), "hello world");
    assert_eq!(ns.grep("hello", "f").unwrap(), vec!["hello world"]);
    assert!(ns.grep("bye", "f").unwrap().is_empty());
}

#[test]
fn rename_scenario() {
    let mut ns = Namespace::new();
    ns.mkdir("/x/y").unwrap();
    ns.cd("/x").unwrap();
    let y = ns.resolve("y").unwrap();

    let moved = ns.mv("y", "/x/z").unwrap();

    assert_eq!(moved, y);
    assert_eq!(listing(&ns, "/x"), vec!["z/"]);
    assert_eq!(ns.path_of(y).as_deref(), Some("/x/z"));
}

#[test]
fn rm_missing_scenario() {
    let mut ns = Namespace::new();
    ns.mkdir("keep").unwrap();
    let before = ns.tree().snapshot(ns.root()).unwrap();

    let err = ns.rm("nope").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(ns.tree().snapshot(ns.root()).unwrap(), before);
    assert_eq!(listing(&ns, "."), vec!["keep/"]);
}

#[test]
fn cursor_survives_every_failure() {
    let mut ns = Namespace::new();
    ns.mkdir("/a/b").unwrap();
    ns.cd("/a/b").unwrap();
    ns.touch("f").unwrap();

    let _ = ns.mv("f", "/missing/f");
    let _ = ns.cp("f", "/a/b/f/g");
    let _ = ns.mkdir("f/x");
    let _ = ns.cd("nowhere");
    let _ = ns.mv("f", "/a");

    assert_eq!(ns.cwd_path(), "/a/b");
    assert!(ns.node(ns.cursor()).is_some_and(|n| n.kind() == NodeKind::Directory));
}

#[test]
fn removing_a_directory_frees_its_subtree() {
    let mut ns = Namespace::new();
    ns.mkdir("/d/e/f").unwrap();
    let f = ns.resolve("/d/e/f").unwrap();
    let before = ns.tree().node_count();

    ns.rm("d").unwrap();

    assert_eq!(ns.tree().node_count(), before - 3);
    assert!(ns.node(f).is_none());
}

#[rstest]
#[case::file("touch f", "mkdir f/g", ErrorKind::NotADirectory)]
#[case::cd_file("touch f", "cd f", ErrorKind::NotADirectory)]
#[case::echo_dir("mkdir d", "echo hi d", ErrorKind::NotFound)]
#[case::cat_dir("mkdir d", "cat d", ErrorKind::NotFound)]
#[case::mv_cycle("mkdir d", "mv d d/x", ErrorKind::InvalidMove)]
#[case::bad_name("mkdir d", "rm ..", ErrorKind::InvalidName)]
fn error_kinds(#[case] setup: &str, #[case] line: &str, #[case] kind: ErrorKind) {
    let mut ns = Namespace::new();
    let run = |ns: &mut Namespace, line: &str| {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["touch", name] => ns.touch(name).map(drop),
            ["mkdir", path] => ns.mkdir(path).map(drop),
            ["cd", path] => ns.cd(path),
            ["echo", content, name] => ns.echo(content, name),
            ["cat", name] => ns.cat(name).map(drop),
            ["mv", src, dest] => ns.mv(src, dest).map(drop),
            ["rm", name] => ns.rm(name),
            other => panic!("unexpected {other:?}"),
        }
    };

    run(&mut ns, setup).unwrap();
    assert_eq!(run(&mut ns, line).unwrap_err().kind(), kind);
}

#[test]
fn kernel_session_end_to_end() {
    let config = KernelConfig::default().with_name("session").with_seed(["/home"]);
    let mut kernel = Kernel::new(config).unwrap();

    for line in ["cd /home", "touch notes", "echo buy milk notes", "cp notes backup"] {
        let result = kernel.execute(line).into_result().unwrap();
        assert!(result.ok(), "{line}: {}", result.err);
    }

    let ls = kernel.execute("ls").into_result().unwrap();
    assert_eq!(ls.out, "backup\nnotes");
    let grep = kernel.execute("grep milk backup").into_result().unwrap();
    assert_eq!(grep.out, "buy milk");

    assert_eq!(kernel.execute("exit 4"), ControlFlow::Exit { code: 4 });
    assert_eq!(kernel.cwd(), "/home");
    assert_eq!(kernel.name(), "session");
}
