use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_message_expression() -> Result<()> {
    let test = CliTest::with_file(
        "src/greeting.ts",
        r#"import { t } from "@lingui/macro";

export const greet = (user) => t`Hello ${user.name}`;
"#,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains(
        "error: Should be ${variable}, not ${object.property} or ${my_function()}  message-expression"
    ));
    assert!(out.stdout.contains("--> ./src/greeting.ts:3:33"));
    assert!(out.stdout.contains("3 | export const greet = (user) => t`Hello ${user.name}`;"));
    assert!(out.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r##"
export function Inbox({ count, name }) {
    return (
        <Trans>
            <p>{t`Hello ${name}, you have ${plural(count, { one: "# message", other: "# messages" })}`}</p>
        </Trans>
    );
}
"##,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Checked 1 source file - no issues found"));

    Ok(())
}

#[test]
fn test_all_rules() -> Result<()> {
    let test = CliTest::with_file(
        "src/card.tsx",
        r#"export function Card({ user }) {
    return (
        <div title={t`Profile of ${user.name}`}>
            <input placeholder="Search" />
            <h1>Welcome</h1>
        </div>
    );
}
"#,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("message-expression"));
    assert!(out.stdout.contains("warning: \"Search\"  unlocalized-attribute"));
    assert!(out.stdout.contains("error: \"Welcome\"  unlocalized-text"));
    assert!(out.stdout.contains("3 problems (2 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_rule_selection() -> Result<()> {
    let test = CliTest::with_file(
        "src/card.tsx",
        "export const Card = () => <h1 title={t`${a.b}`}>Welcome</h1>;\n",
    )?;

    let mut cmd = test.check_command();
    cmd.arg("unlocalized-text");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("unlocalized-text"));
    assert!(!out.stdout.contains("message-expression"));

    Ok(())
}

#[test]
fn test_warnings_only_exit_zero() -> Result<()> {
    let test = CliTest::with_file("src/form.tsx", "<input placeholder=\"Email address\" />;\n")?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_disable_comments() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const A = () => (
    <div>
        {/* msglint-disable-next-line unlocalized-text */}
        <p>Ignored</p>
        <p>Reported</p>
    </div>
);
"#,
    )?;

    let out = run(test.check_command())?;

    assert!(!out.stdout.contains("Ignored"));
    assert!(out.stdout.contains("\"Reported\""));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/ok.tsx", "export const a = 1;\n")?;
    test.write_file("src/broken.tsx", "export const = ;\n")?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("parse-error"));
    assert!(out.stdout.contains("--> ./src/broken.tsx"));
    assert!(out.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_config_ignores_and_texts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".msglintrc.json",
        r#"{
    "ignores": ["**/generated/**"],
    "ignoreTexts": ["GitHub"]
}"#,
    )?;
    test.write_file("src/footer.tsx", "<footer>GitHub</footer>;\n")?;
    test.write_file("generated/types.tsx", "<div>Ignored</div>;\n")?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Checked 1 source file - no issues found"));

    Ok(())
}

#[test]
fn test_test_files_are_skipped_by_default() -> Result<()> {
    let test = CliTest::with_file("src/app.test.tsx", "<p>Fixture text</p>;\n")?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Checked 0 source files"));

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/src/app.tsx", "<p>Hello</p>;\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--source-root", "web"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("--> web/src/app.tsx:1:4"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_internal_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".msglintrc.json", r#"{ "ignores": ["**/[broken"] }"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("check"));
    assert!(out.stdout.contains("init"));
    assert!(out.stdout.contains("serve"));

    Ok(())
}
