use crate::output::{print_json, styled_check, styled_status};
use anyhow::Context;
use sdd_core::validate::{validate, ArtifactKind, ValidateOptions};
use std::path::Path;
use std::str::FromStr;

pub fn run(
    kind: &str,
    file: &Path,
    strict: bool,
    max_warnings: usize,
    json: bool,
) -> anyhow::Result<i32> {
    let kind = ArtifactKind::from_str(kind)?;
    let text = sdd_core::input::resolve(Some(file), None)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let report = validate(
        kind,
        &file.display().to_string(),
        &text,
        ValidateOptions {
            strict,
            max_warnings,
        },
    );

    if json {
        print_json(&report)?;
    } else {
        println!(
            "{}  {}  score {}/100",
            styled_status(report.status),
            report.file,
            report.score
        );
        println!(
            "checks: {} passed, {} failed, {} warnings",
            report.passed, report.failed, report.warnings
        );
        println!();
        // render in battery order, from the same report the JSON mode emits
        for check in kind.checks() {
            let outcome = &report.checks[check.name];
            println!(
                "  {}  {:<22} {}",
                styled_check(outcome.result),
                check.name,
                outcome.description
            );
        }
    }

    Ok(report.status.exit_code())
}
