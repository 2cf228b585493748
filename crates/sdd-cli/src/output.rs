use console::style;
use sdd_core::types::{CheckResult, ReportStatus, Strategy};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn styled_strategy(strategy: Strategy) -> String {
    match strategy {
        Strategy::None => style(strategy.as_str()).dim().to_string(),
        Strategy::SingleAgent => style(strategy.as_str()).green().to_string(),
        Strategy::MultiAgent => style(strategy.as_str()).cyan().bold().to_string(),
    }
}

pub fn styled_status(status: ReportStatus) -> String {
    match status {
        ReportStatus::Pass => style(status.as_str()).green().to_string(),
        ReportStatus::Fail => style(status.as_str()).red().bold().to_string(),
        ReportStatus::Warn => style(status.as_str()).yellow().to_string(),
    }
}

pub fn styled_check(result: CheckResult) -> String {
    match result {
        CheckResult::Pass => style("PASS").green().to_string(),
        CheckResult::Fail => style("FAIL").red().bold().to_string(),
        CheckResult::Warn => style("WARN").yellow().to_string(),
    }
}
