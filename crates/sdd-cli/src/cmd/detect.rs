use crate::output::{print_json, styled_strategy};
use anyhow::Context;
use sdd_core::catalog::domain_catalog;
use sdd_core::router::decide;
use sdd_core::scorer::score;
use std::path::Path;

pub fn run(
    file: Option<&Path>,
    text: Option<&str>,
    verbose: bool,
    json: bool,
) -> anyhow::Result<i32> {
    let input = sdd_core::input::resolve(file, text).context("failed to resolve input")?;
    let catalog = domain_catalog().context("failed to build domain catalog")?;
    let scores = score(&catalog, &input);
    let decision = decide(&catalog, &scores);

    if json {
        print_json(&decision)?;
    } else {
        println!("Strategy:  {}", styled_strategy(decision.strategy));
        println!("Domains:   {}", decision.domain_count);
        println!("Matches:   {}", decision.total_matches);
        for d in &decision.domains {
            println!("  {:<15} {:>3}  → {}", d.domain, d.score, d.agent);
        }
        if verbose {
            println!();
            println!("All domain scores:");
            for e in &scores {
                println!("  {:<15} {:>3}", e.label.as_str(), e.score);
            }
        }
        if !decision.suggested_agents.is_empty() {
            println!();
            println!("Suggested agents: {}", decision.suggested_agents.join(", "));
        }
    }

    Ok(decision.exit_code())
}
