use crate::output::print_json;
use anyhow::Context;
use sdd_core::catalog::department_catalog;
use sdd_core::department::classify;
use std::path::Path;

pub fn run(file: Option<&Path>, text: Option<&str>, json: bool) -> anyhow::Result<i32> {
    let purpose = sdd_core::input::resolve(file, text).context("failed to resolve input")?;
    let catalog = department_catalog().context("failed to build department catalog")?;
    let assignment = classify(&catalog, &purpose);

    if json {
        print_json(&assignment)?;
    } else {
        println!("Department:  {}", assignment.department);
        println!("Score:       {}", assignment.score);
        println!("Agent:       {}", assignment.agent);
        println!("Tools:       {}", assignment.tools.join(", "));
        println!("Permissions: {}", assignment.permission_mode);
    }

    Ok(0)
}
