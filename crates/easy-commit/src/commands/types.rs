//! Implementation of the `easy-commit types` command

use owo_colors::OwoColorize;

use easy_commit_core::{Config, offered_types};

use crate::colors::COLORS;
use crate::output::{JsonResponse, TypeEntry, TypesData};

/// Run the types command
pub fn run_types(config: &Config, json_output: bool) -> Result<i32, String> {
    let types = offered_types(&config.commit.allowed_types);

    if json_output {
        let data = TypesData {
            types: types
                .into_iter()
                .map(|t| TypeEntry {
                    name: t.name,
                    description: t.description.to_string(),
                })
                .collect(),
        };
        JsonResponse::ok("types", data).print()?;
        return Ok(0);
    }

    let width = types.iter().map(|t| t.name.chars().count()).max().unwrap_or(0);
    for t in &types {
        let name = format!("{:<width$}", t.name, width = width);
        println!("{}  {}", name.style(COLORS.active), t.description);
    }

    Ok(0)
}
