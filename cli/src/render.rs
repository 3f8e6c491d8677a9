//! Output rendering for tables and JSON

use comfy_table::{ContentArrangement, Table};
use costar::{CenterSummary, RankBy, Ranked, SeparationTree};
use serde_json::json;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

pub fn summary(summary: &CenterSummary<'_>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Table => {
            println!(
                "{} is now the center of the universe, connected to {} / {} with average separation {:.3}",
                summary.center, summary.connected, summary.total, summary.average_separation
            );
            println!("{} shares a work with {} people", summary.center, summary.degree);
        }
    }
    Ok(())
}

pub fn path(tree: &SeparationTree<'_>, target: &str, format: OutputFormat) -> anyhow::Result<()> {
    let separation = tree.separation_of(target);
    let links = tree.links_to(target);

    match format {
        OutputFormat::Json => {
            let value = json!({
                "center": tree.root(),
                "target": target,
                "separation": separation,
                "path": tree.path_to(target),
                "links": links,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => match separation {
            None => println!("{}'s separation from {} is infinite", target, tree.root()),
            Some(n) => {
                println!("{}'s separation from {} is {}", target, tree.root(), n);
                if links.is_empty() {
                    return Ok(());
                }
                let mut table = new_table(&["Person", "Appeared in", "With"]);
                for link in &links {
                    table.add_row(vec![
                        link.from.to_string(),
                        link.label.to_string(),
                        link.to.to_string(),
                    ]);
                }
                println!("{}", table);
            }
        },
    }
    Ok(())
}

pub fn missing(tree: &SeparationTree<'_>, format: OutputFormat) -> anyhow::Result<()> {
    let missing = tree.missing();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&missing)?),
        OutputFormat::Table => {
            if missing.is_empty() {
                println!("Everyone is connected to {}", tree.root());
                return Ok(());
            }
            let mut table = new_table(&["Unreachable from center"]);
            for vertex in &missing {
                table.add_row(vec![vertex.to_string()]);
            }
            println!("{}", table);
            println!("{} people", missing.len());
        }
    }
    Ok(())
}

pub fn ranking(by: RankBy, target: &str, ranked: &[Ranked<'_>], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ranked)?),
        OutputFormat::Table => {
            if ranked.is_empty() {
                println!("(no candidates)");
                return Ok(());
            }
            let score_header = match by {
                RankBy::Separation => "Average separation",
                RankBy::Degree => "Degree",
            };
            let mut table = new_table(&["#", "Center", score_header]);
            for (i, entry) in ranked.iter().enumerate() {
                let score = match by {
                    RankBy::Separation => format!("{:.3}", entry.score),
                    RankBy::Degree => format!("{}", entry.score),
                };
                table.add_row(vec![(i + 1).to_string(), entry.key.to_string(), score]);
            }
            println!("Best centers still connected to {} by {}:", target, by);
            println!("{}", table);
        }
    }
    Ok(())
}
