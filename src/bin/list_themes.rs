use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use menu_preview::config::{self, Config};
use menu_preview::directory::RestaurantRepository;
use menu_preview::model::ThemeDefinition;
use menu_preview::themes::ThemeRepository;

#[derive(Parser, Debug)]
#[command(about = "List the theme catalog and how many restaurants use each theme.")]
struct Args {
    /// Path to YAML config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ThemeUsage {
    #[serde(flatten)]
    theme: ThemeDefinition,
    restaurants: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => config::load(Some(path))
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::default(),
    };
    let (restaurants, themes) = menu_preview::load_catalog(&cfg, args.config.as_deref())?;

    let records = restaurants.list().await;
    let usage: Vec<ThemeUsage> = themes
        .list()
        .await
        .into_iter()
        .map(|theme| {
            let users = records
                .iter()
                .filter(|r| r.settings.theme_id_or(&cfg.catalog.default_theme) == theme.id)
                .map(|r| r.slug.clone())
                .collect();
            ThemeUsage {
                theme,
                restaurants: users,
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&usage)?);
        return Ok(());
    }

    println!("Themes:");
    for u in usage {
        let mut badges = Vec::new();
        if u.theme.id == cfg.catalog.default_theme {
            badges.push("default");
        }
        if u.theme.is_new {
            badges.push("new");
        }
        if u.theme.is_premium {
            badges.push("premium");
        }
        let badges = if badges.is_empty() {
            String::new()
        } else {
            format!(" [{}]", badges.join(", "))
        };
        println!(
            "  {} ({} / {}){} -> {} restaurant(s): {}",
            u.theme.id,
            u.theme.name,
            u.theme.name_en,
            badges,
            u.restaurants.len(),
            u.restaurants.join(", ")
        );
    }
    Ok(())
}
