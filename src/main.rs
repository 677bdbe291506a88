use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use menu_preview::config::{self, Config};
use menu_preview::metadata::{page_metadata, PageMetadata};
use menu_preview::model::PreviewPhase;
use menu_preview::preview::{PreviewController, Timeline};
use menu_preview::templates::{html, TemplateRegistry};

#[derive(Debug, Parser)]
#[command(author, version, about = "Render a restaurant's staged menu preview to HTML, one file per phase.")]
struct Args {
    /// Path to YAML config file; built-in defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restaurant slug to preview
    #[arg(long, default_value = "demo-cafe")]
    slug: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => config::load(Some(path))
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => {
            info!("no config given; using defaults");
            Config::default()
        }
    };
    cfg.ensure_dirs()?;

    let (restaurants, themes) = menu_preview::load_catalog(&cfg, args.config.as_deref())
        .context("failed to load catalog")?;

    let mut templates = TemplateRegistry::builtin();
    if !templates.set_default(&cfg.catalog.default_theme) {
        bail!(
            "catalog.default_theme '{}' has no template (available: {})",
            cfg.catalog.default_theme,
            templates.ids().join(", ")
        );
    }
    let timeline = Timeline::from_config(&cfg)?;

    let mut controller = PreviewController::new(
        Arc::new(restaurants),
        Arc::new(themes),
        Arc::new(templates),
        timeline,
    );
    let mut rx = controller.subscribe();
    controller.activate(&args.slug).await;
    rx.borrow_and_update();

    let Some(record) = controller.record() else {
        bail!("preview did not activate");
    };
    let meta = page_metadata(record, &cfg.app.product_name);
    let out_dir = PathBuf::from(&cfg.app.output_dir).join(&record.slug);
    tokio::fs::create_dir_all(&out_dir)
        .await
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = vec![write_phase(&out_dir, &meta, &controller).await?];
    loop {
        tokio::select! {
            changed = rx.changed() => {
                changed?;
                let phase = rx.borrow_and_update().phase;
                written.push(write_phase(&out_dir, &meta, &controller).await?);
                if phase == PreviewPhase::Ready {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("interrupted; cancelling preview");
                controller.teardown();
                break;
            }
        }
    }

    println!("================================");
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

async fn write_phase(
    out_dir: &Path,
    meta: &PageMetadata,
    controller: &PreviewController,
) -> Result<PathBuf> {
    let phase = controller.phase();
    let path = out_dir.join(format!("{}.html", phase.as_str()));
    let doc = html::page(meta, &controller.render());
    tokio::fs::write(&path, doc)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(phase = phase.as_str(), path = %path.display(), "wrote preview phase");
    Ok(path)
}
