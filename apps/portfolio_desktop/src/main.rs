use std::{path::PathBuf, time::Duration};

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use portfolio_core::PortfolioContent;
use tracing_subscriber::EnvFilter;
use url::Url;

use backend_bridge::{commands::BackendCommand, runtime::SubmitterConfig};
use controller::events::UiEvent;
use ui::{PortfolioApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "portfolio_desktop", about = "Single-page portfolio viewer")]
struct Args {
    /// TOML file replacing the built-in portfolio content.
    #[arg(long)]
    content: Option<PathBuf>,
    /// Contact relay endpoint. The form is simulated when unset.
    #[arg(long, env = "PORTFOLIO_CONTACT_ENDPOINT")]
    contact_endpoint: Option<Url>,
    /// Simulated submission delay in milliseconds.
    #[arg(long, default_value_t = 1000)]
    submit_delay_ms: u64,
    /// Section anchor to scroll to once the page is laid out, e.g. `#projects`.
    #[arg(long)]
    section: Option<String>,
}

impl Args {
    fn into_startup(self) -> StartupConfig {
        let (content, content_error) = match &self.content {
            Some(path) => match PortfolioContent::load(path) {
                Ok(content) => (content, None),
                Err(err) => {
                    tracing::error!(path = %path.display(), "{err}; using built-in content");
                    (PortfolioContent::builtin(), Some(err.to_string()))
                }
            },
            None => (PortfolioContent::builtin(), None),
        };
        StartupConfig {
            content,
            content_error,
            submitter: SubmitterConfig::from_parts(
                self.contact_endpoint,
                Duration::from_millis(self.submit_delay_ms),
            ),
            initial_section: self.section,
        }
    }
}

/// Filter from `RUST_LOG`-style directives, `info` when unset or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> eframe::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let startup = Args::parse().into_startup();
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, startup.submitter.clone());

    let title = format!("{} | Portfolio", startup.content.profile.name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(cmd_tx, ui_rx, startup)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_simulated_submitter_and_builtin_content() {
        let startup = Args::parse_from(["portfolio_desktop"]).into_startup();
        assert_eq!(
            startup.submitter,
            SubmitterConfig::Simulated {
                delay: Duration::from_millis(1000)
            }
        );
        assert!(startup.content_error.is_none());
        assert_eq!(startup.content, PortfolioContent::builtin());
    }

    #[test]
    fn missing_content_file_falls_back_with_an_error() {
        let startup = Args::parse_from([
            "portfolio_desktop",
            "--content",
            "/definitely/not/here.toml",
            "--section",
            "#skills",
        ])
        .into_startup();
        assert!(startup.content_error.is_some());
        assert_eq!(startup.initial_section.as_deref(), Some("#skills"));
    }

    #[test]
    fn log_filter_honours_directives_and_defaults_to_info() {
        use tracing_subscriber::filter::LevelFilter;
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
