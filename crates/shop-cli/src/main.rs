//! shop CLI: Two-pane product browser for the terminal

mod logging;

use clap::{Parser, Subcommand};
use shop_core::{Catalog, ShopConfig, Viewport};
use shop_tui::{headless, ShopApp, TuiError};
use std::path::PathBuf;

/// Browse the shop catalog in a list/detail terminal UI
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive UI (default when no command specified)
    Tui,

    /// Render a single frame to stdout
    Render {
        /// Terminal width in columns
        #[arg(long, default_value = "80")]
        cols: u16,

        /// Terminal height in rows
        #[arg(long, default_value = "24")]
        rows: u16,

        /// Select a product by name before rendering
        #[arg(long)]
        select: Option<String>,
    },

    /// Print the catalog
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the layout mode chosen for a width in density-independent units
    Layout {
        /// Width in dp
        #[arg(allow_negative_numbers = true)]
        width_dp: f32,
    },
}

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TuiError> {
    let config = ShopConfig::load_or_default(cli.config.as_deref())?.with_env_overrides();

    match cli.command {
        None | Some(Commands::Tui) => shop_tui::run_tui(&config),
        Some(Commands::Render { cols, rows, select }) => {
            println!("{}", render_frame(&config, cols, rows, select.as_deref())?);
            Ok(())
        }
        Some(Commands::Catalog { json }) => {
            cmd_catalog(json);
            Ok(())
        }
        Some(Commands::Layout { width_dp }) => {
            println!("{}", config.layout_policy().decide(width_dp));
            Ok(())
        }
    }
}

/// Render one frame, optionally after selecting a product by name.
fn render_frame(
    config: &ShopConfig,
    cols: u16,
    rows: u16,
    select: Option<&str>,
) -> Result<String, TuiError> {
    let mut app = ShopApp::new(config, Catalog::reference(), Viewport::new(cols, rows));
    if let Some(name) = select {
        let product = app
            .catalog()
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| TuiError::UnknownProduct(name.to_string()))?;
        app.select(product);
    }
    headless::render_to_string(&app)
}

fn cmd_catalog(json: bool) {
    let catalog = Catalog::reference();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&catalog).expect("failed to serialize")
        );
        return;
    }

    for product in &catalog {
        println!("{:<12} {:>6}  {}", product.name, product.price, product.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_tui() {
        let cli = Cli::try_parse_from(["shop"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "shop", "render", "--cols", "100", "--select", "Product B", "--config", "shop.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("shop.json")));
        match cli.command {
            Some(Commands::Render { cols, rows, select }) => {
                assert_eq!(cols, 100);
                assert_eq!(rows, 24);
                assert_eq!(select.as_deref(), Some("Product B"));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_parse_layout_negative_width() {
        let cli = Cli::try_parse_from(["shop", "layout", "-5"]).unwrap();
        match cli.command {
            Some(Commands::Layout { width_dp }) => assert!((width_dp + 5.0).abs() < f32::EPSILON),
            _ => panic!("expected layout command"),
        }
    }

    #[test]
    fn test_render_frame_with_selection() {
        let screen = render_frame(&ShopConfig::default(), 100, 24, Some("Product B")).unwrap();
        assert!(screen.contains("Product A"));
        assert!(screen.contains("$150"));
    }

    #[test]
    fn test_render_frame_unknown_product() {
        let err = render_frame(&ShopConfig::default(), 46, 24, Some("Product Z")).unwrap_err();
        assert!(matches!(err, TuiError::UnknownProduct(name) if name == "Product Z"));
    }

    #[test]
    fn test_config_breakpoint_changes_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        std::fs::write(&path, r#"{"breakpoint_dp": 900}"#).unwrap();
        let config = ShopConfig::load(&path).unwrap();

        // 800 dp is below the configured breakpoint, so the detail fills the screen.
        let screen = render_frame(&config, 100, 24, Some("Product B")).unwrap();
        assert!(!screen.contains("Product A"));
        assert!(screen.contains("Back"));
    }
}
