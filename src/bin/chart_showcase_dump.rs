use std::path::PathBuf;
use std::sync::Arc;

use chart_showcase::api::{
    DemoConfig, DemoViewController, FsAssetFetcher, MockDataSource, init_chart_modules,
};
use chart_showcase::telemetry::init_default_tracing;
use futures::StreamExt;

struct CliArgs {
    config_path: Option<PathBuf>,
    assets_root: PathBuf,
    refresh: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            DemoConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DemoConfig::default(),
    };

    let registry = init_chart_modules();
    let controller = DemoViewController::new(
        registry,
        &config,
        Arc::new(MockDataSource::default()),
        Arc::new(FsAssetFetcher::new(args.assets_root.clone())),
    )
    .map_err(|err| err.to_string())?;

    if args.refresh {
        controller.refresh().await.map_err(|err| err.to_string())?;
        if let Some(patch) = controller.merge_option() {
            print_section("merge", &patch.to_json_pretty().map_err(|e| e.to_string())?);
        }
    }

    print_section(
        "line",
        &controller
            .line_option()
            .to_json_pretty()
            .map_err(|err| err.to_string())?,
    );
    print_section(
        "bar",
        &controller
            .bar_option()
            .to_json_pretty()
            .map_err(|err| err.to_string())?,
    );

    match controller.tree_options().next().await {
        Some(Ok(option)) => {
            print_section("tree", &option.to_json_pretty().map_err(|e| e.to_string())?)
        }
        Some(Err(err)) => eprintln!("tree chart skipped: {err}"),
        None => {}
    }
    Ok(())
}

fn print_section(name: &str, body: &str) {
    println!("// {name}");
    println!("{body}");
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config_path = None;
    let mut assets_root = PathBuf::from(".");
    let mut refresh = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--assets" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --assets".to_owned())?;
                assets_root = PathBuf::from(value);
            }
            "--refresh" => refresh = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin chart_showcase_dump -- [--config <path>] [--assets <dir>] [--refresh]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        assets_root,
        refresh,
    })
}
