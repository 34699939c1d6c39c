use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dsstne::{Layer, NetworkConfig};

/// Load a network file and list its input and output layers.
#[derive(Parser, Debug)]
#[command(name = "dsstne", version, about)]
struct Cli {
    /// Path to a JSON network description
    network_file: PathBuf,

    /// Batch size handed to the engine
    #[arg(short, long, default_value_t = NetworkConfig::DEFAULT_BATCH_SIZE)]
    batch_size: u32,

    /// Print the layers as a JSON document instead of text lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct LayerReport<'a> {
    network: &'a str,
    batch_size: u32,
    input_layers: &'a [Layer],
    output_layers: &'a [Layer],
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

/// Loads the network named on the command line and writes its layers to `out`.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = NetworkConfig::with()
        .network_file_path(&cli.network_file)
        .batch_size(cli.batch_size)
        .build()
        .context("invalid arguments")?;
    let network = dsstne::load(config)
        .with_context(|| format!("failed to load {}", cli.network_file.display()))?;

    if cli.json {
        let report = LayerReport {
            network: network.name(),
            batch_size: network.batch_size(),
            input_layers: network.input_layers(),
            output_layers: network.output_layers(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for layer in network.input_layers() {
            writeln!(out, "Found input layer: {}", layer)?;
        }
        for layer in network.output_layers() {
            writeln!(out, "Found output layer: {}", layer)?;
        }
    }

    network.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use dsstne::{Attribute, ErrorKind, LayerKind, LayerSpec, NetworkSpec};
    use tempfile::tempdir;

    fn write_network(path: &Path) {
        let spec = NetworkSpec {
            name: "gl".to_string(),
            description: None,
            layers: vec![
                LayerSpec::new("input", LayerKind::Input, vec![128]).with_attributes(vec![Attribute::Sparse]),
                LayerSpec::new("hidden", LayerKind::Hidden, vec![64]),
                LayerSpec::new("output", LayerKind::Output, vec![16, 8]),
            ],
        };
        spec.save_json(path).unwrap();
    }

    fn run_with(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("dsstne").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_prints_found_layer_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gl.json");
        write_network(&path);

        let output = run_with(&[path.to_str().unwrap()]).unwrap();
        assert_eq!(
            output,
            "Found input layer: input (kind=Input, dims=128, attributes=sparse)\n\
             Found output layer: output (kind=Output, dims=16x8, attributes=none)\n"
        );
    }

    #[test]
    fn test_json_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gl.json");
        write_network(&path);

        let output = run_with(&[path.to_str().unwrap(), "--json", "--batch-size", "8"]).unwrap();
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(report["network"], "gl");
        assert_eq!(report["batch_size"], 8);
        assert_eq!(report["input_layers"][0]["name"], "input");
        assert_eq!(report["input_layers"][0]["kind"], "input");
        assert_eq!(report["output_layers"][0]["dimensions"], serde_json::json!([16, 8]));
        assert_eq!(report["output_layers"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = run_with(&[path.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().starts_with("failed to load"));
        let cause = err.downcast_ref::<dsstne::Error>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::Io);
        assert_eq!(cause.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let err = run_with(&["gl.json", "--batch-size", "0"]).unwrap_err();
        let cause = err.downcast_ref::<dsstne::Error>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::Validation);
    }
}
