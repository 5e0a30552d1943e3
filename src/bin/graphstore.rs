use std::{env, path::PathBuf, process};

use graphstore::{GraphStoreError, SeedConfig, SqliteStore, client::CommandLineConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let store = match open_store(&config) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = run_command(&store, &config) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn open_store(config: &CommandLineConfig) -> Result<SqliteStore, String> {
    if config.database == "memory" {
        SqliteStore::open_in_memory().map_err(|e| e.to_string())
    } else {
        SqliteStore::open(PathBuf::from(&config.database)).map_err(|e| e.to_string())
    }
}

fn run_command(store: &SqliteStore, config: &CommandLineConfig) -> Result<(), GraphStoreError> {
    let service = store.service();
    match config.command.as_str() {
        "status" => {
            let snapshot = service.snapshot()?;
            println!(
                "nodes={} edges={}",
                snapshot.nodes.len(),
                snapshot.edges.len()
            );
            Ok(())
        }
        "graph" => {
            println!("{}", render_json(&service.snapshot()?)?);
            Ok(())
        }
        "seed" => {
            println!("{}", render_json(&service.seed()?)?);
            Ok(())
        }
        "seed-random" => {
            println!("{}", render_json(&service.seed_random(&SeedConfig::default())?)?);
            Ok(())
        }
        "clear" => service.clear(),
        "reachable" => {
            // Flag presence is checked at parse time.
            if let Some(node) = config.node {
                let nodes = store.engine().reachable_nodes(node)?;
                println!("{}", render_json(&nodes)?);
            }
            Ok(())
        }
        other => {
            println!("unknown command {other}, defaulting to status");
            let snapshot = service.snapshot()?;
            println!(
                "nodes={} edges={}",
                snapshot.nodes.len(),
                snapshot.edges.len()
            );
            Ok(())
        }
    }
}

fn render_json<T: serde::Serialize>(value: &T) -> Result<String, GraphStoreError> {
    serde_json::to_string_pretty(value).map_err(|e| GraphStoreError::query(e.to_string()))
}
