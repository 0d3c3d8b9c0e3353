use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use link_rank::page_rank::distribution::{self, DistributionPageRank};
use link_rank::page_rank::stochastic::{self, StochasticPageRank};
use link_rank::page_rank::PageRank;
use link_rank::{adjacency_matrix, edge_list, top_ranked, LinkGraph};

#[derive(Parser)]
#[command(name = "link-rank", version, about = "Estimates page ranks from link information")]
struct Cli {
    /// Text file of links among pages, one `source target` pair per line
    /// (stdin when absent)
    datafile: Option<PathBuf>,

    /// Page rank estimation method
    #[arg(long, short, value_enum, default_value_t = Method::Stochastic)]
    method: Method,

    /// Number of walker moves for the stochastic method
    #[arg(long, short, default_value_t = 1_000_000)]
    repeats: usize,

    /// Number of propagation steps for the distribution method
    #[arg(long, short, default_value_t = 100)]
    steps: usize,

    /// Number of results shown
    #[arg(long, short, default_value_t = 20)]
    number: usize,

    /// Graph representation printed before ranking
    #[arg(long, value_enum, default_value_t = Representation::List)]
    representation: Representation,

    /// Seed for the stochastic method's random generator (OS entropy when
    /// absent)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Stochastic,
    Distribution,
}

#[derive(Clone, Copy, ValueEnum)]
enum Representation {
    List,
    Matrix,
    Edges,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let graph = load_graph(cli.datafile.as_deref())?;

    match cli.representation {
        Representation::List => {}
        Representation::Matrix => print_matrix(&graph),
        Representation::Edges => print_edges(&graph),
    }
    println!(
        "Graph has {} nodes and {} edges.",
        graph.node_count(),
        graph.edge_count()
    );

    let started = Instant::now();
    let ranks = rank(&graph, &cli)?;
    let elapsed = started.elapsed();

    eprintln!("Top {} pages:", cli.number);
    let mut stdout = io::stdout().lock();
    for (node, rank) in top_ranked(&ranks, cli.number) {
        writeln!(stdout, "{:.2}\t{node}", 100.0 * rank)?;
    }
    eprintln!("Calculation took {:.2} seconds.", elapsed.as_secs_f64());
    Ok(())
}

fn load_graph(path: Option<&Path>) -> Result<LinkGraph> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            LinkGraph::from_reader(BufReader::new(file))
                .with_context(|| format!("cannot parse {}", path.display()))
        }
        None => LinkGraph::from_reader(io::stdin().lock()).context("cannot parse stdin"),
    }
}

fn rank(graph: &LinkGraph, cli: &Cli) -> Result<HashMap<String, f64, ahash::RandomState>> {
    let ranks = match cli.method {
        Method::Stochastic => {
            let rng = match cli.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let config = stochastic::Config {
                repeats: cli.repeats,
            };
            StochasticPageRank::new(graph, &config, rng)?.calc().page_rank
        }
        Method::Distribution => {
            let config = distribution::Config { steps: cli.steps };
            DistributionPageRank::new(graph, &config)?.calc().page_rank
        }
    };
    Ok(ranks)
}

fn print_matrix(graph: &LinkGraph) {
    println!("Adjacency matrix:");
    for row in adjacency_matrix(graph) {
        let cells: Vec<String> = row.iter().map(u8::to_string).collect();
        println!("[{}]", cells.join(", "));
    }
}

fn print_edges(graph: &LinkGraph) {
    println!("Edge list:");
    for (source, target) in edge_list(graph) {
        println!("{source} -> {target}");
    }
}
