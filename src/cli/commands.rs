//! Command implementations for the prefixsim CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{PrefixSimError, Result};
use crate::matching::config::MatchConfig;
use crate::matching::dictionary::{load_dictionary, read_phrases};
use crate::matching::engine::MatchEngine;
use crate::matching::ranking::rank;
use crate::service::{MAX_REQUEST_BYTES, handle_request};
use crate::tree::Visit;

/// Execute a CLI command.
pub fn execute_command(args: PrefixSimArgs) -> Result<()> {
    let engine = MatchEngine::with_config(load_config(&args)?);

    match &args.command {
        Command::Search(search_args) => {
            let results = run_search(&engine, search_args)?;
            output_result("Search results", &results, &args)
        }
        Command::Request(request_args) => run_request(&engine, request_args, &args),
        Command::Batch(batch_args) => {
            let results = run_batch(&engine, batch_args)?;
            output_result("Batch results", &results, &args)
        }
        Command::Tree(tree_args) => {
            let dump = run_tree(&engine, tree_args)?;
            output_result("Token tree", &dump, &args)
        }
    }
}

/// Load the engine configuration named on the command line, or the default.
pub fn load_config(args: &PrefixSimArgs) -> Result<MatchConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            MatchConfig::load(path)
        }
        None => Ok(MatchConfig::default()),
    }
}

/// Match one query against a dictionary file.
pub fn run_search(engine: &MatchEngine, args: &SearchArgs) -> Result<SearchResults> {
    let threshold = args.threshold.resolve(engine.config())?;
    let dictionary = load_dictionary(&args.dictionary)?;

    let start_time = Instant::now();
    let matches = engine.exec(&dictionary, &args.query, threshold);
    let mut matches = if args.raw { matches } else { rank(matches) };
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }
    let duration = start_time.elapsed();

    Ok(SearchResults {
        query: args.query.clone(),
        threshold,
        matches,
        duration_ms: duration.as_millis() as u64,
    })
}

/// Answer a JSON request read from a file or stdin. The response envelope is
/// always printed as JSON.
fn run_request(engine: &MatchEngine, args: &RequestArgs, cli_args: &PrefixSimArgs) -> Result<()> {
    let body = match &args.request_file {
        Some(path) => read_request_body(fs::File::open(path)?)?,
        None => read_request_body(io::stdin().lock())?,
    };

    let response = handle_request(engine, &body);
    let stdout = io::stdout();
    write_json(&mut stdout.lock(), &response, cli_args.pretty)
}

/// Read a request body, ignoring anything past [`MAX_REQUEST_BYTES`].
pub fn read_request_body<R: Read>(reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.take(MAX_REQUEST_BYTES).read_to_end(&mut bytes)?;
    // A body cut inside a character is rejected later as malformed JSON.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Match every query of a file. Queries run in parallel, each building its
/// own tree; results keep the order of the queries file.
pub fn run_batch(engine: &MatchEngine, args: &BatchArgs) -> Result<BatchResults> {
    let threshold = args.threshold.resolve(engine.config())?;
    let dictionary = load_dictionary(&args.dictionary)?;
    let queries = read_phrases(io::BufReader::new(fs::File::open(&args.queries)?))?;

    let pool = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = args.threads {
            builder = builder.num_threads(threads);
        }
        builder
            .build()
            .map_err(|e| PrefixSimError::other(format!("failed to start worker pool: {e}")))?
    };

    let start_time = Instant::now();
    let entries: Vec<BatchEntry> = pool.install(|| {
        queries
            .par_iter()
            .map(|query| BatchEntry {
                query: query.clone(),
                matches: rank(engine.exec(&dictionary, query, threshold)),
            })
            .collect()
    });
    let duration = start_time.elapsed();

    let seconds = duration.as_secs_f64();
    let queries_per_second = if seconds > 0.0 {
        entries.len() as f64 / seconds
    } else {
        0.0
    };
    debug!(
        "batch of {} queries on {} threads in {:?}",
        entries.len(),
        pool.current_num_threads(),
        duration
    );

    Ok(BatchResults {
        threshold,
        entries,
        duration_ms: duration.as_millis() as u64,
        queries_per_second,
    })
}

/// Dump the token tree of a dictionary, depth first.
pub fn run_tree(engine: &MatchEngine, args: &TreeArgs) -> Result<TreeDump> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let tree = engine.build_tree(&dictionary);
    let prefix = args
        .prefix
        .as_deref()
        .map(|prefix| engine.normalize(prefix).into_owned())
        .unwrap_or_default();

    let mut entries = Vec::new();
    tree.each_prefix(|node| {
        // Keys that neither extend nor lead to the prefix are dead branches.
        if !node.key.starts_with(&prefix) && !prefix.starts_with(node.key) {
            return Visit::SKIP_SUBTREE;
        }

        let depth = node.depth();
        if args.max_depth.is_some_and(|max_depth| depth > max_depth) {
            return Visit::SKIP_SUBTREE;
        }
        if node.key.starts_with(&prefix) {
            entries.push(TreeEntry {
                key: node.key.to_string(),
                depth,
                is_key: node.is_key(),
                values: node.values.to_vec(),
            });
        }

        match args.max_depth {
            Some(max_depth) if depth >= max_depth => Visit::SKIP_SUBTREE,
            _ => Visit::CONTINUE,
        }
    });

    Ok(TreeDump {
        keys: tree.len(),
        nodes: tree.node_count(),
        entries,
    })
}
