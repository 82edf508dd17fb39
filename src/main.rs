use clap::{ArgAction, Parser, Subcommand};
use ordtree::{binary_search, merge_sort, Error, Tree};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Walk through the binary search tree and the merge sort / binary search pipeline
#[derive(Parser, Debug)]
#[command(name = "ordtree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more, repeat for even more (-d info, -dd debug, -ddd trace). RUST_LOG wins if set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a tree by inserting the values in order, then inspect or delete one
    Tree {
        /// Values to insert; the first one becomes the root
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Describe the node holding this value and its parent
        #[arg(long, allow_negative_numbers = true)]
        inspect: Option<i64>,

        /// Delete this value and show what is left
        #[arg(long, allow_negative_numbers = true)]
        delete: Option<i64>,
    },

    /// Merge sort the values, then binary search the result
    Sort {
        /// Values to sort
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Value to look up in the sorted sequence
        #[arg(long, allow_negative_numbers = true)]
        find: Option<i64>,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let result = match cli.command {
        Commands::Tree {
            values,
            inspect,
            delete,
        } => run_tree(values, inspect, delete),
        Commands::Sort { values, find } => {
            run_sort(values, find);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_tree(values: Vec<i64>, inspect: Option<i64>, delete: Option<i64>) -> Result<(), Error> {
    let mut tree: Tree<_> = values.into_iter().collect();
    tracing::info!(len = tree.len(), "built tree");
    println!("This is what the tree currently contains: {}", join(&tree));

    if let Some(value) = inspect {
        let node = tree.search(&value).ok_or(Error::NotFound)?;
        println!("{node}");
        match tree.lookup_parent(&value) {
            Some(parent) => println!("Its parent is: {parent}"),
            None => println!("It is the root."),
        }
    }

    if let Some(value) = delete {
        let removal = tree.delete(&value)?;
        println!("Bye-bye, {value}!");
        if removal.was_replaced_by_child() {
            println!("Its place was taken by one of its children.");
        } else {
            println!("It's gone for good!");
        }
        println!("These are the values left in the tree: {}", join(&tree));
    }

    Ok(())
}

fn run_sort(values: Vec<i64>, find: Option<i64>) {
    let sorted = merge_sort(values);
    println!("After sorting: {}", join(&sorted));

    if let Some(target) = find {
        match binary_search(&sorted, &target) {
            Some(index) => println!("{target} has index {index}"),
            None => println!("{target} is not in the sequence"),
        }
    }
}

fn join<'a>(values: impl IntoIterator<Item = &'a i64>) -> String {
    values
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
