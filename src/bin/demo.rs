//! Builds a tree from random values, unbalances it with large inserts and
//! rebalances it again, printing the tree and its traversals along the way.

use std::fmt::Debug;

use array_bst::{Tree, TreeResult};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Walk an array-seeded BST through a build, unbalance and rebalance cycle
#[derive(Parser, Debug)]
#[command(name = "demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How many random values to seed the tree with
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Exclusive upper bound for the seed values
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1 << 30))]
    max: u32,

    /// How many values in `max..2 * max` to insert to unbalance the tree
    #[arg(long, default_value_t = 5)]
    extra: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> TreeResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut rng = seeded_rng(cli.seed);
    log::debug!("{:?}", cli);

    println!("Creating random numbers < {} ...", cli.max);
    let values: Vec<u32> = (0..cli.count).map(|_| rng.gen_range(0..cli.max)).collect();
    println!("{:?}", values);

    println!("Creating Binary Search Tree ...");
    let mut tree = Tree::build(values);
    print!("{}", tree);
    report_balance(&tree)?;
    print_orders(&tree);

    println!("Unbalancing the tree by adding numbers >= {} ...", cli.max);
    for _ in 0..cli.extra {
        tree.insert(rng.gen_range(cli.max..cli.max * 2));
    }
    print!("{}", tree);
    report_balance(&tree)?;

    println!("Rebalancing the tree ...");
    tree.rebalance();
    print!("{}", tree);
    report_balance(&tree)?;
    print_orders(&tree);

    Ok(())
}

/// A reproducible generator for `seed`, or one seeded from OS entropy.
fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn report_balance<T: Ord>(tree: &Tree<T>) -> TreeResult<()> {
    if tree.is_empty() {
        println!("The tree is empty.");
        return Ok(());
    }
    println!("Is the tree balanced? {}", tree.is_balanced()?);
    Ok(())
}

fn print_orders<T: Clone + Debug>(tree: &Tree<T>) {
    println!("Printing elements in level order:");
    println!("{:?}", tree.level_order());

    println!("Printing elements in pre order:");
    println!("{:?}", tree.pre_order());

    println!("Printing elements in post order:");
    println!("{:?}", tree.post_order());

    println!("Printing elements in order:");
    println!("{:?}", tree.in_order());
}
