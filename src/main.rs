use balanced_collections::avl_tree::{AvlTree, TraversalOrder};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::error::Error;
use std::str::FromStr;

const LOG_LEVEL_VAR: &str = "AVL_LOG";

fn initialize_logging() -> Result<(), Box<dyn Error>> {
    let level = env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Info);
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;
    Ok(())
}

fn print_traversal(tree: &AvlTree<i32>, order: TraversalOrder) {
    let keys = tree
        .traverse(order)
        .map(|key| key.to_string())
        .collect::<Vec<String>>();
    println!("{:?}: {}", order, keys.join(" "));
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;

    let mut tree = AvlTree::new();
    let keys = [10, 20, 30, 40, 50, 25];
    info!("inserting {:?}", keys);
    tree.extend(keys.iter().cloned());

    print_traversal(&tree, TraversalOrder::InOrder);
    print_traversal(&tree, TraversalOrder::PreOrder);
    println!("{}", tree.summary());

    match tree.search(&30) {
        Some(node) => println!("found {} at a subtree of height {}", node.key(), node.height()),
        None => println!("30 not found"),
    }

    info!("deleting 20");
    tree.delete(&20);
    print_traversal(&tree, TraversalOrder::InOrder);
    println!("{}", tree.summary());

    info!("inserting 1 through 20 in ascending order");
    let ascending = (1..=20).collect::<AvlTree<i32>>();
    println!("{}", ascending.summary());
    print_traversal(&ascending, TraversalOrder::InOrder);

    tree.check_invariants()?;
    ascending.check_invariants()?;
    Ok(())
}
