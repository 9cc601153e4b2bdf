//! Route query over a JSON waypoint graph.
//!
//! Run: cargo run --bin route -- demos/data/campus.json 20 17

use std::env;
use std::path::Path;
use std::process;

use waygraph_demos::load_graph;
use waygraph_paths::{PathFinder, path_cost};

fn main() {
    let args: Vec<String> = env::args().collect();
    let [_, file, start, goal] = args.as_slice() else {
        eprintln!("usage: route <graph.json> <start> <goal>");
        process::exit(2);
    };

    let graph = match load_graph(Path::new(file)) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error reading {file}: {e}");
            process::exit(1);
        }
    };

    let mut finder = PathFinder::new();
    match finder.astar_path(&graph, start, goal) {
        Some(route) => {
            println!("route: {}", route.join(" -> "));
            if let Some(cost) = path_cost(&graph, &route) {
                println!("total cost: {cost}");
            }
        }
        None => println!("no route from {start} to {goal}"),
    }
}
