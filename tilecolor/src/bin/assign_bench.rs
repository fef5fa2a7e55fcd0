#[cfg(feature = "bench_assign")]
use std::time::Instant;
#[cfg(feature = "bench_assign")]
use tilecolor::config::EngineConfig;
#[cfg(feature = "bench_assign")]
use tilecolor::{Board, Strategy};

#[cfg(not(feature = "bench_assign"))]
fn main() {
    panic!("assign_bench requires --features bench_assign");
}

#[cfg(feature = "bench_assign")]
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut rows = 24i32;
    let mut cols = 24i32;
    let mut repeats = 20usize;
    let mut strategy = Strategy::Backtracking;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--rows=") {
            if let Ok(v) = val.parse() {
                rows = v;
            }
        } else if let Some(val) = a.strip_prefix("--cols=") {
            if let Ok(v) = val.parse() {
                cols = v;
            }
        } else if let Some(val) = a.strip_prefix("--repeats=") {
            if let Ok(v) = val.parse() {
                repeats = v;
            }
        } else if a == "--greedy" {
            strategy = Strategy::Greedy;
        }
    }

    let config = EngineConfig {
        strategy,
        ..EngineConfig::default()
    };
    let t0 = Instant::now();
    let mut board = match Board::with_config(rows, cols, config) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("bad config: {}", e);
            return;
        }
    };
    let build_ms = t0.elapsed().as_secs_f64() * 1000.0;

    // Walk the interaction point along the first column, one region per repeat.
    let names: Vec<String> = board
        .graph()
        .vertices()
        .filter_map(|v| board.graph().name(v).map(str::to_string))
        .collect();
    let mut times = Vec::with_capacity(repeats);
    let mut recolored = 0usize;
    for r in 0..repeats {
        let Some(name) = names.get((r * 4 * cols.max(1) as usize + r % 4) % names.len().max(1))
        else {
            break;
        };
        let t = Instant::now();
        if matches!(board.interact(name), Ok(i) if i.is_recolored()) {
            recolored += 1;
        }
        times.push(t.elapsed().as_secs_f64() * 1000.0);
    }
    let avg = if times.is_empty() {
        0.0
    } else {
        times.iter().sum::<f64>() / (times.len() as f64)
    };

    println!(
        "grid={}x{} vertices={} strategy={:?} build_ms={:.3} avg_interact_ms={:.3} recolored={}/{}",
        rows,
        cols,
        names.len(),
        strategy,
        build_ms,
        avg,
        recolored,
        times.len()
    );
}
