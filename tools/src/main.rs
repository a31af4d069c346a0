//! mock-runner: headless driver for the InsightDesk mock generators.
//!
//! Usage:
//!   mock-runner --query "Which device has the highest fraud rate?"
//!   mock-runner --seed 12345 --user USR-48213
//!   mock-runner --seed 12345 --config generator.json --ipc-mode

use anyhow::Result;
use insightdesk_core::{
    api::{Reply, Response},
    config::GeneratorConfig,
    format::format_currency,
    generator::MockGenerator,
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let seed: Option<u64> = find_arg(&args, "--seed").and_then(|s| s.parse().ok());
    let query = find_arg(&args, "--query");
    let user = find_arg(&args, "--user");

    let config = match find_arg(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let mut generator = match seed {
        Some(seed) => MockGenerator::seeded(seed, config),
        None => MockGenerator::from_entropy(config),
    };

    if ipc_mode {
        return run_ipc_loop(&mut generator);
    }

    println!("InsightDesk mock-runner");
    println!("  seed:  {}", generator.master_seed());
    println!();

    if let Some(question) = query {
        let result = generator.analyze(question);
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(user_id) = user {
        print_history(&mut generator, user_id);
    } else {
        print_demo(&mut generator)?;
    }
    Ok(())
}

fn run_ipc_loop(generator: &mut MockGenerator) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    log::info!("ipc: serving requests, seed={}", generator.master_seed());

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            log::info!("ipc: stdin closed");
            break;
        }
        if buffer.trim().is_empty() {
            continue;
        }

        match generator.handle_line(&buffer) {
            Reply::Quit => break,
            Reply::Respond(response) => write_response(&mut stdout, &response)?,
        }
    }
    Ok(())
}

fn write_response(out: &mut impl Write, response: &Response) -> Result<()> {
    writeln!(out, "{}", response.to_json_line())?;
    out.flush()?;
    Ok(())
}

fn print_history(generator: &mut MockGenerator, user_id: &str) {
    let history = generator.user_history(user_id);
    println!("=== USER HISTORY: {} ===", history.user_id);
    println!("  orders:       {}", history.total_orders);
    println!("  total spend:  {}", format_currency(history.total_spend as f64, false));
    println!("  avg order:    {}", format_currency(history.avg_order as f64, false));
    println!(
        "  top category: {}",
        history.top_category.map(|c| c.label()).unwrap_or("N/A")
    );
    println!(
        "  top device:   {}",
        history.top_device.map(|d| d.label()).unwrap_or("N/A")
    );
    println!("  fraud flags:  {}", history.fraud_count);
    println!();
    for month in &history.monthly_spending {
        println!("  {:<8} {}", month.month, format_currency(month.amount as f64, false));
    }
}

fn print_demo(generator: &mut MockGenerator) -> Result<()> {
    println!("=== SAMPLE ANSWERS ===");
    for question in [
        "Which device has the highest fraud rate?",
        "Which age group spends most on Food?",
        "What hour has the peak transaction volume?",
        "",
    ] {
        let result = generator.analyze(question);
        let branch = result.branch.map(|b| format!("{b:?}")).unwrap_or_default();
        println!(
            "  {:<45} -> {branch} ({} points)",
            format!("{question:?}"),
            result.chart_data.len()
        );
        for metric in &result.metrics {
            match &metric.change {
                Some(change) => println!("      {}: {} ({change})", metric.label, metric.value),
                None => println!("      {}: {}", metric.label, metric.value),
            }
        }
    }

    println!();
    println!("=== LIVE ORDERS ===");
    for order in generator.live_orders() {
        println!(
            "  {} {:<8} {:<13} {:>10}{}",
            order.order_id,
            order.device.label(),
            order.category.label(),
            format_currency(order.amount as f64, false),
            if order.is_fraud { "  FRAUD" } else { "" }
        );
    }

    println!();
    println!("=== MAP ===");
    let points = generator.geo_data(None);
    println!("{}", serde_json::to_string(&points)?);
    Ok(())
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
