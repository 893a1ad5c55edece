use campuspay::application::engine::PaymentEngine;
use campuspay::application::{history, risk};
use campuspay::domain::ports::{OutcomePolicyBox, WalletStoreBox};
use campuspay::domain::transaction::PaymentRequest;
use campuspay::infrastructure::in_memory::InMemoryWalletStore;
use campuspay::infrastructure::random::SimulatedOutcomes;
use campuspay::interfaces::csv::ledger_writer::LedgerWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

/// Campus wallet demo: submits a simulated payment against an in-memory
/// session and prints the resulting ledger and balance.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment amount (the form range is 1..=5000)
    #[arg(long, requires = "receiver")]
    amount: Option<Decimal>,

    /// Who to pay
    #[arg(long, requires = "amount")]
    receiver: Option<String>,

    /// Payment purpose: fees, books, events, meals, transport or other
    #[arg(long, default_value = "other")]
    purpose: String,

    /// Optional free-text description
    #[arg(long)]
    description: Option<String>,

    /// Seed the fixed demo transaction history
    #[arg(long)]
    seed: bool,

    /// Probability that a submission succeeds
    #[arg(long, default_value_t = SimulatedOutcomes::DEFAULT_SUCCESS_RATE)]
    success_rate: f64,

    /// Simulated processing delay in milliseconds
    #[arg(long, default_value_t = 2000)]
    latency_ms: u64,

    /// Export the final ledger as CSV to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let store: WalletStoreBox = Box::new(InMemoryWalletStore::default());
    let policy: OutcomePolicyBox = Box::new(SimulatedOutcomes::new(cli.success_rate));
    let engine = PaymentEngine::new(store, policy)
        .with_latency(Duration::from_millis(cli.latency_ms));

    if cli.seed {
        engine.seed_demo_data().await.into_diagnostic()?;
    }

    let profile = engine.profile().await.into_diagnostic()?;
    println!("{} ({}) — {}", profile.name, profile.student_id, profile.course);
    println!("Balance: ${}", profile.wallet_balance.value());

    if let (Some(amount), Some(receiver)) = (cli.amount, cli.receiver) {
        let purpose = cli.purpose.parse().map_err(|e: String| miette!(e))?;
        let mut request = PaymentRequest::new(purpose, amount, receiver);
        if let Some(description) = cli.description {
            request = request.with_description(description);
        }

        let assessment = risk::assess(&request);
        println!(
            "\nSecurity check: {:.0}% ({:?}, {:?})",
            assessment.score * 100.0,
            assessment.level,
            assessment.recommendation
        );
        for factor in &assessment.factors {
            println!("  - {factor}");
        }

        let tx = engine.submit_payment(request).await.into_diagnostic()?;
        println!("\nPayment {}: ${} to {}", tx.status, tx.amount, tx.receiver);
        println!(
            "Balance: ${}",
            engine.balance().await.into_diagnostic()?.value()
        );
    }

    let ledger = engine.ledger().await.into_diagnostic()?;
    println!("\nTransactions ({})", ledger.len());
    for tx in history::recent(&ledger, 5) {
        println!(
            "  {}  {:<10} ${:>8}  {:<9} {}",
            tx.timestamp.format("%Y-%m-%d"),
            tx.purpose,
            tx.amount,
            tx.status,
            tx.receiver
        );
    }
    println!("Total spent: ${}", history::total_spent(&ledger));

    if let Some(path) = cli.export {
        let file = File::create(&path).into_diagnostic()?;
        LedgerWriter::new(file)
            .write_ledger(&ledger)
            .into_diagnostic()?;
        println!("Exported {} transactions to {}", ledger.len(), path.display());
    }

    Ok(())
}
