use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use credential_core::{CredentialForm, CredentialGateway, FormError, FormMode, Notifier};
use credential_shared::config::AppConfig;

mod commands;
mod host;

use commands::{Command, HELP};
use host::{ConsoleNotifier, SimulatedGateway};

#[derive(Parser, Debug)]
#[command(
    name = "credential-console",
    version,
    about = "Sign-in / registration form driven from the terminal"
)]
struct Args {
    /// Form mode: sign-in or register
    #[arg(long, default_value = "sign-in")]
    mode: String,

    /// Make the simulated credential service fail
    #[arg(long)]
    fail: bool,

    /// Simulated credential service latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    credential_shared::telemetry::init_telemetry(&config.telemetry)?;

    info!("Credential console starting...");

    if args.fail {
        config.simulation.fail = true;
    }
    if let Some(latency_ms) = args.latency_ms {
        config.simulation.latency_ms = latency_ms;
    }

    let mode = FormMode::from_str(&args.mode).ok_or_else(|| anyhow!("Unknown mode: {}", args.mode))?;
    let form = CredentialForm::new(
        mode,
        Arc::new(SimulatedGateway::new(&config.simulation)),
        Arc::new(ConsoleNotifier),
        Arc::new(config.messages),
    );

    println!("{} form. Type `help` for commands.", mode);
    print_form(&form);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            println!("{}", HELP);
            continue;
        };

        match command {
            Command::Set(field, value) => match form.set_field(field, value) {
                Ok(()) => print_errors(&form),
                Err(e) => println!("{}", e),
            },
            Command::Toggle(field) => match form.toggle_visibility(field) {
                Ok(_) => print_form(&form),
                Err(e) => println!("{}", e),
            },
            Command::Submit => submit(&form).await,
            Command::Reset => {
                form.reset();
                print_form(&form);
            }
            Command::ForgotPassword => {
                if let Err(e) = form.request_password_reset() {
                    println!("{}", e);
                }
            }
            Command::OAuth(provider) => form.start_oauth(provider),
            Command::Status => print_form(&form),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    info!("Credential console stopped.");
    Ok(())
}

async fn submit<G: CredentialGateway, N: Notifier>(form: &CredentialForm<G, N>) {
    let spinner = async {
        tokio::task::yield_now().await;
        if form.status().is_pending() {
            println!("{}", form.submit_label());
        }
    };

    let (result, ()) = tokio::join!(form.submit(), spinner);
    match result {
        Ok(status) => println!("status: {}", status.as_str()),
        Err(FormError::Invalid(_)) => print_errors(form),
        Err(e) => warn!("Submit rejected: {}", e),
    }
}

fn print_form<G: CredentialGateway, N: Notifier>(form: &CredentialForm<G, N>) {
    let visibility = form.visibility();
    for field in form.mode().fields() {
        let value = form.value(*field).unwrap_or_default();
        let shown = if visibility.is_shown(*field) {
            value
        } else {
            "•".repeat(value.chars().count())
        };
        let toggle = form
            .visibility_label(*field)
            .map(|label| format!("  [{}]", label))
            .unwrap_or_default();
        println!("  {:<16} {}{}", field.as_str(), shown, toggle);
    }
    println!(
        "  {:<16} {} ({})",
        "submit",
        form.submit_label(),
        form.status().as_str()
    );
    print_errors(form);
}

fn print_errors<G: CredentialGateway, N: Notifier>(form: &CredentialForm<G, N>) {
    for (field, error) in form.errors().iter() {
        println!("  ! {}: {}", field, error.message);
    }
}
