use clap::Parser;
use package_self_service::config::{Command, FileConfig};
use package_self_service::domain::model::{Employee, StatusPage};
use package_self_service::domain::ports::Settings;
use package_self_service::utils::{logger, validation::Validate};
use package_self_service::{
    CliConfig, HttpShippingService, InMemoryDirectory, StatusAggregator, SubmissionOrchestrator,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting package-self-service CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // A TOML file, when given, wins over the CLI flags.
    let (base_url, page, seed): (String, StatusPage, Option<Vec<Employee>>) =
        match &config.config {
            Some(path) => {
                let file = match FileConfig::from_file(path) {
                    Ok(file) => file,
                    Err(e) => {
                        tracing::error!("Failed to load config file {}: {}", path, e);
                        eprintln!("❌ {}", e);
                        std::process::exit(1);
                    }
                };
                (
                    file.shipping_base_url().to_string(),
                    file.status_page(),
                    file.seed_employees(),
                )
            }
            None => (config.shipping_base_url().to_string(), config.status_page(), None),
        };

    let directory = Arc::new(match seed {
        Some(employees) => InMemoryDirectory::new(employees),
        None => InMemoryDirectory::with_seed(),
    });

    let result = run(&config.command, directory, &base_url, page).await;

    if let Err(e) = result {
        tracing::error!("Operation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    command: &Command,
    directory: Arc<InMemoryDirectory>,
    base_url: &str,
    page: StatusPage,
) -> package_self_service::Result<()> {
    match command {
        Command::Receivers => {
            let orchestrator = SubmissionOrchestrator::new(
                directory,
                HttpShippingService::new(base_url.to_string()),
            );
            let receivers = orchestrator.available_receivers();
            println!("{}", serde_json::to_string_pretty(&receivers)?);
        }
        Command::Submit {
            package_name,
            weight_grams,
            sender_id,
            receiver_id,
        } => {
            let orchestrator = SubmissionOrchestrator::new(
                directory,
                HttpShippingService::new(base_url.to_string()),
            );
            let confirmation = orchestrator
                .submit(package_name, *weight_grams, sender_id, receiver_id)
                .await?;
            println!("✅ Package submitted successfully: {}", confirmation);
        }
        Command::List { sender_id, status } => {
            let aggregator = StatusAggregator::new(
                directory,
                HttpShippingService::new(base_url.to_string()),
                page,
            );
            let packages = aggregator
                .list_for_sender(sender_id, status.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&packages)?);
        }
        Command::Details { package_id } => {
            let aggregator = StatusAggregator::new(
                directory,
                HttpShippingService::new(base_url.to_string()),
                page,
            );
            match aggregator.package_details(package_id).await? {
                Some(view) => println!("{}", serde_json::to_string_pretty(&view)?),
                None => println!("No package found for id {}", package_id),
            }
        }
    }
    Ok(())
}
