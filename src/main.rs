use anyhow::Context;
use clap::Parser;
use order_message::config::order_config::{DEFAULT_LANGUAGE, DEFAULT_MESSAGES_DIR};
use order_message::utils::{logger, validation::Validate};
use order_message::{CliConfig, FileMessageSource, Order, OrderConfig, OrderSummary};
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    language: &'a str,
    #[serde(flatten)]
    summary: OrderSummary,
    message: String,
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = run(config).await {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: CliConfig) -> anyhow::Result<()> {
    tracing::debug!("CLI config: {:?}", config);
    config.validate().context("invalid command-line arguments")?;

    let order_file = match &config.order {
        Some(path) => {
            tracing::info!("📁 Loading order from: {}", path.display());
            let order_file = OrderConfig::from_file(path)
                .with_context(|| format!("failed to load order file '{}'", path.display()))?;
            order_file
                .validate()
                .with_context(|| format!("invalid order file '{}'", path.display()))?;
            Some(order_file)
        }
        None => None,
    };

    let messages_dir = config
        .messages_dir
        .as_deref()
        .or_else(|| order_file.as_ref().map(OrderConfig::messages_directory))
        .unwrap_or(DEFAULT_MESSAGES_DIR);
    let language = config
        .lang
        .as_deref()
        .or_else(|| order_file.as_ref().map(OrderConfig::default_language))
        .unwrap_or(DEFAULT_LANGUAGE);

    let source = FileMessageSource::new(messages_dir);
    let mut order = match &order_file {
        Some(order_file) => order_file.build_order(source)?,
        None => Order::new(source),
    };
    for arg in &config.items {
        order.add_item(arg.to_item()?);
    }

    tracing::info!(
        "Order has {} item(s), total {}, taxes {}",
        order.len(),
        order.total()?,
        order.taxes()?
    );

    let message = order
        .print_message(language)
        .await
        .with_context(|| format!("failed to render message for '{}'", language))?;

    if config.json {
        let output = JsonOutput {
            language,
            summary: order.summary()?,
            message,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", message);
    }

    Ok(())
}
