//! Customers CLI - customer record management
//!
//! Thin client for the customers HTTP API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use customers::{Customer, CustomerId, EmailAddress, PersonalName};

use api::{CustomerRecord, CustomersClient, UpsertResult};
use config::Config;

#[derive(Parser)]
#[command(name = "customers")]
#[command(about = "Customers CLI - customer record management", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store an API key for protected endpoints
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Check that the API is reachable
    Health,

    /// List all customers
    List,

    /// Show one customer
    Get {
        /// Customer ID
        id: i64,
    },

    /// Insert or replace a customer
    Upsert {
        /// Customer ID
        id: i64,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the API base URL
    SetUrl {
        url: String,
    },
    /// Set the API key
    SetKey {
        key: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key } => cmd_login(key).await,
        Commands::Health => cmd_health().await,
        Commands::List => cmd_list().await,
        Commands::Get { id } => cmd_get(id).await,
        Commands::Upsert { id, first_name, last_name, email } => {
            cmd_upsert(id, &first_name, &last_name, &email).await
        }
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

fn client(config: &Config) -> CustomersClient {
    CustomersClient::new(&config.base_url, config.api_key.as_deref())
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Listing exercises the auth layer; health alone is public.
    let client = CustomersClient::new(&config.base_url, Some(&api_key));
    print!("Testing API key... ");

    match client.list_customers().await {
        Ok(_) => println!("{}", "OK".green()),
        Err(e) => {
            println!("{}", "Failed".red());
            bail!("Could not authenticate with the customers API: {}", e);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);
    Ok(())
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let health = client(&config).health().await?;

    println!(
        "{} {} (v{}, {} customers)",
        "✓".green(),
        health.status.bold(),
        health.version,
        health.customers
    );
    Ok(())
}

async fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let customers = client(&config).list_customers().await?;

    if customers.is_empty() {
        println!("{}", "No customers found.".yellow());
        return Ok(());
    }

    println!("{}", "Customers:".bold());
    for customer in &customers {
        print_customer(customer);
    }
    println!("\n{} customer(s)", customers.len());

    Ok(())
}

async fn cmd_get(id: i64) -> Result<()> {
    // Reject obviously bad IDs before a round trip
    let id = CustomerId::new(id)?;

    let config = Config::load()?;
    let customer = client(&config).get_customer(id.value()).await?;
    print_customer(&customer);

    Ok(())
}

async fn cmd_upsert(id: i64, first_name: &str, last_name: &str, email: &str) -> Result<()> {
    let customer = match Customer::assemble(
        CustomerId::new(id),
        PersonalName::new(first_name, last_name),
        EmailAddress::new(email),
    ) {
        Ok(customer) => customer,
        Err(errors) => {
            println!("{}", "Invalid customer:".red());
            for error in errors.errors() {
                println!("  {} {}", format!("{}:", error.field()).dimmed(), error);
            }
            bail!("{} field(s) failed validation", errors.errors().len());
        }
    };

    let record = CustomerRecord {
        id: customer.id().value(),
        first_name: customer.name().first().to_string(),
        last_name: customer.name().last().to_string(),
        email: customer.email().as_str().to_string(),
    };

    let config = Config::load()?;
    let result = client(&config).upsert_customer(&record).await?;

    println!("{} {}", "✓".green(), upsert_summary(&result));
    print_customer(&result.customer);

    Ok(())
}

/// One-line outcome of an upsert. Delivery of the change notification is
/// not reported by the server, so it is not claimed here.
fn upsert_summary(result: &UpsertResult) -> String {
    let verb = if result.created { "Created" } else { "Updated" };
    if result.email_changed {
        format!("{} customer (email changed)", verb)
    } else {
        format!("{} customer", verb)
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            println!("  API URL: {}", config.base_url);
            println!(
                "  API Key: {}",
                config.api_key.as_deref().map_or("(not set)".dimmed().to_string(), |_| {
                    "********".to_string()
                })
            );
        }
        ConfigAction::SetUrl { url } => {
            config.set_base_url(&url);
            config.save()?;
            println!("{} API URL set to {}", "✓".green(), config.base_url);
        }
        ConfigAction::SetKey { key } => {
            config.set_api_key(key);
            config.save()?;
            println!("{} API key saved", "✓".green());
        }
    }

    Ok(())
}

fn print_customer(customer: &CustomerRecord) {
    println!(
        "  {} {} {} {}",
        format!("#{}", customer.id).cyan(),
        customer.first_name.bold(),
        customer.last_name.bold(),
        format!("<{}>", customer.email).dimmed()
    );
}
