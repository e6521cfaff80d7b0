use anyhow::Result;
use clap::{Parser, Subcommand};
use dentalcare::{Config, cli, observability};
use dentalcare_contact::ContactFormData;

/// dentalcare - clinic contact page
#[derive(Parser)]
#[command(name = "dentalcare")]
#[command(about = "DentalCare contact page server", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send one contact message through the configured email provider
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        #[arg(long, default_value = "")]
        phone: String,

        /// agendamento, orcamento, duvida, emergencia or outro
        #[arg(long, default_value = "")]
        subject: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    observability::init_tracing(&config.logging)?;

    config.validate().map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Serve { host, port } => cli::serve(config, host, port).await,
        Commands::Send {
            name,
            email,
            message,
            phone,
            subject,
        } => {
            cli::send(
                config,
                ContactFormData {
                    name,
                    email,
                    phone,
                    subject,
                    message,
                },
            )
            .await
        }
    }
}
