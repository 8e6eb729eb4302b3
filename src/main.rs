//! # Zebrella CLI
//!
//! Command-line interface for ZPL label printing.
//!
//! ## Usage
//!
//! ```bash
//! # List printer models and templates
//! zebrella list
//!
//! # Print the default badge with its default content
//! zebrella print --address 10.0.0.9
//!
//! # Print a test label
//! zebrella print --test --address 10.0.0.9
//!
//! # Show the command without sending it
//! zebrella -vv print --check --json '{"template": "nameBadge", "content": {...}}'
//!
//! # Store the badge logo on the printer
//! zebrella upload-graphic logo.png --name E:CAI.GRF --width 400 --address 10.0.0.9
//!
//! # Accept print requests over HTTP
//! zebrella serve --listen 0.0.0.0:8080 --address 10.0.0.9
//! ```

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use zebrella::{
    ZebrellaError,
    config::{Config, DEFAULT_ADDRESS, DEFAULT_LISTEN, PrintParameters, ServerConfig},
    graphic::StoredGraphic,
    print::{PrintOutcome, PrintService},
    printer::{PrinterModel, PrinterOverride},
    template::{TEST_TEMPLATE, TemplateCatalog},
    transport::TcpTransport,
};

/// Zebrella - ZPL label printer utility
#[derive(Parser, Debug)]
#[command(name = "zebrella")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Printer selection shared by all subcommands that talk to a printer.
#[derive(Args, Debug, Clone)]
struct PrinterArgs {
    /// Printer model (see `zebrella list`)
    #[arg(long, default_value = "ZEBRA_GX430T")]
    model: String,

    /// Printer host name or IP address
    #[arg(long, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Printer port (defaults to the model's port)
    #[arg(long)]
    port: Option<u16>,

    /// Password sent before the label
    #[arg(long)]
    password: Option<String>,

    /// Seconds allowed for connect, send and reply
    #[arg(long, default_value = "10")]
    timeout: u64,
}

impl PrinterArgs {
    fn config(&self) -> Result<Config, ZebrellaError> {
        let base = PrinterModel::lookup(&self.model)?.profile(self.address.clone());
        let printer = base.merge(&PrinterOverride {
            port: self.port,
            password: self.password.clone(),
            ..PrinterOverride::default()
        });
        Ok(Config {
            printer,
            timeout: Duration::from_secs(self.timeout),
            ..Config::default()
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one label
    Print {
        #[command(flatten)]
        printer: PrinterArgs,

        /// Template to print (defaults to basicNameBadge)
        #[arg(long)]
        template: Option<String>,

        /// Printing parameters as JSON: {"printer": {...}, "template": "...", "content": {...}}
        #[arg(long, value_name = "PARAMS")]
        json: Option<String>,

        /// Dry run; build the label but do not send it
        #[arg(short, long)]
        check: bool,

        /// Print the test label
        #[arg(long, conflicts_with_all = ["json", "template"])]
        test: bool,
    },

    /// Accept label content over HTTP and print it
    Serve {
        #[command(flatten)]
        printer: PrinterArgs,

        /// Template every request prints with
        #[arg(long)]
        template: Option<String>,

        /// Address to listen on
        #[arg(long, default_value = DEFAULT_LISTEN)]
        listen: SocketAddr,
    },

    /// Convert an image and store it on the printer as a graphic
    UploadGraphic {
        /// Image file (PNG, JPEG, BMP, ...)
        file: PathBuf,

        #[command(flatten)]
        printer: PrinterArgs,

        /// Stored name on the printer
        #[arg(long, default_value = "E:CAI.GRF")]
        name: String,

        /// Target width in dots (keeps aspect ratio)
        #[arg(long)]
        width: Option<u32>,

        /// Print the download command instead of sending it
        #[arg(short, long)]
        check: bool,
    },

    /// List printer models and templates
    List,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("zebrella={level},tower_http={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), ZebrellaError> {
    match command {
        Commands::List => {
            println!("Printer models:");
            for model in PrinterModel::ALL {
                println!(
                    "  {:<14} {:<14} {} dpi",
                    model.key, model.name, model.resolution_x
                );
            }
            println!("\nTemplates:");
            for template in TemplateCatalog::builtin().iter() {
                println!("  {:<16} {}", template.name(), template.description());
            }
            Ok(())
        }

        Commands::Print {
            printer,
            template,
            json,
            check,
            test,
        } => {
            let mut config = printer.config()?;
            config.dry_run = check;
            if let Some(template) = template {
                config.template = template;
            }
            if test {
                info!("Printing a test label");
                config.template = TEST_TEMPLATE.to_string();
            }

            let job = match json {
                Some(json) => config.job_with(PrintParameters::from_json(&json)?)?,
                None => config.job(None),
            };

            let service = service(&config);
            let outcome = runtime()?.block_on(service.submit(job))?;
            match outcome {
                PrintOutcome::DryRun { command } => println!("{}", command),
                PrintOutcome::Printed { .. } => println!("Printed successfully!"),
            }
            Ok(())
        }

        Commands::Serve {
            printer,
            template,
            listen,
        } => {
            let mut config = printer.config()?;
            if let Some(template) = template {
                config.template = template;
            }
            // Fail at startup rather than on the first request
            TemplateCatalog::builtin().get(&config.template)?;

            let service = service(&config);
            let server = ServerConfig {
                listen_addr: listen,
                config,
            };
            runtime()?.block_on(zebrella::server::serve(server, service))
        }

        Commands::UploadGraphic {
            file,
            printer,
            name,
            width,
            check,
        } => {
            let config = printer.config()?;
            let graphic = StoredGraphic::from_path(name, &file, width)?;
            info!(
                reference = %graphic.reference,
                width = graphic.width,
                height = graphic.height,
                "Converted {}",
                file.display()
            );

            let command = graphic.to_zpl();
            if check {
                println!("{}", command);
                return Ok(());
            }

            let service = service(&config);
            runtime()?.block_on(service.send_raw(&config.printer, &command))?;
            println!(
                "Stored {} ({}x{} dots)",
                graphic.reference, graphic.width, graphic.height
            );
            Ok(())
        }
    }
}

fn service(config: &Config) -> PrintService {
    PrintService::new(Arc::new(TemplateCatalog::builtin()), Arc::new(TcpTransport))
        .with_timeout(config.timeout)
}

fn runtime() -> Result<tokio::runtime::Runtime, ZebrellaError> {
    Ok(tokio::runtime::Runtime::new()?)
}
