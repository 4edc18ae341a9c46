use clap::Parser;
use contact_section::config::Command;
use contact_section::domain::model::{StatusKind, SubmitOutcome};
use contact_section::utils::error::{ContactError, ErrorSeverity};
use contact_section::utils::logger::{self, LogFormat};
use contact_section::utils::validation::Validate;
use contact_section::{CliConfig, ContactSection, EmailJsClient, SiteConfig};
use maud::Render;

fn exit_with(e: &ContactError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(unset)"
    } else {
        value
    }
}

fn load_config(path: Option<&str>) -> SiteConfig {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            SiteConfig::from_file(path).unwrap_or_else(|e| exit_with(&e))
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            SiteConfig::default()
        }
    };

    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = load_config(cli.config.as_deref());
    let client = EmailJsClient::new(config.emailjs_config())?;

    if let Command::Check = cli.command {
        let emailjs = client.config();
        println!("✅ Configuration is valid");
        println!("📋 Fields: {}", config.field_keys().collect::<Vec<_>>().join(", "));
        println!("📮 Endpoint: {}", emailjs.endpoint);
        println!(
            "🔑 Service: {}, template: {}, access token set: {}",
            display_or_unset(&emailjs.service_id),
            display_or_unset(&emailjs.template_id),
            !emailjs.access_token.is_empty()
        );
        return Ok(());
    }

    let section = ContactSection::new(&config, client);

    match cli.command {
        Command::Check => {}
        Command::Render { busy } => {
            let mut view = section.render();
            if busy {
                view.submit_label = contact_section::render::SENDING_LABEL;
            }
            println!("{}", view.render().into_string());
        }
        Command::Send {
            name,
            email,
            message,
            fields,
        } => {
            let standard = [("name", name), ("email", email), ("message", message)];
            for (key, value) in standard {
                if value.is_empty() {
                    continue;
                }
                if let Err(e) = section.set_field(key, &value) {
                    exit_with(&e);
                }
            }
            for (key, value) in &fields {
                if let Err(e) = section.set_field(key, value) {
                    exit_with(&e);
                }
            }

            match section.submit().await {
                SubmitOutcome::InvalidEmail => {
                    eprintln!("❌ {}", section.email_error());
                    std::process::exit(2);
                }
                SubmitOutcome::AlreadySending | SubmitOutcome::Sent | SubmitOutcome::Failed => {
                    let status = section.status();
                    match status.kind {
                        StatusKind::Success => println!("✅ {}", status.text),
                        _ => {
                            eprintln!("❌ {}", status.text);
                            std::process::exit(2);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
