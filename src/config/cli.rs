use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-section")]
#[command(about = "Render and submit the portfolio contact form")]
pub struct CliConfig {
    /// Path to the site TOML configuration; built-in defaults are used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the contact section as HTML
    Render {
        /// Render with the busy flag set
        #[arg(long)]
        busy: bool,
    },
    /// Submit one message through EmailJS
    Send {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
        /// Extra fields as key=value, for forms with more than the standard three
        #[arg(long = "field", value_parser = parse_key_value)]
        fields: Vec<(String, String)>,
    },
    /// Validate the configuration and exit
    Check,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_send_command() {
        let cli = CliConfig::parse_from([
            "contact-section",
            "send",
            "--name",
            "Ada",
            "--email",
            "ada@x.io",
            "--message",
            "hi",
            "--field",
            "company=Analytical Engines",
        ]);
        match cli.command {
            Command::Send { name, email, fields, .. } => {
                assert_eq!(name, "Ada");
                assert_eq!(email, "ada@x.io");
                assert_eq!(fields, vec![("company".to_string(), "Analytical Engines".to_string())]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_field_pair() {
        assert!(parse_key_value("no-equals").is_err());
        assert_eq!(parse_key_value("a=b=c").unwrap(), ("a".to_string(), "b=c".to_string()));
    }
}
