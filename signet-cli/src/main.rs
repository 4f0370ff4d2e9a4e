//! Signet CLI
//!
//! Builds sign-in credential sets from the command line and prints them.
//!
//! # Usage
//!
//! ```bash
//! # Email/password sign-in with an HTTP session payload
//! signet email --email test@host.com --password test123
//!
//! # Facebook token sign-in, printed as JSON with secrets shown
//! signet --format json --reveal facebook --token TOKEN123
//!
//! # Build the three sample sign-ins
//! signet demo
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use signet_core::{
    ApiHostPayload, ApiKeyPayload, CredentialBuilder, CredentialSet, Secret, SessionPayload,
    SignInFields, SignInMethod,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

mod config;

use config::{CliConfig, OutputFormat};

const DEMO_TOKEN: &str = "2318120938jnjnkjnkda123123n8sa4qdas";

#[derive(Parser)]
#[command(name = "signet")]
#[command(about = "Build and inspect sign-in credential sets")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Print secret values instead of [REDACTED]
    #[arg(long, global = true)]
    reveal: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Email/password sign-in with an HTTP session payload
    Email {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Facebook token sign-in with an API key payload
    Facebook {
        #[arg(short, long)]
        token: String,
    },

    /// Google token sign-in with an API key and host payload
    Google {
        #[arg(short, long)]
        token: String,
    },

    /// Build the sample email, Facebook and Google sign-ins
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;

    init_logging(&config.log_level, cli.verbose);
    debug!("Loaded configuration from {:?}", config.config_path);

    let output = Output::new(&cli, &config);

    let reports = match cli.command {
        Commands::Email { email, password } => vec![email_sign_in(&email, &password, output.reveal)?],
        Commands::Facebook { token } => vec![facebook_sign_in(&token, output.reveal)],
        Commands::Google { token } => vec![google_sign_in(&token, output.reveal)],
        Commands::Demo => vec![
            email_sign_in("test@host.com", "test123", output.reveal)?,
            facebook_sign_in(DEMO_TOKEN, output.reveal),
            google_sign_in(DEMO_TOKEN, output.reveal),
        ],
    };

    info!(count = reports.len(), "built credential sets");
    output.print(&reports)
}

fn init_logging(level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { level })
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn email_sign_in(email: &str, password: &str, reveal: bool) -> Result<Report> {
    let set = CredentialBuilder::<SessionPayload>::try_new()?
        .with_email(email)
        .with_password(password)
        .build();
    Ok(Report::new("email", &set, reveal))
}

fn facebook_sign_in(token: &str, reveal: bool) -> Report {
    let set = CredentialBuilder::<ApiKeyPayload>::new()
        .with_facebook_token(token)
        .build();
    Report::new("facebook", &set, reveal)
}

fn google_sign_in(token: &str, reveal: bool) -> Report {
    let set = CredentialBuilder::<ApiHostPayload>::new()
        .with_google_token(token)
        .build();
    Report::new("google", &set, reveal)
}

/// Public values of a payload, for display.
trait DescribePayload {
    fn describe(&self) -> Vec<(&'static str, String)>;
}

impl DescribePayload for SessionPayload {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![("session", "reqwest::Client".to_string())]
    }
}

impl DescribePayload for ApiKeyPayload {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![("api_key", self.api_key().to_string())]
    }
}

impl DescribePayload for ApiHostPayload {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.api_key().to_string()),
            ("host", self.host().to_string()),
        ]
    }
}

/// Printable view of a built credential set.
#[derive(Debug, Serialize)]
struct Report {
    provider: &'static str,
    email: Option<String>,
    password: Option<String>,
    facebook_token: Option<String>,
    google_token: Option<String>,
    methods: Vec<SignInMethod>,
    payload: Vec<(&'static str, String)>,
}

impl Report {
    fn new<P: DescribePayload>(provider: &'static str, set: &CredentialSet<P>, reveal: bool) -> Self {
        let show = |secret: Option<&Secret>| {
            secret.map(|s| if reveal { s.expose().to_string() } else { s.to_string() })
        };

        Self {
            provider,
            email: set.email().map(str::to_string),
            password: show(set.password()),
            facebook_token: show(set.facebook_token()),
            google_token: show(set.google_token()),
            methods: set.methods(),
            payload: set.payload().describe(),
        }
    }

    fn render_text(&self) -> String {
        let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        let methods: Vec<&str> = self.methods.iter().map(SignInMethod::as_str).collect();

        let mut out = format!("[{}]\n", self.provider);
        out.push_str(&format!("  email:          {}\n", field(&self.email)));
        out.push_str(&format!("  password:       {}\n", field(&self.password)));
        out.push_str(&format!("  facebook_token: {}\n", field(&self.facebook_token)));
        out.push_str(&format!("  google_token:   {}\n", field(&self.google_token)));
        out.push_str(&format!("  methods:        {}\n", methods.join(", ")));
        for (key, value) in &self.payload {
            out.push_str(&format!("  payload.{}: {}\n", key, value));
        }
        out
    }
}

struct Output {
    format: OutputFormat,
    reveal: bool,
}

impl Output {
    fn new(cli: &Cli, config: &CliConfig) -> Self {
        Self {
            format: cli.format.unwrap_or(config.format),
            reveal: cli.reveal || config.reveal_secrets,
        }
    }

    fn print(&self, reports: &[Report]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = match reports {
                    [single] => serde_json::to_string_pretty(single)?,
                    many => serde_json::to_string_pretty(many)?,
                };
                println!("{}", json);
            }
            OutputFormat::Text => {
                for report in reports {
                    print!("{}", report.render_text());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_report_redacts_by_default() {
        let report = email_sign_in("test@host.com", "test123", false).unwrap();

        assert_eq!(report.email.as_deref(), Some("test@host.com"));
        assert_eq!(report.password.as_deref(), Some("[REDACTED]"));
        assert!(report.facebook_token.is_none());
        assert_eq!(report.methods, vec![SignInMethod::EmailPassword]);
    }

    #[test]
    fn test_reveal_shows_secret_values() {
        let report = facebook_sign_in("TOKEN123", true);
        assert_eq!(report.facebook_token.as_deref(), Some("TOKEN123"));
    }

    #[test]
    fn test_google_report_payload() {
        let report = google_sign_in("TOKEN123", false);
        assert_eq!(
            report.payload,
            vec![
                ("api_key", "some api key".to_string()),
                ("host", "https://google.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_text_marks_absent_fields() {
        let text = facebook_sign_in("TOKEN123", false).render_text();

        assert!(text.starts_with("[facebook]\n"));
        assert!(text.contains("  email:          -\n"));
        assert!(text.contains("  facebook_token: [REDACTED]\n"));
        assert!(text.contains("  methods:        facebook\n"));
        assert!(!text.contains("TOKEN123"));
    }

    #[test]
    fn test_report_json_uses_null_for_absent() {
        let value = serde_json::to_value(google_sign_in("g", true)).unwrap();

        assert!(value["email"].is_null());
        assert_eq!(value["google_token"], "g");
        assert_eq!(value["methods"][0], "google");
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["signet", "google", "--token", "t", "--format", "json", "--reveal"])
            .unwrap();
        let output = Output::new(&cli, &CliConfig::default());

        assert_eq!(output.format, OutputFormat::Json);
        assert!(output.reveal);
    }
}
