use anyhow::Result;
use contact_section::config::emailjs::DEFAULT_ENDPOINT;
use contact_section::utils::validation::Validate;
use contact_section::{ContactSection, EmailJsClient, SiteConfig};
use maud::Render;
use tempfile::TempDir;

#[tokio::test]
async fn test_load_config_file_and_render() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("site.toml");
    tokio::fs::write(
        &config_path,
        r#"
[site]
full_name = "Ada Lovelace"
email = "ada@example.com"

[contact]
sub_text = "Get in touch"
title = "Contact."

[[contact.form]]
key = "name"
span = "Your Name"
placeholder = "Who are you?"

[[contact.form]]
key = "company"
span = "Company"
placeholder = "Where do you work?"

[[contact.form]]
key = "email"
span = "Your Email"
placeholder = "Where can I reach you?"

[[contact.form]]
key = "message"
span = "Your Message"
placeholder = "Say something"

[emailjs]
service_id = "service_abc"
template_id = "template_xyz"
access_token = "public-key"
timeout_seconds = 10
"#,
    )
    .await?;

    let config = SiteConfig::from_file(&config_path)?;
    config.validate()?;

    let emailjs = config.emailjs_config();
    assert_eq!(emailjs.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(emailjs.service_id, "service_abc");
    assert_eq!(emailjs.timeout(), std::time::Duration::from_secs(10));

    let section = ContactSection::new(&config, EmailJsClient::new(emailjs)?);
    section.set_field("company", "Analytical Engines")?;

    let view = section.render();
    let keys: Vec<_> = view.fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["name", "company", "email", "message"]);

    let html = view.render().into_string();
    assert!(html.contains("Analytical Engines"));
    assert!(html.find(r#"name="company""#) < html.find(r#"name="email""#));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SiteConfig::from_file("/definitely/not/here/site.toml").unwrap_err();
    assert!(matches!(err, contact_section::ContactError::IoError(_)));
}

#[test]
fn test_bad_endpoint_fails_validation() {
    let config = SiteConfig::from_toml_str(
        r#"
[site]
full_name = "Ada Lovelace"
email = "ada@example.com"

[emailjs]
endpoint = "ftp://api.emailjs.com"
"#,
    )
    .unwrap();
    assert!(config.validate().is_err());
}

// Process environment is shared between tests, so every EMAILJS_* case lives here.
#[test]
fn test_emailjs_settings_from_environment() {
    use contact_section::config::emailjs::{
        ACCESS_TOKEN_VAR, ENDPOINT_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR,
    };
    use contact_section::EmailJsConfig;

    std::env::set_var(SERVICE_ID_VAR, "service_env");
    std::env::set_var(TEMPLATE_ID_VAR, "template_env");
    std::env::set_var(ACCESS_TOKEN_VAR, "token_env");
    std::env::set_var(ENDPOINT_VAR, "http://localhost:9000/send");

    let config = EmailJsConfig::from_env();
    assert_eq!(config.service_id, "service_env");
    assert_eq!(config.template_id, "template_env");
    assert_eq!(config.access_token, "token_env");
    assert_eq!(config.endpoint, "http://localhost:9000/send");

    // No [emailjs] section falls back to the environment.
    let site = SiteConfig::from_toml_str(
        r#"
[site]
full_name = "Ada Lovelace"
email = "ada@example.com"
"#,
    )
    .unwrap();
    assert!(site.emailjs.is_none());
    assert_eq!(site.emailjs_config().service_id, "service_env");

    std::env::remove_var(ENDPOINT_VAR);
    assert_eq!(EmailJsConfig::from_env().endpoint, DEFAULT_ENDPOINT);

    std::env::set_var(ENDPOINT_VAR, "");
    assert_eq!(EmailJsConfig::from_env().endpoint, DEFAULT_ENDPOINT);

    // Missing secrets become empty strings rather than errors.
    std::env::remove_var(SERVICE_ID_VAR);
    std::env::remove_var(TEMPLATE_ID_VAR);
    std::env::remove_var(ACCESS_TOKEN_VAR);
    std::env::remove_var(ENDPOINT_VAR);
    let config = EmailJsConfig::from_env();
    assert_eq!(config.service_id, "");
    assert_eq!(config.template_id, "");
    assert_eq!(config.access_token, "");
    assert!(config.validate().is_ok());
}
