use clap::Parser;
use project_catalog::utils::logger;
use project_catalog::CliConfig;

// Installs the global subscriber, so it lives in its own test binary.
#[test]
fn test_log_json_installs_a_subscriber() {
    let cli = CliConfig::parse_from(["project-catalog", "--log-json", "techs"]);
    assert!(cli.log_json);

    assert!(!tracing::dispatcher::has_been_set());
    logger::init_logger(cli.verbose, cli.log_json);
    assert!(tracing::dispatcher::has_been_set());

    tracing::info!(command = "techs", "json logging ready");
}
