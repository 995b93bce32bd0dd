//! Sports Science Calculators (sportcalc)
//!
//! An MCP server exposing the energy expenditure and sweat-rate calculators.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sportcalc::activities::ActivityTable;
use sportcalc::build_info;
use sportcalc::config;
use sportcalc::mcp::SportcalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config::DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let activities_path = config::activities_path();
    build_info::print_startup_banner(&activities_path);

    info!(path = %activities_path.display(), "Loading activity table");

    // Without the reference table the energy calculator cannot run at all
    let activities = ActivityTable::load(&activities_path).map_err(|e| {
        error!(error = %e, "Activity dataset could not be loaded, aborting");
        e
    })?;

    let service = SportcalcService::new(activities_path, activities);

    info!(build = %build_info::BuildInfo::current(), "Starting MCP server on stdio");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
