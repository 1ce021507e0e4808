// src/bin/fixture_dump.rs
//
// Print the validated mock dashboard fixture as pretty JSON, in the
// exact wire shape consumers bind to.

use anyhow::Result;
use cdnreport::fixture;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // first access runs the load-time schema check
    let data = fixture::mock_data();
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
