use std::io::Write;

use anyhow::Result;
use common::Assistant;
use tracing::{debug, info};

pub fn ask(assistant: &Assistant, query: &str, out: &mut impl Write) -> Result<()> {
    info!("Answering query");
    debug!("Query: {}", query);

    let reply = assistant.respond(query);
    writeln!(out, "{}", reply)?;

    Ok(())
}
