use std::io::Write;

use anyhow::Result;
use common::{Assistant, ExplainTarget};
use tracing::info;

/// Prints what the report chat shows after a value is clicked: the prompt
/// posted for the reader, then the reply. The reply is chosen by the bare
/// value.
pub fn explain(assistant: &Assistant, value: &str, context: Option<&str>, out: &mut impl Write) -> Result<()> {
    let target = ExplainTarget::new(value, context);
    info!("Explaining {}", target.value);

    writeln!(out, "> {}", target.prompt())?;
    writeln!(out, "{}", assistant.respond(&target.value))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::DashboardCatalog;

    fn lines(value: &str, context: Option<&str>) -> (String, String) {
        let assistant = DashboardCatalog::builtin().unwrap().report.assistant;
        let mut out = Vec::new();
        explain(&assistant, value, context, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let (prompt, reply) = text.split_once('\n').unwrap();
        (prompt.to_string(), reply.to_string())
    }

    #[test]
    fn test_explain_with_context() {
        let (prompt, reply) = lines("$287M", Some("Total Revenue"));
        assert_eq!(prompt, "> Explain $287M in the context of Total Revenue");

        let assistant = DashboardCatalog::builtin().unwrap().report.assistant;
        assert!(reply.starts_with(assistant.respond("$287M").lines().next().unwrap()));
    }

    #[test]
    fn test_explain_without_context() {
        let (prompt, _) = lines("2,847", None);
        assert_eq!(prompt, "> Explain what 2,847 means in this report");
    }
}
