//! `platform-gate rules` command

use anyhow::Result;

use crate::cli::FormatArgs;
use crate::Session;
use platform_gate::gate::errors::join_platforms;
use platform_gate::util::MessageFormat;
use platform_gate::FrameworkRuleTable;

pub fn execute(args: FormatArgs, session: &Session) -> Result<()> {
    let table = FrameworkRuleTable::builtin();

    match session.message_format(&args) {
        MessageFormat::Human => {
            println!("Frameworks:");
            for rule in table.rules() {
                println!(
                    "  {} -> {}",
                    rule.framework,
                    join_platforms(&rule.platforms)
                );
            }
            println!();
            println!("Properties (sdk = \"{}\"):", table.desktop_sdk());
            for prop in table.properties() {
                println!("  {} -> {}", prop.property, prop.framework);
            }
        }
        MessageFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }

    Ok(())
}
