//! `platform-gate host` command

use anyhow::Result;

use crate::cli::FormatArgs;
use crate::Session;
use platform_gate::util::MessageFormat;
use platform_gate::HostPlatform;

pub fn execute(args: FormatArgs, session: &Session) -> Result<()> {
    let host = HostPlatform::current();

    match session.message_format(&args) {
        MessageFormat::Human => println!("{}", host),
        MessageFormat::Json => println!(
            "{}",
            serde_json::json!({ "host": host, "known": host.is_known() })
        ),
    }

    Ok(())
}
