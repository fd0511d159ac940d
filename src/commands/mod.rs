//! Command dispatch.
pub mod show;

use crate::cli::{Command, ShowCommand};
use crate::config::ClientConfig;
use crate::management::auth::{BearerToken, HeaderProvider, NoAuth};
use crate::management::transport::UreqTransport;
use crate::management::ManagementClient;
use anyhow::Result;
use std::time::Duration;

/// Run one parsed command against the configured management API.
pub fn dispatch(command: &Command, config: &ClientConfig) -> Result<()> {
    let transport = UreqTransport::new(Duration::from_secs(config.timeout_secs));
    let auth = header_provider(config);
    let client = ManagementClient {
        base_url: &config.base_url,
        transport: &transport,
        auth: auth.as_ref(),
    };

    match command {
        Command::Show(ShowCommand::Sequence(args)) => show::run_sequence(&client, args),
    }
}

/// Bearer auth only when a token was supplied; otherwise no headers.
fn header_provider(config: &ClientConfig) -> Box<dyn HeaderProvider> {
    match &config.token {
        Some(token) => Box::new(BearerToken(token.clone())),
        None => Box::new(NoAuth),
    }
}
