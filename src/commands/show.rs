//! `show` command handlers.
use crate::cli::SequenceArgs;
use crate::management::{Entity, ManagementClient, Sequence};
use crate::table;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// `show sequence --name <NAME>`.
pub fn run_sequence(client: &ManagementClient<'_>, args: &SequenceArgs) -> Result<()> {
    tracing::info!("show sequence called");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    show_entity::<Sequence>(client, &args.name, &mut out)
}

/// Fetch an entity and print it as a table.
///
/// A non-200 status is logged and swallowed; transport and decode failures
/// are returned so the process exits non-zero.
pub fn show_entity<E: Entity>(
    client: &ManagementClient<'_>,
    name: &str,
    out: &mut dyn Write,
) -> Result<()> {
    match client.fetch_entity::<E>(name) {
        Ok(entity) => table::write_table(out, &entity.rows()).context("write table"),
        Err(err) if !err.is_fatal() => {
            tracing::error!(entity = E::KIND, entity_name = name, "{err}");
            Ok(())
        }
        Err(err) => Err(err).with_context(|| format!("get information of {} {name}", E::KIND)),
    }
}
