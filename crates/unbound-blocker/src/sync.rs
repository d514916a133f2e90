use unbound_blocker_lib::{
    blocking_zone_entry, encode_input, managed_domains, Blocklist, ControlError, ControlSubcommand,
};

use crate::{ControlCommand, ControlOutput};

/// Replaces the resolver's blocklist with a new one through its control command.
///
/// The current `always_null` zones are removed first and the new ones are added afterwards,
/// so no state has to be kept between runs.
pub struct ResolverSync<'a, C> {
    control: &'a C,
}

impl<'a, C: ControlCommand> ResolverSync<'a, C> {
    pub fn new(control: &'a C) -> Self {
        ResolverSync { control }
    }

    pub async fn synchronize(&self, blocklist: &Blocklist) -> anyhow::Result<()> {
        self.clear_blocklist().await?;
        self.load_blocklist(blocklist).await
    }

    /// Removes all zones managed by this tool, returns how many were removed
    pub async fn clear_blocklist(&self) -> anyhow::Result<usize> {
        tracing::info!("Clearing blocklist");
        tracing::info!("Obtaining current local zones");

        let output = self.invoke(ControlSubcommand::ListLocalZones, None).await?;
        let domains = managed_domains(&output.stdout);

        tracing::info!("Removing current blocklist ({} domains)", domains.len());
        if !domains.is_empty() {
            self.invoke(ControlSubcommand::LocalZonesRemove, Some(&encode_input(&domains)))
                .await?;
        }

        Ok(domains.len())
    }

    pub async fn load_blocklist(&self, blocklist: &Blocklist) -> anyhow::Result<()> {
        tracing::info!("Filling blocklist ({} domains)", blocklist.len());

        if !blocklist.is_empty() {
            let mut domains: Vec<&String> = blocklist.iter().collect();
            domains.sort_unstable();

            let input = encode_input(domains.into_iter().map(|domain| blocking_zone_entry(domain)));
            self.invoke(ControlSubcommand::LocalZones, Some(&input)).await?;
        }

        tracing::info!("Success");
        Ok(())
    }

    /// Runs a subcommand and turns an unsuccessful exit into a [`ControlError`]
    async fn invoke(
        &self,
        subcommand: ControlSubcommand,
        input: Option<&str>,
    ) -> anyhow::Result<ControlOutput> {
        let output = self.control.run(subcommand, input).await?;

        // Always surface stderr before looking at the exit code
        for line in output.stderr.lines().filter(|line| !line.trim().is_empty()) {
            tracing::warn!(%subcommand, "{}", line);
        }

        let error = match output.code {
            Some(0) => return Ok(output),
            Some(code) => ControlError::NonZeroExit { subcommand, code },
            None => ControlError::Terminated { subcommand },
        };
        tracing::error!("{}", error);

        Err(error.into())
    }
}
