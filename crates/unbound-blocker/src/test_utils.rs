use std::collections::HashMap;
use std::sync::Mutex;

use unbound_blocker_lib::ControlSubcommand;

use crate::{ControlCommand, ControlOutput};

/// In-memory stand-in for `unbound-control(8)` that records every invocation
#[derive(Default)]
pub struct FakeControl {
    responses: HashMap<ControlSubcommand, ControlOutput>,
    invocations: Mutex<Vec<(ControlSubcommand, Option<String>)>>,
}

impl FakeControl {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets what `list_local_zones` prints
    pub fn with_listing(self, stdout: &str) -> Self {
        self.with_response(
            ControlSubcommand::ListLocalZones,
            ControlOutput {
                stdout: stdout.into(),
                code: Some(0),
                ..Default::default()
            },
        )
    }

    pub fn with_exit_code(self, subcommand: ControlSubcommand, code: Option<i32>) -> Self {
        self.with_response(
            subcommand,
            ControlOutput {
                stderr: format!("error from {}\n", subcommand),
                code,
                ..Default::default()
            },
        )
    }

    pub fn with_response(mut self, subcommand: ControlSubcommand, output: ControlOutput) -> Self {
        self.responses.insert(subcommand, output);
        self
    }

    pub fn invocations(&self) -> Vec<(ControlSubcommand, Option<String>)> {
        self.invocations.lock().expect("lock shouldn't be poisoned").clone()
    }

    pub fn subcommands(&self) -> Vec<ControlSubcommand> {
        self.invocations().into_iter().map(|(subcommand, _)| subcommand).collect()
    }

    pub fn input_of(&self, subcommand: ControlSubcommand) -> Option<String> {
        self.invocations()
            .into_iter()
            .find_map(|(invoked, input)| (invoked == subcommand).then_some(input).flatten())
    }
}

impl ControlCommand for FakeControl {
    async fn run(
        &self,
        subcommand: ControlSubcommand,
        input: Option<&str>,
    ) -> anyhow::Result<ControlOutput> {
        self.invocations
            .lock()
            .expect("lock shouldn't be poisoned")
            .push((subcommand, input.map(ToOwned::to_owned)));

        Ok(self.responses.get(&subcommand).cloned().unwrap_or(ControlOutput {
            code: Some(0),
            ..Default::default()
        }))
    }
}
