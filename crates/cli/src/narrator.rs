//! Renders narration and machine notices.
//!
//! Machines only record notices; the narrator drains an outbox, publishes the
//! envelopes on an in-memory bus and prints what its own subscription receives.

use std::fmt::Display;
use std::io::Write;

use vendsim_events::{Event, EventBus, EventEnvelope, InMemoryEventBus, Subscription};
use vendsim_inventory::{MachineEvent, VendingMachine};

use crate::config::OutputMode;

const WIDTH: usize = 70;

type Notice = EventEnvelope<MachineEvent>;

pub struct Narrator<W: Write> {
    out: W,
    output: OutputMode,
    bus: InMemoryEventBus<Notice>,
    subscription: Subscription<Notice>,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W, output: OutputMode) -> Self {
        let bus = InMemoryEventBus::new();
        let subscription = bus.subscribe();
        Self {
            out,
            output,
            bus,
            subscription,
        }
    }

    pub fn line(&mut self, text: impl Display) -> anyhow::Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn rule(&mut self, ch: char) -> anyhow::Result<()> {
        let rule: String = std::iter::repeat_n(ch, WIDTH).collect();
        self.line(rule)
    }

    /// Scenario banner.
    pub fn heading(&mut self, title: &str) -> anyhow::Result<()> {
        self.line("")?;
        self.rule('=')?;
        self.line(title)?;
        self.rule('=')
    }

    pub fn section(&mut self, title: &str) -> anyhow::Result<()> {
        self.line(format_args!("\n--- {title} ---"))
    }

    /// Publish and print every notice a machine recorded since the last call.
    pub fn relay(&mut self, machine: &mut VendingMachine) -> anyhow::Result<()> {
        self.relay_all(machine.take_events())
    }

    pub fn relay_all(&mut self, notices: Vec<Notice>) -> anyhow::Result<()> {
        for notice in notices {
            self.bus
                .publish(notice)
                .map_err(|e| anyhow::anyhow!("failed to publish notice: {e:?}"))?;
        }
        for notice in self.subscription.drain() {
            let marker = if notice.payload().is_warning() { "!" } else { " " };
            writeln!(self.out, " {marker}[{}] {}", notice.machine_label(), notice.payload())?;
        }
        Ok(())
    }

    /// Print a machine as a framed listing, or as a JSON snapshot.
    pub fn show_machine(&mut self, machine: &VendingMachine) -> anyhow::Result<()> {
        match self.output {
            OutputMode::Text => self.line(format_args!("\n{machine}")),
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(&machine.snapshot())?;
                self.line(json)
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
