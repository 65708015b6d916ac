use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::ParsingStrategy;
use crate::domain::{Broker, OutputSchema};

/// The `(strategy, schema)` pair used to process one broker's
/// documents.
#[derive(Clone)]
pub struct DispatchEntry {
    pub strategy: Arc<dyn ParsingStrategy>,
    pub schema: Arc<OutputSchema>,
}

/// Static broker dispatch table, populated once at startup and
/// read-only afterwards. A lookup miss is a dispatch failure handled
/// by the worker, never a panic.
#[derive(Default)]
pub struct BrokerDispatch {
    entries: HashMap<Broker, DispatchEntry>,
}

impl BrokerDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        broker: Broker,
        strategy: Arc<dyn ParsingStrategy>,
        schema: Arc<OutputSchema>,
    ) {
        self.entries.insert(broker, DispatchEntry { strategy, schema });
    }

    pub fn resolve(&self, broker: Broker) -> Option<&DispatchEntry> {
        self.entries.get(&broker)
    }
}
