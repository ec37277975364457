//! Copies query parameters into a `Storage`, so a later page on the same origin can read them back.

use crate::{error::Error, query::QueryStringReader, storage::Storage};

/// Crowd-sourcing task identifiers a study page receives from the task platform.
pub const TASK_PARAMETERS: [&str; 4] = ["assignmentId", "hitId", "turkSubmitTo", "workerId"];

/// What a missing parameter is stored as.
pub const ABSENT_VALUE: &str = "undefined";

#[derive(Debug, Clone)]
pub struct PersisterConfig {
    known_parameters: Vec<String>,
    absent_value: String,
}

impl Default for PersisterConfig {
    fn default() -> Self {
        Self {
            known_parameters: TASK_PARAMETERS.iter().map(|s| s.to_string()).collect(),
            absent_value: ABSENT_VALUE.to_string(),
        }
    }
}

impl PersisterConfig {
    pub fn with_known_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_parameters = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_absent_value(mut self, value: impl Into<String>) -> Self {
        self.absent_value = value.into();
        self
    }

    pub fn known_parameters(&self) -> &[String] {
        &self.known_parameters
    }

    pub fn absent_value(&self) -> &str {
        &self.absent_value
    }
}

/// The task identifiers a page previously stored. `None` for any that were missing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskAssignment {
    pub assignment_id: Option<String>,
    pub hit_id: Option<String>,
    pub turk_submit_to: Option<String>,
    pub worker_id: Option<String>,
}

pub struct ParameterPersister<'a> {
    reader: &'a QueryStringReader,
    store: Option<&'a mut dyn Storage>,
    config: PersisterConfig,
}

impl<'a> ParameterPersister<'a> {
    /// `store` is `None` when the environment has no persistent storage; saves then do nothing.
    pub fn new(reader: &'a QueryStringReader, store: Option<&'a mut dyn Storage>) -> Self {
        Self {
            reader,
            store,
            config: PersisterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PersisterConfig) -> Self {
        self.config = config;
        self
    }

    /// Store parameter `name` under the key `name`. A missing parameter is written as the
    /// configured absent value.
    ///
    /// Without a store this returns `Ok(())` before the url is parsed, so a malformed url is not
    /// reported.
    pub fn save_parameter_to_store(&mut self, url: Option<&str>, name: &str) -> Result<(), Error> {
        let Some(store) = self.store.as_deref_mut() else {
            log::trace!("no storage attached, skipping '{name}'");
            return Ok(());
        };

        let value = self.reader.get_parameter(url, name)?;
        let value = value.as_deref().unwrap_or(&self.config.absent_value);

        log::debug!("storing {name}={value}");

        store.set_item(name, value);

        Ok(())
    }

    /// Save every known task parameter of the current page, in order.
    pub fn save_known_task_parameters(&mut self) -> Result<(), Error> {
        let names = self.config.known_parameters.clone();

        for name in &names {
            self.save_parameter_to_store(None, name)?;
        }

        Ok(())
    }

    /// Read the task identifiers back. `None` without a store.
    ///
    /// Always reads the `TASK_PARAMETERS` keys, whatever the configured known parameters are. A
    /// stored value equal to the absent value reads back as `None`, even if the page really sent it.
    pub fn load_task_assignment(&self) -> Option<TaskAssignment> {
        let store = self.store.as_deref()?;
        let [assignment_id, hit_id, turk_submit_to, worker_id] = TASK_PARAMETERS;

        let read = |key: &str| {
            store
                .get_item(key)
                .filter(|value| *value != self.config.absent_value)
                .map(str::to_string)
        };

        Some(TaskAssignment {
            assignment_id: read(assignment_id),
            hit_id: read(hit_id),
            turk_submit_to: read(turk_submit_to),
            worker_id: read(worker_id),
        })
    }
}
