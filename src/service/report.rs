//! Read-only machine digests for the `active` and `running` commands.

use crate::{data::hackthebox::MachineCatalog, error::AppError};

pub const NO_ACTIVE_MESSAGE: &str = "Currently no active machines :(";
pub const NO_RUNNING_MESSAGE: &str = "Currently no machine is running :(";
const ACTIVE_HEADER: &str = "The following machines are active:\n";
const RUNNING_HEADER: &str = "The following machine is currently running:\n\n";

pub struct MachineReportService<'a> {
    catalog: &'a dyn MachineCatalog,
}

impl<'a> MachineReportService<'a> {
    pub fn new(catalog: &'a dyn MachineCatalog) -> Self {
        Self { catalog }
    }

    /// Builds the digest of currently active machines.
    ///
    /// One short display line per machine, in catalog order. An empty catalog answers with
    /// `NO_ACTIVE_MESSAGE`, matching how `upcoming` handles the same situation.
    ///
    /// # Returns
    /// - `Ok(String)` - Digest or the "none active" message
    /// - `Err(AppError::CatalogErr)` - Fetching or decoding failed
    pub async fn active_digest(&self) -> Result<String, AppError> {
        let machines = self.catalog.fetch_all_active_machines().await?;

        if machines.is_empty() {
            return Ok(NO_ACTIVE_MESSAGE.to_string());
        }

        let mut text = String::from(ACTIVE_HEADER);
        for machine in &machines {
            text.push_str(&format!("\n- {}", machine.to_short_display_string()));
        }

        Ok(text)
    }

    /// Describes the machine currently running, if any.
    ///
    /// # Returns
    /// - `Ok(String)` - Full display string of the running machine, or `NO_RUNNING_MESSAGE`
    /// - `Err(AppError::CatalogErr)` - Fetching or decoding failed
    pub async fn running_digest(&self) -> Result<String, AppError> {
        match self.catalog.fetch_running_machine().await? {
            Some(machine) => Ok(format!(
                "{}{}",
                RUNNING_HEADER,
                machine.to_display_string(true)
            )),
            None => Ok(NO_RUNNING_MESSAGE.to_string()),
        }
    }
}
