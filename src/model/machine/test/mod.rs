use super::*;
use chrono::NaiveDate;
use serde_json::json;
use test_utils::{builder::MachineJsonBuilder, fixture::machine::RELEASE_TIMESTAMP};
