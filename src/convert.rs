use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::build;
use crate::columns::ColumnPolicy;
use crate::config::{ConvertConfig, Lane};
use crate::error::Result;
use crate::io::csv_read::{self, Row};
use crate::io::json_write;

/// Outcome of one lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneReport {
    pub lane: Lane,
    pub output: PathBuf,
    pub records: usize,
}

/// Runs every selected lane.
///
/// All inputs are loaded before anything is written, so a missing export
/// leaves existing outputs untouched. A failure while building a later lane
/// keeps the outputs already written by earlier lanes.
#[instrument(
    level = "info",
    skip_all,
    fields(input_dir = %config.input_dir.display(), output_dir = %config.output_dir.display())
)]
pub fn convert_all(config: &ConvertConfig) -> Result<Vec<LaneReport>> {
    let lanes = config.selected_lanes();

    let mut loaded = Vec::with_capacity(lanes.len());
    for lane in lanes {
        let rows = csv_read::load_csv(&config.input_path(lane))?;
        debug!(%lane, row_count = rows.len(), "input loaded");
        loaded.push((lane, rows));
    }

    fs::create_dir_all(&config.output_dir)?;

    let mut reports = Vec::with_capacity(loaded.len());
    for (lane, rows) in loaded {
        let output = config.output_path(lane);
        let records = write_lane(lane, &rows, &output, config.policy)?;
        info!(%lane, records, output = %output.display(), "lane converted");
        reports.push(LaneReport {
            lane,
            output,
            records,
        });
    }

    Ok(reports)
}

fn write_lane(lane: Lane, rows: &[Row], output: &Path, policy: ColumnPolicy) -> Result<usize> {
    match lane {
        Lane::Employees => {
            let records = build::build_employees(rows, policy)?;
            json_write::write_records(output, &records)?;
            Ok(records.len())
        }
        Lane::PtoEmployeeInfo => {
            let records = build::build_pto_employee_info(rows, policy)?;
            json_write::write_records(output, &records)?;
            Ok(records.len())
        }
        Lane::PtoRequests => {
            let records = build::build_pto_requests(rows, policy)?;
            json_write::write_records(output, &records)?;
            Ok(records.len())
        }
        Lane::Contacts => {
            let records = build::build_contacts(rows, policy)?;
            json_write::write_records(output, &records)?;
            Ok(records.len())
        }
    }
}

/// Converts the employee roster export into `employees.json` form.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn employees_to_json(input: &Path, output: &Path, policy: ColumnPolicy) -> Result<usize> {
    let rows = csv_read::load_csv(input)?;
    write_lane(Lane::Employees, &rows, output, policy)
}

/// Converts the PTO balance export into `pto_employee_info.json` form.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn pto_info_to_json(input: &Path, output: &Path, policy: ColumnPolicy) -> Result<usize> {
    let rows = csv_read::load_csv(input)?;
    write_lane(Lane::PtoEmployeeInfo, &rows, output, policy)
}

/// Converts the PTO request export into `pto_requests.json` form.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn pto_requests_to_json(input: &Path, output: &Path, policy: ColumnPolicy) -> Result<usize> {
    let rows = csv_read::load_csv(input)?;
    write_lane(Lane::PtoRequests, &rows, output, policy)
}

/// Converts the contact directory export into `contacts.json` form.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn contacts_to_json(input: &Path, output: &Path, policy: ColumnPolicy) -> Result<usize> {
    let rows = csv_read::load_csv(input)?;
    write_lane(Lane::Contacts, &rows, output, policy)
}
