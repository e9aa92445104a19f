use std::fmt;
use std::path::PathBuf;

use crate::columns::ColumnPolicy;

pub const EMPLOYEES_INPUT: &str = "Employee Reference.csv";
pub const PTO_INFO_INPUT: &str = "PTO Employee Info.csv";
pub const PTO_REQUESTS_INPUT: &str = "PTO Requests.csv";
pub const CONTACTS_INPUT: &str = "HH_Contacts_2025.csv";

pub const EMPLOYEES_OUTPUT: &str = "employees.json";
pub const PTO_INFO_OUTPUT: &str = "pto_employee_info.json";
pub const PTO_REQUESTS_OUTPUT: &str = "pto_requests.json";
pub const CONTACTS_OUTPUT: &str = "contacts.json";

/// One independent CSV-to-JSON conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lane {
    Employees,
    PtoEmployeeInfo,
    PtoRequests,
    Contacts,
}

impl Lane {
    /// Every lane in processing order.
    pub const ALL: [Lane; 4] = [
        Lane::Employees,
        Lane::PtoEmployeeInfo,
        Lane::PtoRequests,
        Lane::Contacts,
    ];

    pub fn input_file(self) -> &'static str {
        match self {
            Lane::Employees => EMPLOYEES_INPUT,
            Lane::PtoEmployeeInfo => PTO_INFO_INPUT,
            Lane::PtoRequests => PTO_REQUESTS_INPUT,
            Lane::Contacts => CONTACTS_INPUT,
        }
    }

    pub fn output_file(self) -> &'static str {
        match self {
            Lane::Employees => EMPLOYEES_OUTPUT,
            Lane::PtoEmployeeInfo => PTO_INFO_OUTPUT,
            Lane::PtoRequests => PTO_REQUESTS_OUTPUT,
            Lane::Contacts => CONTACTS_OUTPUT,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lane::Employees => write!(f, "employees"),
            Lane::PtoEmployeeInfo => write!(f, "pto-info"),
            Lane::PtoRequests => write!(f, "pto-requests"),
            Lane::Contacts => write!(f, "contacts"),
        }
    }
}

/// Settings for a conversion run. The default reads and writes the current
/// directory, runs every lane and tolerates absent columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub policy: ColumnPolicy,
    /// Lanes to run. Duplicates are ignored and processing always follows
    /// [`Lane::ALL`] order.
    pub lanes: Vec<Lane>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            policy: ColumnPolicy::default(),
            lanes: Lane::ALL.to_vec(),
        }
    }
}

impl ConvertConfig {
    pub fn input_path(&self, lane: Lane) -> PathBuf {
        self.input_dir.join(lane.input_file())
    }

    pub fn output_path(&self, lane: Lane) -> PathBuf {
        self.output_dir.join(lane.output_file())
    }

    /// Selected lanes, deduplicated, in processing order.
    pub fn selected_lanes(&self) -> Vec<Lane> {
        Lane::ALL
            .into_iter()
            .filter(|lane| self.lanes.contains(lane))
            .collect()
    }
}
