//! Row-to-record mapping for each lane.
//!
//! Builders are pure: they take the loaded rows of one export and return
//! one record per row, in input order.

pub mod contacts;
pub mod employees;
pub mod pto_info;
pub mod pto_requests;

pub use contacts::build_contacts;
pub use employees::build_employees;
pub use pto_info::build_pto_employee_info;
pub use pto_requests::build_pto_requests;
