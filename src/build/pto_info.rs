use crate::columns::{ColumnPolicy, Fields};
use crate::error::Result;
use crate::io::csv_read::Row;
use crate::model::{PtoBalances, PtoEmployeeInfo, PtoMeta};
use crate::normalize::normalize_name;

const NAME: &[&str] = &["NAME", "Name", "Employee Name"];

/// Maps PTO balance rows to [`PtoEmployeeInfo`] records keyed by the
/// normalized employee name.
pub fn build_pto_employee_info(rows: &[Row], policy: ColumnPolicy) -> Result<Vec<PtoEmployeeInfo>> {
    rows.iter()
        .map(|row| build_info(Fields::new(row, policy)))
        .collect()
}

fn build_info(fields: Fields<'_>) -> Result<PtoEmployeeInfo> {
    let name = fields.text(NAME)?;

    Ok(PtoEmployeeInfo {
        emp_id: normalize_name(&name),
        name,
        department: fields.text(&["Department"])?,
        direct_report: fields.text(&["Direct Report"])?,
        balances: balances(fields)?,
        meta: meta(fields)?,
    })
}

fn balances(fields: Fields<'_>) -> Result<PtoBalances> {
    let days = |column: &str| fields.float(&[column]);

    Ok(PtoBalances {
        vacation_beginning: days("Vacation Beginning")?,
        vacation_approved: days("Vacation Approved")?,
        future_vacation_approved: days("Future Vacation Days Approved")?,
        vacation_used: days("Vacation Days Used")?,
        vacation_available: days("Vacation Available")?,

        sick_beginning: days("Sick Beginning")?,
        sick_approved: days("Sick Approved")?,
        future_sick_days: days("Future Sick Days")?,
        sick_used: days("Sick Days Used")?,
        sick_available: days("Sick Available")?,

        unpaid_beginning: days("Unpaid Beginning")?,
        unpaid_approved: days("Unpaid Approved")?,
        future_unpaid_days: days("Future Unpaid Days")?,
        unpaid_used: days("Unpaid Days Used")?,
        unpaid_available: days("Unpaid Available")?,
    })
}

fn meta(fields: Fields<'_>) -> Result<PtoMeta> {
    let text = |column: &str| fields.text(&[column]);

    Ok(PtoMeta {
        status: text("Employee Status")?,
        age: fields.int(&["Age"])?,
        hire_month: fields.int(&["Hire Month"])?,
        compensation_category: text("Compensation Category")?,
        gender: text("Gender")?,
        tenure: text("Tenure (in years)")?,
        tenure_category: text("Tenure Category")?,
        salary_hourly: text("Salary/Hourly")?,
        indirect_cos_overhead: text("Indirect/COS/Overhead")?,
        compensation: text("Compensation")?,
        dob: text("DOB")?,
    })
}
