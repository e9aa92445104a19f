use crate::columns::{ColumnPolicy, Fields};
use crate::error::Result;
use crate::io::csv_read::Row;
use crate::model::{PtoRequest, RequestCalendar};
use crate::normalize::normalize_name;

/// Maps leave request rows to [`PtoRequest`] records.
pub fn build_pto_requests(rows: &[Row], policy: ColumnPolicy) -> Result<Vec<PtoRequest>> {
    rows.iter()
        .map(|row| build_request(Fields::new(row, policy)))
        .collect()
}

fn build_request(fields: Fields<'_>) -> Result<PtoRequest> {
    let text = |column: &str| fields.text(&[column]);
    let name = text("Employee Name")?;

    Ok(PtoRequest {
        id: text("Response ID")?,
        emp_id: normalize_name(&name),
        name,
        request_type: text("PTO Request Type")?,
        start_date: text("PTO Request Start Date")?,
        start_half: text("Start AM/PM")?,
        end_date: text("PTO Request End Date")?,
        end_half: text("End AM/PM")?,
        total_days: fields.float(&["PTO Request Total Days"])?,
        department: text("Department")?,
        direct_report: text("Direct Report")?,
        calendar: RequestCalendar {
            request_month: text("Month of Start Date")?,
            request_year: text("Year")?,
            week_of_year: text("Week # of year")?,
        },
    })
}
