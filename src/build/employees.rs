use crate::columns::{ColumnPolicy, Fields};
use crate::error::Result;
use crate::io::csv_read::Row;
use crate::model::{BenefitEnrollment, Benefits, Employee, EmployeeMeta, PlanCost, Retirement};
use crate::normalize::normalize_name;

const EMP_ID: &[&str] = &["EmpID", "EmployeeID", "Employee ID", "Emp ID"];
const NAME: &[&str] = &["Name", "NAME", "Employee Name"];
const DEPARTMENT: &[&str] = &["Department", "Dept"];
const DIRECT_REPORT: &[&str] = &["Direct Report", "Manager"];
const EMAIL: &[&str] = &["Email 1", "Email", "Work Email"];
const SECONDARY_EMAIL: &[&str] = &["Email 2", "Personal Email"];
const PASSCODE: &[&str] = &["Passcode", "PIN"];
const PLAN_401K: &[&str] = &["401k", "401K", "401k Code"];
const TAX_CODE: &[&str] = &["Tax Code", "Tax Status"];
const STATUS: &[&str] = &["Employee Status", "Status"];
const GENDER: &[&str] = &["Gender"];
const HIRE_DATE: &[&str] = &["Hire Date"];
const DOB: &[&str] = &["DOB", "Date of Birth"];
const SALARY_HOURLY: &[&str] = &["Salary/Hourly"];

/// Cell values that mark a plan as elected.
const ENROLLED_MARKERS: &[&str] = &["y", "yes", "true", "x", "1", "enrolled"];

/// Maps roster rows to [`Employee`] records.
///
/// Every roster column is optional: absent columns become empty text, false
/// or zero regardless of `policy`. When no ID column is filled the key is
/// derived from the name.
pub fn build_employees(rows: &[Row], policy: ColumnPolicy) -> Result<Vec<Employee>> {
    Ok(rows
        .iter()
        .map(|row| build_employee(Fields::new(row, policy)))
        .collect())
}

fn build_employee(fields: Fields<'_>) -> Employee {
    let name = fields.optional_text(NAME);
    let emp_id = match fields.optional_trimmed(EMP_ID) {
        explicit if !explicit.is_empty() => explicit,
        _ => normalize_name(&name),
    };

    Employee {
        emp_id,
        name,
        department: fields.optional_text(DEPARTMENT),
        direct_report: fields.optional_text(DIRECT_REPORT),
        email: fields.optional_trimmed(EMAIL),
        secondary_email: fields.optional_trimmed(SECONDARY_EMAIL),
        passcode: fields.optional_trimmed(PASSCODE),
        benefits: Benefits {
            medical: enrollment(fields, "Medical"),
            dental: enrollment(fields, "Dental"),
            vision: enrollment(fields, "Vision"),
        },
        retirement: Retirement {
            plan401k: fields.optional_trimmed(PLAN_401K),
            tax_code: fields.optional_trimmed(TAX_CODE),
        },
        meta: EmployeeMeta {
            status: fields.optional_text(STATUS),
            gender: fields.optional_text(GENDER),
            hire_date: fields.optional_text(HIRE_DATE),
            dob: fields.optional_text(DOB),
            salary_hourly: fields.optional_text(SALARY_HOURLY),
        },
    }
}

/// Reads the `{plan}`-prefixed enrollment, plan name and cost columns.
fn enrollment(fields: Fields<'_>, plan: &str) -> BenefitEnrollment {
    let enrolled_columns = [
        plan.to_string(),
        format!("{plan} Enrolled"),
        format!("{plan} Enrollment"),
    ];
    let plan_columns = [format!("{plan} Plan"), format!("{plan} Plan Name")];

    let cost = |period: &str, payer: &str| {
        let columns = [
            format!("{plan} {period} {payer}"),
            format!("{plan} {payer} {period}"),
        ];
        fields.optional_float(&as_refs(&columns))
    };

    BenefitEnrollment {
        enrolled: is_enrolled(&fields.optional_text(&as_refs(&enrolled_columns))),
        plan: fields.optional_trimmed(&as_refs(&plan_columns)),
        cost: PlanCost {
            monthly_employee: cost("Monthly", "EE"),
            monthly_employer: cost("Monthly", "ER"),
            weekly_employee: cost("Weekly", "EE"),
            weekly_employer: cost("Weekly", "ER"),
        },
    }
}

fn is_enrolled(value: &str) -> bool {
    let value = value.trim();
    ENROLLED_MARKERS
        .iter()
        .any(|marker| value.eq_ignore_ascii_case(marker))
}

fn as_refs(columns: &[String]) -> Vec<&str> {
    columns.iter().map(String::as_str).collect()
}
