use serde::Serialize;

/// Short employee key shared by every output document. It is either read
/// from an explicit ID column or derived with
/// [`normalize_name`](crate::normalize::normalize_name).
pub type EmpId = String;

/// Entry of `employees.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub emp_id: EmpId,
    pub name: String,
    pub department: String,
    pub direct_report: String,
    pub email: String,
    pub secondary_email: String,
    pub passcode: String,
    pub benefits: Benefits,
    pub retirement: Retirement,
    pub meta: EmployeeMeta,
}

/// Enrollment in the three insured plans.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Benefits {
    pub medical: BenefitEnrollment,
    pub dental: BenefitEnrollment,
    pub vision: BenefitEnrollment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenefitEnrollment {
    pub enrolled: bool,
    /// Plan name as exported, e.g. `PPO`.
    pub plan: String,
    pub cost: PlanCost,
}

/// Premium split between employee (EE) and employer (ER).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCost {
    pub monthly_employee: f64,
    pub monthly_employer: f64,
    pub weekly_employee: f64,
    pub weekly_employer: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Retirement {
    pub plan401k: String,
    pub tax_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeMeta {
    pub status: String,
    pub gender: String,
    pub hire_date: String,
    pub dob: String,
    pub salary_hourly: String,
}

/// Entry of `pto_employee_info.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtoEmployeeInfo {
    pub emp_id: EmpId,
    pub name: String,
    pub department: String,
    pub direct_report: String,
    pub balances: PtoBalances,
    pub meta: PtoMeta,
}

/// Leave balances in days. Each category carries beginning, approved,
/// future approved, used and available counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtoBalances {
    pub vacation_beginning: f64,
    pub vacation_approved: f64,
    pub future_vacation_approved: f64,
    pub vacation_used: f64,
    pub vacation_available: f64,

    pub sick_beginning: f64,
    pub sick_approved: f64,
    pub future_sick_days: f64,
    pub sick_used: f64,
    pub sick_available: f64,

    pub unpaid_beginning: f64,
    pub unpaid_approved: f64,
    pub future_unpaid_days: f64,
    pub unpaid_used: f64,
    pub unpaid_available: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtoMeta {
    pub status: String,
    pub age: i64,
    pub hire_month: i64,
    pub compensation_category: String,
    pub gender: String,
    /// Kept as exported text; the export mixes years and labels.
    pub tenure: String,
    pub tenure_category: String,
    pub salary_hourly: String,
    pub indirect_cos_overhead: String,
    pub compensation: String,
    pub dob: String,
}

/// Entry of `pto_requests.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtoRequest {
    pub id: String,
    pub emp_id: EmpId,
    pub name: String,
    #[serde(rename = "type")]
    pub request_type: String,
    pub start_date: String,
    /// `AM`/`PM` half-day marker for the first day.
    pub start_half: String,
    pub end_date: String,
    pub end_half: String,
    pub total_days: f64,
    pub department: String,
    pub direct_report: String,
    pub calendar: RequestCalendar,
}

/// Calendar columns computed by the export itself; passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCalendar {
    pub request_month: String,
    pub request_year: String,
    pub week_of_year: String,
}

/// Entry of `contacts.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub emp_id: EmpId,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub work_number: String,
    pub personal_number: String,
    pub department: String,
    pub address: String,
    pub region: String,
    pub model_homes: Vec<ModelHome>,
}

/// Model home a contact can be reached at.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelHome {
    pub name: String,
    pub phone: String,
}
