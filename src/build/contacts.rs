use crate::columns::{ColumnPolicy, Fields};
use crate::error::Result;
use crate::io::csv_read::Row;
use crate::model::{Contact, ModelHome};
use crate::normalize::normalize_name;

const EMAIL: &[&str] = &["Email Address", "Email"];
const WORK_NUMBER: &[&str] = &["Work Number", "Work Phone"];
const PERSONAL_NUMBER: &[&str] = &["Personal Number", "Personal Phone", "Cell"];

/// (name column, phone column) of each model home slot, in output order.
const MODEL_HOME_COLUMNS: &[(&str, &str)] = &[
    ("Model Home 1", "Model Home 1 Phone"),
    ("Model Home 2", "Model Home 2 Phone"),
];

/// Maps directory rows to [`Contact`] records.
pub fn build_contacts(rows: &[Row], policy: ColumnPolicy) -> Result<Vec<Contact>> {
    rows.iter()
        .map(|row| build_contact(Fields::new(row, policy)))
        .collect()
}

fn build_contact(fields: Fields<'_>) -> Result<Contact> {
    let first_name = fields.trimmed(&["First Name"])?;
    let last_name = fields.trimmed(&["Last Name"])?;

    Ok(Contact {
        emp_id: normalize_name(&format!("{last_name}, {first_name}")),
        name: format!("{first_name} {last_name}"),
        first_name,
        last_name,
        email: fields.trimmed(EMAIL)?,
        work_number: fields.trimmed(WORK_NUMBER)?,
        personal_number: fields.trimmed(PERSONAL_NUMBER)?,
        department: fields.text(&["Department"])?,
        address: fields.text(&["Address"])?,
        region: fields.text(&["Region"])?,
        model_homes: model_homes(fields),
    })
}

/// Collects the filled model home slots; a slot counts when either its name
/// or its phone is non-empty.
fn model_homes(fields: Fields<'_>) -> Vec<ModelHome> {
    MODEL_HOME_COLUMNS
        .iter()
        .map(|&(name, phone)| ModelHome {
            name: fields.optional_trimmed(&[name]),
            phone: fields.optional_trimmed(&[phone]),
        })
        .filter(|home| !home.name.is_empty() || !home.phone.is_empty())
        .collect()
}
