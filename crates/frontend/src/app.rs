//! JavaScript entry points used by the CRM pages.

use contracts::domain::a001_lead::{format_leads_for_export, Lead, LEADS_EXPORT_STEM};
use contracts::domain::a002_assigned_lead::{
    format_assigned_leads_for_export, format_billing_for_export, AssignedLead,
    ASSIGNED_LEADS_EXPORT_STEM, BILLING_EXPORT_STEM,
};
use contracts::shared::csv::{
    export_filename, lead_upload_template, parse_lead_rows, CsvCell, LEAD_TEMPLATE_STEM,
};
use contracts::system::{CreateUserDto, UpdateUserDto, User, UserRepository};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::shared::config::{load_config, Config};
use crate::shared::export::{download_text, export_records};
use crate::shared::user_storage::LocalStorageUserRepository;
use crate::usecases::u501_bulk_upload_leads::bulk_upload_leads;

fn config() -> Result<Config, JsValue> {
    load_config().map_err(|e| JsValue::from_str(&format!("Invalid configuration: {:#}", e)))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn export<V: CsvCell>(records: Vec<IndexMap<String, V>>, stem: &str) -> Result<String, JsValue> {
    let config = config()?;
    export_records(&records, stem, &config.export).map_err(|e| JsValue::from_str(&e))
}

/// Downloads arbitrary plain objects as CSV. Columns are the union of all
/// keys in first-seen order; `null` and missing values become empty cells.
#[wasm_bindgen(js_name = exportRecords)]
pub fn export_plain_records(rows: JsValue, stem: &str) -> Result<String, JsValue> {
    let rows: Vec<IndexMap<String, Value>> = from_js(rows)?;
    export(rows, stem)
}

/// Downloads leads as CSV; returns the file name
#[wasm_bindgen(js_name = exportLeads)]
pub fn export_leads(leads: JsValue) -> Result<String, JsValue> {
    let leads: Vec<Lead> = from_js(leads)?;
    export(format_leads_for_export(&leads), LEADS_EXPORT_STEM)
}

#[wasm_bindgen(js_name = exportAssignedLeads)]
pub fn export_assigned_leads(leads: JsValue) -> Result<String, JsValue> {
    let leads: Vec<AssignedLead> = from_js(leads)?;
    export(format_assigned_leads_for_export(&leads), ASSIGNED_LEADS_EXPORT_STEM)
}

#[wasm_bindgen(js_name = exportBilling)]
pub fn export_billing(leads: JsValue) -> Result<String, JsValue> {
    let leads: Vec<AssignedLead> = from_js(leads)?;
    export(format_billing_for_export(&leads), BILLING_EXPORT_STEM)
}

#[wasm_bindgen(js_name = downloadLeadTemplate)]
pub fn download_lead_template() -> Result<String, JsValue> {
    let config = config()?;
    let filename = export_filename(LEAD_TEMPLATE_STEM, chrono::Utc::now().date_naive());
    download_text(&lead_upload_template(), &filename, &config.export.mime_type)
        .map_err(|e| JsValue::from_str(&e))?;
    Ok(filename)
}

/// Parses CSV text into lead records keyed by field names, for preview
#[wasm_bindgen(js_name = parseLeadCsv)]
pub fn parse_lead_csv(text: &str) -> Result<JsValue, JsValue> {
    to_js(&parse_lead_rows(text))
}

/// Reads, parses and submits a lead CSV file; resolves to the per-row results
#[wasm_bindgen(js_name = bulkUploadLeads)]
pub async fn bulk_upload(file: web_sys::File) -> Result<JsValue, JsValue> {
    let response = bulk_upload_leads(&file)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&response)
}

fn user_repository() -> Result<LocalStorageUserRepository, JsValue> {
    let config = config()?;
    LocalStorageUserRepository::open(&config.storage.users_key)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = listUsers)]
pub fn list_users() -> Result<JsValue, JsValue> {
    to_js(&user_repository()?.list())
}

#[wasm_bindgen(js_name = addUser)]
pub fn add_user(dto: JsValue) -> Result<JsValue, JsValue> {
    let user = User::create(from_js::<CreateUserDto>(dto)?);
    user_repository()?
        .add(user.clone())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&user)
}

#[wasm_bindgen(js_name = updateUser)]
pub fn update_user(dto: JsValue) -> Result<JsValue, JsValue> {
    let dto: UpdateUserDto = from_js(dto)?;
    let user = user_repository()?
        .update(&dto)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&user)
}

#[wasm_bindgen(js_name = removeUser)]
pub fn remove_user(id: &str) -> Result<(), JsValue> {
    user_repository()?
        .remove(id)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
