//! REST Backend Adapter
//!
//! One async wrapper per backend operation. The backend is inconsistent
//! about response envelopes (bare arrays, `{data: …}`, `{success,
//! properties, …}`), so every response is normalized here and callers
//! only ever see `Vec<T>` / `PagedList<T>` / the updated item.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BrochureLead, Lead, PlotInquiry, Property};

/// Backend base URL; override at build time with ESTATES_API_BASE
pub const API_BASE: &str = match option_env!("ESTATES_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5000",
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Server-paged property list, already unwrapped from its envelope
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
}

// ========================
// Envelope Normalization
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Paged(PagedEnvelope<T>),
    Bare(Vec<T>),
}

#[derive(Deserialize)]
struct PagedEnvelope<T> {
    #[serde(default)]
    success: bool,
    properties: Vec<T>,
    #[serde(rename = "totalPages", default)]
    total_pages: Option<usize>,
    #[serde(rename = "currentPage", default)]
    current_page: Option<usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

fn parse_list<T: DeserializeOwned>(body: &str) -> ApiResult<Vec<T>> {
    let envelope: ListEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(match envelope {
        ListEnvelope::Wrapped { data } => data,
        ListEnvelope::Paged(paged) => paged.properties,
        ListEnvelope::Bare(items) => items,
    })
}

fn parse_item<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let envelope: ItemEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(match envelope {
        ItemEnvelope::Wrapped { data } => data,
        ItemEnvelope::Bare(item) => item,
    })
}

fn parse_page<T: DeserializeOwned>(body: &str) -> ApiResult<PagedList<T>> {
    let paged: PagedEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !paged.success {
        return Err(ApiError::Decode("paged response with success=false".into()));
    }
    Ok(PagedList {
        items: paged.properties,
        total_pages: paged.total_pages.unwrap_or(1).max(1),
        current_page: paged.current_page.unwrap_or(1).max(1),
    })
}

// ========================
// Request Helpers
// ========================

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

// reserved characters when a slug or id travels as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn check_status(resp: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

async fn get_list<T: DeserializeOwned>(path: &str) -> ApiResult<Vec<T>> {
    let resp = check_status(Client::new().get(url(path)).send().await?)?;
    parse_list(&resp.text().await?)
}

#[derive(Serialize)]
struct MarkBody {
    marked: bool,
}

async fn put_marked<T: DeserializeOwned>(path: &str, marked: bool) -> ApiResult<T> {
    let resp = Client::new()
        .put(url(path))
        .json(&MarkBody { marked })
        .send()
        .await?;
    let resp = check_status(resp)?;
    parse_item(&resp.text().await?)
}

async fn delete(path: &str) -> ApiResult<()> {
    let resp = Client::new().delete(url(path)).send().await?;
    check_status(resp)?;
    Ok(())
}

// ========================
// Leads
// ========================

pub async fn fetch_leads() -> ApiResult<Vec<Lead>> {
    get_list("/api/lead/all").await
}

pub async fn set_lead_marked(id: &str, marked: bool) -> ApiResult<Lead> {
    put_marked(&format!("/api/lead/{}", path_segment(id)), marked).await
}

pub async fn delete_lead(id: &str) -> ApiResult<()> {
    delete(&format!("/api/lead/{}", path_segment(id))).await
}

/// Enquiry form payload
#[derive(Serialize)]
pub struct NewLead<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub purpose: &'a str,
    pub requirements: &'a str,
    pub budget: &'a str,
}

pub async fn submit_enquiry(lead: &NewLead<'_>) -> ApiResult<()> {
    let resp = Client::new().post(url("/api/lead")).json(lead).send().await?;
    check_status(resp)?;
    Ok(())
}

// ========================
// Brochure Leads
// ========================

pub async fn fetch_brochure_leads() -> ApiResult<Vec<BrochureLead>> {
    get_list("/brochure-leads").await
}

pub async fn set_brochure_lead_marked(id: &str, marked: bool) -> ApiResult<BrochureLead> {
    put_marked(&format!("/brochure-leads/{}", path_segment(id)), marked).await
}

pub async fn delete_brochure_lead(id: &str) -> ApiResult<()> {
    delete(&format!("/brochure-leads/{}", path_segment(id))).await
}

// ========================
// Plot Inquiries
// ========================

pub async fn fetch_plot_inquiries() -> ApiResult<Vec<PlotInquiry>> {
    get_list("/plot/all").await
}

pub async fn set_plot_inquiry_marked(id: &str, marked: bool) -> ApiResult<PlotInquiry> {
    put_marked(&format!("/plot/{}", path_segment(id)), marked).await
}

pub async fn delete_plot_inquiry(id: &str) -> ApiResult<()> {
    delete(&format!("/plot/{}", path_segment(id))).await
}

// ========================
// Properties
// ========================

/// Full listing for the public pages (the backend returns everything
/// when no paging params are sent)
pub async fn fetch_properties() -> ApiResult<Vec<Property>> {
    get_list("/api/property").await
}

/// Server-paged listing for the admin table
pub async fn fetch_properties_page(page: usize, limit: usize) -> ApiResult<PagedList<Property>> {
    let resp = Client::new()
        .get(url("/api/property"))
        .query(&[("page", page), ("limit", limit)])
        .send()
        .await?;
    let resp = check_status(resp)?;
    parse_page(&resp.text().await?)
}

pub async fn delete_property(slug: &str) -> ApiResult<()> {
    delete(&format!("/api/property/{}", path_segment(slug))).await
}

// ========================
// Dashboard Counts
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub leads: usize,
    pub brochure_leads: usize,
    pub blogs: usize,
    pub properties: usize,
    pub plots: usize,
    pub sell_requests: usize,
}

async fn count(path: &str) -> usize {
    match get_list::<serde_json::Value>(path).await {
        Ok(items) => items.len(),
        Err(err) => {
            web_sys::console::error_1(&format!("Error counting {path}: {err}").into());
            0
        }
    }
}

/// Stat-card numbers; a failed fetch renders as 0
pub async fn fetch_dashboard_counts() -> DashboardCounts {
    DashboardCounts {
        leads: count("/api/lead/all").await,
        brochure_leads: count("/brochure-leads").await,
        blogs: count("/blog/viewblog").await,
        // same /api/property route the admin table pages through; the backend
        // also serves it at bare /property, which this client never uses
        properties: count("/api/property?page=1&limit=10000").await,
        plots: count("/plot/all").await,
        sell_requests: count("/sellproperty/viewsell").await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlotInquiry;

    #[test]
    fn list_accepts_bare_array() {
        let items: Vec<serde_json::Value> = parse_list(r#"[{"a":1},{"a":2}]"#).expect("bare");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn list_accepts_data_wrapper() {
        let body = r#"{"data":[{
            "_id":"p1","name":"N","phone":"9","email":"e@x.y",
            "userType":"Buyer","plotSize":"200","location":"L","message":"M",
            "createdAt":"2024-01-01T00:00:00Z"
        }]}"#;
        let items: Vec<PlotInquiry> = parse_list(body).expect("wrapped");
        assert_eq!(items[0].id, "p1");
        assert!(!items[0].marked);
    }

    #[test]
    fn list_accepts_paged_envelope() {
        let body = r#"{"success":true,"properties":[],"totalPages":4,"currentPage":2}"#;
        let items: Vec<serde_json::Value> = parse_list(body).expect("paged");
        assert!(items.is_empty());
    }

    #[test]
    fn list_rejects_garbage() {
        let err = parse_list::<serde_json::Value>(r#"{"unexpected":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn item_accepts_bare_and_wrapped() {
        let bare: serde_json::Value = parse_item(r#"{"x":1}"#).expect("bare");
        assert_eq!(bare["x"], 1);
        let wrapped: serde_json::Value = parse_item(r#"{"data":{"x":2}}"#).expect("wrapped");
        assert_eq!(wrapped["x"], 2);
    }

    #[test]
    fn page_requires_success() {
        let ok: PagedList<serde_json::Value> =
            parse_page(r#"{"success":true,"properties":[{}],"totalPages":3,"currentPage":2}"#)
                .expect("page");
        assert_eq!(ok.total_pages, 3);
        assert_eq!(ok.current_page, 2);
        assert_eq!(ok.items.len(), 1);

        let err = parse_page::<serde_json::Value>(r#"{"success":false,"properties":[]}"#);
        assert!(matches!(err, Err(ApiError::Decode(_))));
    }

    #[test]
    fn page_defaults_missing_totals_to_one() {
        let page: PagedList<serde_json::Value> =
            parse_page(r#"{"success":true,"properties":[]}"#).expect("page");
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn slugs_are_safe_as_path_segments() {
        assert_eq!(path_segment("villa-42"), "villa-42");
        assert_eq!(path_segment("dlf phase 1"), "dlf%20phase%201");
        assert_eq!(path_segment("a/b"), "a%2Fb");
    }
}
