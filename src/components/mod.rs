//! UI Components
//!
//! Reusable Leptos components.

mod admin_shell;
mod brochure_leads_page;
mod dashboard;
mod date_filter;
mod enquiry_form;
mod leads_page;
mod login_page;
mod nav_bar;
mod pager;
mod plots_page;
mod properties_page;
mod property_list;
mod row_delete_button;

pub use admin_shell::AdminShell;
pub use brochure_leads_page::BrochureLeadsPage;
pub use dashboard::Dashboard;
pub use date_filter::DateFilter;
pub use enquiry_form::EnquiryForm;
pub use leads_page::LeadsPage;
pub use login_page::LoginPage;
pub use nav_bar::NavBar;
pub use pager::Pager;
pub use plots_page::PlotsPage;
pub use properties_page::PropertiesPage;
pub use property_list::PropertyList;
pub use row_delete_button::RowDeleteButton;
